use crate::tally::{
    error::ApiError,
    store::{users, User},
};
use axum::{
    extract::{Extension, Path},
    Json,
};
use sqlx::PgPool;
use tracing::{error, instrument};

#[utoipa::path(
    get,
    path = "/profile/{id}",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User record", body = User, content_type = "application/json"),
        (status = 404, description = "User not found", body = String),
    ),
    tag = "profile"
)]
// axum handler for profile lookup
#[instrument(skip(pool))]
pub async fn profile(
    pool: Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    users::find_by_id(&pool, id)
        .await
        .map_err(|err| {
            error!("Error getting user {id}: {err}");
            ApiError::Retrieval
        })?
        .map(Json)
        .ok_or(ApiError::NotFound)
}
