use crate::tally::{
    error::ApiError,
    store::{users, ScoreChange},
};
use axum::{extract::Extension, Json};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct ScoreUpdate {
    id: i32,
    /// Non-zero increments the score by that amount; zero or absent
    /// resets it to 0.
    score: Option<i32>,
}

#[utoipa::path(
    put,
    path = "/image",
    request_body = ScoreUpdate,
    responses(
        (status = 200, description = "The resulting score", body = i32, content_type = "application/json"),
        (status = 400, description = "Update failed", body = String),
    ),
    tag = "score"
)]
// axum handler for score updates
#[instrument(skip(pool))]
pub async fn score(
    pool: Extension<PgPool>,
    payload: Option<Json<ScoreUpdate>>,
) -> Result<Json<i32>, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    let change = ScoreChange::from_request(request.score);

    debug!("Applying {change:?} to user {}", request.id);

    let entries = users::adjust_score(&pool, request.id, change)
        .await
        .map_err(|err| {
            error!("Error updating score for user {}: {err}", request.id);
            ApiError::ScoreUpdate
        })?
        .ok_or(ApiError::ScoreUpdate)?;

    Ok(Json(entries))
}
