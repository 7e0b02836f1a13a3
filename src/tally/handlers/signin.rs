use crate::tally::{
    error::ApiError,
    handlers::normalize_email,
    password,
    store::{credentials, users, User},
};
use axum::{extract::Extension, Json};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct Signin {
    email: String,
    #[schema(value_type = String)]
    password: SecretString,
}

#[utoipa::path(
    post,
    path = "/signin",
    request_body = Signin,
    responses(
        (status = 200, description = "Sign-in successful", body = User, content_type = "application/json"),
        (status = 400, description = "Invalid credentials", body = String),
    ),
    tag = "signin"
)]
// axum handler for signin
#[instrument(skip(pool))]
pub async fn signin(
    pool: Extension<PgPool>,
    payload: Option<Json<Signin>>,
) -> Result<Json<User>, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    debug!("signin request: {:?}", request);

    let email = normalize_email(&request.email);

    // Unknown email, lookup failure and wrong password all collapse to
    // the same response so account existence cannot be probed.
    let credential = credentials::find_by_email(&pool, &email)
        .await
        .map_err(|err| {
            error!("Error looking up credential: {err}");
            ApiError::InvalidCredentials
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    let submitted = request.password.expose_secret().to_string();
    let hash = credential.hash;
    let verified = tokio::task::spawn_blocking(move || password::verify(&submitted, &hash))
        .await
        .map_err(|err| {
            error!("Password verification task failed: {err}");
            ApiError::InvalidCredentials
        })?;

    if !verified {
        return Err(ApiError::InvalidCredentials);
    }

    let user = users::find_by_email(&pool, &credential.email)
        .await
        .map_err(|err| {
            error!("Error retrieving user record: {err}");
            ApiError::UserUnavailable
        })?
        .ok_or(ApiError::UserUnavailable)?;

    debug!("Signing in user: {}", user.id);

    Ok(Json(user))
}
