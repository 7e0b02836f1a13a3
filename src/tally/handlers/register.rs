use crate::tally::{
    error::ApiError,
    handlers::normalize_email,
    password,
    store::{self, credentials, users, User},
};
use axum::{extract::Extension, Json};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct Register {
    email: String,
    name: String,
    #[schema(value_type = String)]
    password: SecretString,
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = Register,
    responses(
        (status = 200, description = "Registration successful", body = User, content_type = "application/json"),
        (status = 400, description = "Registration failed, message includes the cause when available", body = String),
    ),
    tag = "register"
)]
// axum handler for register
#[instrument(skip(pool))]
pub async fn register(
    pool: Extension<PgPool>,
    payload: Option<Json<Register>>,
) -> Result<Json<User>, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::Validation("Missing payload".to_string()));
    };

    debug!("register request: {:?}", request);

    let email = normalize_email(&request.email);
    if email.is_empty() {
        return Err(ApiError::Validation("Missing email".to_string()));
    }

    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("Missing name".to_string()));
    }

    if request.password.expose_secret().is_empty() {
        return Err(ApiError::Validation("Missing password".to_string()));
    }

    let plaintext = request.password.expose_secret().to_string();
    let hash = tokio::task::spawn_blocking(move || password::hash(&plaintext))
        .await
        .map_err(|err| {
            error!("Password hashing task failed: {err}");
            ApiError::Registration("password hashing failed".to_string())
        })?
        .map_err(|err| {
            error!("Error hashing password: {err}");
            ApiError::Registration("password hashing failed".to_string())
        })?;

    let user = create_account(&pool, &email, name, &hash).await?;

    debug!("Registered new user: {}", user.id);

    Ok(Json(user))
}

/// Create the credential row and its linked user row as one atomic
/// unit: both commit together or the transaction rolls back on drop,
/// leaving no orphan row observable.
async fn create_account(
    pool: &PgPool,
    email: &str,
    name: &str,
    hash: &str,
) -> Result<User, ApiError> {
    let mut tx = pool.begin().await.map_err(|err| {
        error!("Failed to begin registration transaction: {err}");
        ApiError::Store(err)
    })?;

    let login_email = credentials::insert(&mut tx, email, hash).await.map_err(|err| {
        if store::is_unique_violation(&err) {
            ApiError::Registration("email is already registered".to_string())
        } else {
            registration_error(&err)
        }
    })?;

    let user = users::insert(&mut tx, &login_email, name, Utc::now())
        .await
        .map_err(|err| registration_error(&err))?;

    tx.commit().await.map_err(|err| registration_error(&err))?;

    Ok(user)
}

fn registration_error(err: &sqlx::Error) -> ApiError {
    error!("Registration failed: {err}");

    let detail = err
        .as_database_error()
        .map_or_else(|| err.to_string(), |db_err| db_err.message().to_string());

    ApiError::Registration(detail)
}
