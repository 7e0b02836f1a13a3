use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors surfaced at the handler boundary. Every variant maps to an
/// HTTP status and a short message; none of them crashes the process.
///
/// Unknown email and wrong password share the same variant so the
/// response never reveals whether an account exists.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials...")]
    InvalidCredentials,

    /// Registration failures carry the underlying cause when available
    /// (e.g. a duplicate email).
    #[error("Could not register user. Reason: {0}")]
    Registration(String),

    /// Credentials matched but the linked user row is missing. This is
    /// a data inconsistency, not a bad login.
    #[error("Unable to retrieve user.")]
    UserUnavailable,

    #[error("User not found.")]
    NotFound,

    /// Backing-store failure while reading a profile.
    #[error("Error getting user.")]
    Retrieval,

    #[error("Could not update score.")]
    ScoreUpdate,

    /// Generic backing-store failure outside the paths above.
    #[error("Storage error.")]
    Store(#[source] sqlx::Error),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::Retrieval => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_path_errors_are_bad_request() {
        assert_eq!(
            ApiError::Validation("Missing payload".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Registration("duplicate email".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UserUnavailable.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::ScoreUpdate.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Store(sqlx::Error::PoolClosed).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_read_path_errors_are_not_found() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Retrieval.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_registration_message_includes_cause() {
        let err = ApiError::Registration("email is already registered".to_string());
        assert_eq!(
            err.to_string(),
            "Could not register user. Reason: email is already registered"
        );
    }

    #[test]
    fn test_auth_failures_share_one_message() {
        // Unknown email and wrong password must be indistinguishable
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials...");
    }
}
