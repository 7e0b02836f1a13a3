//! Persistence layer: the credential store (`login` table) and the
//! user directory (`users` table). Callers get an injected `PgPool` or
//! an open transaction; nothing here holds global state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

pub mod credentials;
pub mod users;

/// A credential row: normalized email plus salted Argon2id hash.
#[derive(FromRow, Debug)]
pub struct Credential {
    pub email: String,
    pub hash: String,
}

/// A user profile row. `entries` is the score counter and defaults to
/// zero at the store level.
#[derive(ToSchema, Serialize, FromRow, Debug)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub joined: DateTime<Utc>,
    pub entries: i32,
}

/// Explicit score mutation, replacing the ambiguous "truthy amount or
/// reset" convention: zero and absent both mean reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreChange {
    Increment(i32),
    Reset,
}

impl ScoreChange {
    #[must_use]
    pub const fn from_request(score: Option<i32>) -> Self {
        match score {
            Some(amount) if amount != 0 => Self::Increment(amount),
            _ => Self::Reset,
        }
    }
}

#[must_use]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
