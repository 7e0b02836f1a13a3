//! User directory over the `users` table.

use crate::tally::store::{ScoreChange, User};
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::{info_span, Instrument};

/// # Errors
/// Returns an error if the query fails.
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    let query = "SELECT id, email, name, joined, entries FROM users WHERE id = $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    sqlx::query_as::<_, User>(query)
        .bind(id)
        .fetch_optional(pool)
        .instrument(span)
        .await
}

/// # Errors
/// Returns an error if the query fails.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let query = "SELECT id, email, name, joined, entries FROM users WHERE email = $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    sqlx::query_as::<_, User>(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await
}

/// Insert a user row inside an open transaction and return the created
/// record. `entries` is left to the store default.
///
/// # Errors
/// Returns an error if the insert fails.
pub async fn insert(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    email: &str,
    name: &str,
    joined: DateTime<Utc>,
) -> Result<User, sqlx::Error> {
    let query = "INSERT INTO users (email, name, joined) VALUES ($1, $2, $3) \
                 RETURNING id, email, name, joined, entries";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    sqlx::query_as::<_, User>(query)
        .bind(email)
        .bind(name)
        .bind(joined)
        .fetch_one(&mut **tx)
        .instrument(span)
        .await
}

/// Apply a score change as one atomic read-modify-write at the store,
/// so concurrent updates against the same id serialize without lost
/// increments. Returns the resulting score, or `None` when no row
/// matches the id.
///
/// # Errors
/// Returns an error if the update fails.
pub async fn adjust_score(
    pool: &PgPool,
    id: i32,
    change: ScoreChange,
) -> Result<Option<i32>, sqlx::Error> {
    let query = match change {
        ScoreChange::Increment(_) => {
            "UPDATE users SET entries = entries + $2 WHERE id = $1 RETURNING entries"
        }
        ScoreChange::Reset => "UPDATE users SET entries = 0 WHERE id = $1 RETURNING entries",
    };
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "UPDATE",
        db.statement = query
    );

    let mut builder = sqlx::query(query).bind(id);
    if let ScoreChange::Increment(amount) = change {
        builder = builder.bind(amount);
    }

    let row = builder.fetch_optional(pool).instrument(span).await?;

    Ok(row.map(|row| row.get("entries")))
}
