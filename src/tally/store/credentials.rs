//! Credential store over the `login` table. Rows are created by
//! registration only; this core never updates or deletes them.

use crate::tally::store::Credential;
use sqlx::{PgPool, Row};
use tracing::{info_span, Instrument};

/// Look up a credential by normalized (lowercase) email.
///
/// # Errors
/// Returns an error if the query fails.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Credential>, sqlx::Error> {
    let query = "SELECT email, hash FROM login WHERE email = $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    sqlx::query_as::<_, Credential>(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await
}

/// Insert a credential row inside an open transaction and return the
/// stored email. The caller normalizes the email; the unique constraint
/// rejects duplicates.
///
/// # Errors
/// Returns an error if the insert fails, including the unique-constraint
/// violation for an already registered email.
pub async fn insert(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    email: &str,
    hash: &str,
) -> Result<String, sqlx::Error> {
    let query = "INSERT INTO login (email, hash) VALUES ($1, $2) RETURNING email";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    let row = sqlx::query(query)
        .bind(email)
        .bind(hash)
        .fetch_one(&mut **tx)
        .instrument(span)
        .await?;

    Ok(row.get("email"))
}
