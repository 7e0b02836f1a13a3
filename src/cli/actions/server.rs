use crate::cli::actions::Action;
use crate::tally::new;
use anyhow::{Context, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            // Fail early on a malformed connection string
            let dsn = Url::parse(&dsn).context("Invalid database connection string")?;

            new(port, dsn.to_string()).await?;
        }
    }

    Ok(())
}
