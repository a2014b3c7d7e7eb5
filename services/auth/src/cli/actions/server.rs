use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::horizon::new;
use anyhow::{anyhow, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            let parsed = Url::parse(&dsn)?;

            if !matches!(parsed.scheme(), "postgres" | "postgresql") {
                return Err(anyhow!("unsupported DSN scheme: {}", parsed.scheme()));
            }

            new(port, dsn, globals).await?;
        }
    }

    Ok(())
}
