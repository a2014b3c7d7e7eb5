use crate::cli::{actions::Action, commands, dispatch::handler, globals::GlobalArgs, telemetry};
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Start the CLI
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity_level = match matches.get_one::<u8>("verbosity").map_or(0, |&v| v) {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    telemetry::init(verbosity_level)?;

    let session_secret = matches
        .get_one::<String>("session-secret")
        .map(|secret| SecretString::from(secret.clone()))
        .context("missing required argument: --session-secret")?;

    let mut globals = GlobalArgs::new(session_secret);

    if let Some(ttl) = matches.get_one::<u64>("session-ttl") {
        globals.set_session_ttl(*ttl);
    }

    if let Some(cost) = matches.get_one::<u32>("bcrypt-cost") {
        globals.set_bcrypt_cost(*cost);
    }

    let action = handler(&matches)?;

    Ok((action, globals))
}
