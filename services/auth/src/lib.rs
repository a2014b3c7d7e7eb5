//! # Horizon Auth
//!
//! `horizon-auth` is the authentication service for the Horizon online
//! banking app. It owns the user store and exposes the registration and
//! credentials-login endpoints consumed by the web client.
//!
//! ## Registration
//!
//! `POST /api/auth/register` validates the payload, hashes the password with
//! bcrypt at a fixed work factor, and inserts the user. Email uniqueness is
//! enforced by the store; a duplicate registration returns `409 Conflict`.
//! The created record is returned without the password hash.
//!
//! ## Sessions
//!
//! Successful logins are answered with a signed JWT carrying the user id.
//! There is no server-side session storage; the token payload is the sole
//! mechanism carrying identity across requests.
//!
//! ## Failure semantics
//!
//! Unknown email and wrong password produce byte-identical `401` responses
//! so callers cannot probe for account existence.

pub mod cli;
pub mod horizon;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
