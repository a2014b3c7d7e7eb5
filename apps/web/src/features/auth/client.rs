//! Client wrappers for the horizon-auth API endpoints. These helpers keep
//! request shapes consistent and prevent password material from leaking into
//! route code.

use crate::{
    app_lib::{post_json_response, AppError},
    features::auth::types::{RegisterRequest, RegisteredUser},
};

/// Creates a new account and returns the created record.
/// The payload carries the plaintext password and must never be logged.
pub async fn register(request: &RegisterRequest) -> Result<RegisteredUser, AppError> {
    post_json_response("/api/auth/register", request).await
}
