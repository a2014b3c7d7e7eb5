//! Request and response types for auth API calls. The register payload
//! carries a plaintext password, so it must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The created record as returned by the service. The password hash never
/// crosses this boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
}
