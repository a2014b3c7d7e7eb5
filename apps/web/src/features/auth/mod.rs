//! Auth feature module covering the sign-up flow. It keeps validation and
//! API handling out of the UI and must stay aligned with the rules the auth
//! service enforces. This module touches a security boundary and must avoid
//! logging passwords.
//!
//! Flow Overview: the form validates input against the shared schema, then
//! submits the registration payload and reads back the created record.

pub(crate) mod client;
pub(crate) mod schema;
pub(crate) mod types;
