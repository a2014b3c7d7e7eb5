//! Shared frontend utilities for API access, configuration, and errors.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::post_json_response;
pub(crate) use errors::AppError;
