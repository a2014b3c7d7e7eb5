use crate::{
    cli::globals::GlobalArgs,
    horizon::{
        handlers::valid_email,
        password,
        session::{self, Session},
        store::UserStore,
    },
};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserLogin {
    email: String,
    password: String,
}

#[utoipa::path(
    post,
    path= "/api/auth/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = [Session], content_type = "application/json"),
        (status = 401, description = "Unauthorized"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    store: Extension<UserStore>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<UserLogin>>,
) -> Response {
    let credentials: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("login attempt for {}", credentials.email);

    if !valid_email(&credentials.email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    let user = match store.find_by_email(&credentials.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            // same status and body as a failed comparison, account
            // existence must not leak
            debug!("User not found");

            return (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()).into_response();
        }
        Err(e) => {
            error!("Error looking up user: {:?}", e);

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error looking up user".to_string(),
            )
                .into_response();
        }
    };

    // compare the plaintext with the stored hash off the async executor
    let plaintext = credentials.password;
    let stored = user.password.clone();
    let verified = match task::spawn_blocking(move || password::verify(&plaintext, &stored)).await {
        Ok(Ok(verified)) => verified,
        Ok(Err(e)) => {
            error!("Error verifying password: {:?}", e);

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error verifying password".to_string(),
            )
                .into_response();
        }
        Err(e) => {
            error!("Verification task failed: {:?}", e);

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error verifying password".to_string(),
            )
                .into_response();
        }
    };

    if !verified {
        debug!("Unauthorized");

        return (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()).into_response();
    }

    match session::issue(&globals.session_secret, globals.session_ttl, &user) {
        Ok(session) => {
            debug!("Login successful");

            (StatusCode::OK, Json(session)).into_response()
        }
        Err(e) => {
            error!("Error issuing session token: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error issuing session".to_string(),
            )
                .into_response()
        }
    }
}
