use crate::{
    cli::globals::GlobalArgs,
    horizon::{
        handlers::{valid_email, valid_name, valid_password},
        password,
        store::{StoreError, User, UserStore},
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
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserRegister {
    name: String,
    email: String,
    password: String,
}

/// The created record as echoed to the client. The password hash stays in
/// the store.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisteredUser {
    id: Uuid,
    name: String,
    email: String,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[utoipa::path(
    post,
    path= "/api/auth/register",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful", body = [RegisteredUser], content_type = "application/json"),
        (status = 400, description = "Missing or invalid payload"),
        (status = 409, description = "User with the specified email already exists"),
    ),
    tag= "register"
)]
// axum handler for registration
#[instrument(skip_all)]
pub async fn register(
    store: Extension<UserStore>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<UserRegister>>,
) -> Response {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("registration request for {}", user.email);

    // if not valid name, email or password return 400
    if !valid_name(&user.name) {
        return (StatusCode::BAD_REQUEST, "Invalid name".to_string()).into_response();
    }

    if !valid_email(&user.email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    if !valid_password(&user.password) {
        return (StatusCode::BAD_REQUEST, "Invalid password".to_string()).into_response();
    }

    // check if user exists
    match store.email_exists(&user.email).await {
        Ok(true) => {
            error!("User already exists");
            return (StatusCode::CONFLICT, "User already exists".to_string()).into_response();
        }
        Ok(false) => (),
        Err(e) => {
            error!("Error checking if user exists: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error checking if user exists".to_string(),
            )
                .into_response();
        }
    }

    // bcrypt is CPU bound, keep it off the async executor
    let cost = globals.bcrypt_cost;
    let plaintext = user.password;
    let hashed = match task::spawn_blocking(move || password::hash(&plaintext, cost)).await {
        Ok(Ok(hashed)) => hashed,
        Ok(Err(e)) => {
            error!("Error hashing password: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error hashing password".to_string(),
            )
                .into_response();
        }
        Err(e) => {
            error!("Hashing task failed: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error hashing password".to_string(),
            )
                .into_response();
        }
    };

    // insert user, the unique index still guards against a concurrent insert
    match store.create_user(&user.name, &user.email, &hashed).await {
        Ok(created) => {
            debug!("User created");

            (StatusCode::CREATED, Json(RegisteredUser::from(created))).into_response()
        }
        Err(StoreError::DuplicateEmail) => {
            error!("User already exists");

            (StatusCode::CONFLICT, "User already exists".to_string()).into_response()
        }
        Err(StoreError::Database(e)) => {
            error!("Error inserting user: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error inserting user".to_string(),
            )
                .into_response()
        }
    }
}
