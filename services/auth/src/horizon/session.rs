//! Signed session tokens. There is no server-side session table; the JWT
//! payload is the sole mechanism carrying identity across requests, and the
//! token expires per its `exp` claim rather than by revocation.

use crate::horizon::store::User;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Claims embedded in a session token.
#[derive(Serialize, Deserialize, Debug)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// The authenticated principal as exposed to the rest of the application.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct SessionUser {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
}

/// The session object returned to a freshly logged-in client.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct Session {
    pub token: String,
    pub expires_at: i64,
    pub user: SessionUser,
}

pub(crate) fn now_unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Issue a signed session for an authenticated user.
/// # Errors
/// Returns an error if the claims cannot be encoded.
pub fn issue(
    secret: &SecretString,
    ttl_seconds: u64,
    user: &User,
) -> Result<Session, jsonwebtoken::errors::Error> {
    let iat = now_unix_seconds();
    let exp = iat.saturating_add(i64::try_from(ttl_seconds).unwrap_or(i64::MAX));

    let claims = SessionClaims {
        sub: user.id,
        email: user.email.clone(),
        iat,
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )?;

    let session = Session {
        token,
        expires_at: exp,
        user: SessionUser {
            id: None,
            name: user.name.clone(),
            email: user.email.clone(),
        },
    };

    Ok(augment_session(session, user))
}

/// Attach the authenticated user's id to a session object.
#[must_use]
pub fn augment_session(mut session: Session, user: &User) -> Session {
    session.user.id = Some(user.id);
    session
}

/// Decode and validate a session token, returning its claims.
/// # Errors
/// Returns an error if the signature is invalid or the token is expired.
pub fn verify(
    secret: &SecretString,
    token: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("not-a-real-secret".to_string())
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "$2b$12$placeholderplaceholderplaceholder".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user = sample_user();
        let session = issue(&secret(), 3600, &user).unwrap();

        let claims = verify(&secret(), &session.token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert!(claims.exp > claims.iat);
        assert_eq!(session.expires_at, claims.exp);
    }

    #[test]
    fn test_session_carries_user_id() {
        let user = sample_user();
        let session = issue(&secret(), 3600, &user).unwrap();

        assert_eq!(session.user.id, Some(user.id));
        assert_eq!(session.user.name, "Jane");
        assert_eq!(session.user.email, "jane@example.com");
    }

    #[test]
    fn test_session_never_contains_password_hash() {
        let user = sample_user();
        let session = issue(&secret(), 3600, &user).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains(&user.password));
    }

    #[test]
    fn test_augment_session_sets_id_only() {
        let user = sample_user();
        let session = Session {
            token: "token".to_string(),
            expires_at: 0,
            user: SessionUser {
                id: None,
                name: user.name.clone(),
                email: user.email.clone(),
            },
        };

        let augmented = augment_session(session, &user);
        assert_eq!(augmented.user.id, Some(user.id));
        assert_eq!(augmented.token, "token");
        assert_eq!(augmented.user.name, user.name);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let user = sample_user();
        let session = issue(&secret(), 3600, &user).unwrap();

        let other = SecretString::from("another-secret".to_string());
        assert!(verify(&other, &session.token).is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let user = sample_user();
        let session = issue(&secret(), 3600, &user).unwrap();

        let mut tampered = session.token.clone();
        tampered.push('x');
        assert!(verify(&secret(), &tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let user = sample_user();
        let iat = now_unix_seconds() - 7200;
        let claims = SessionClaims {
            sub: user.id,
            email: user.email,
            iat,
            // past the default validation leeway
            exp: iat + 60,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(verify(&secret(), &token).is_err());
    }
}
