//! Postgres-backed user store. The pool is opened once at server start,
//! handed to handlers as an extension, and closed after graceful shutdown.

use sqlx::{
    error::ErrorKind,
    postgres::{PgPool, PgPoolOptions},
    Connection, FromRow, Row,
};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// A persisted user record. The `password` field holds the bcrypt hash,
/// never the plaintext, and must not be echoed in API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    /// Open the connection pool.
    /// # Errors
    /// Returns an error if the database is unreachable.
    pub async fn connect(dsn: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect(dsn)
            .await?;

        Ok(Self { pool })
    }

    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Close all pooled connections. Idempotent.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Ping the database through a pooled connection.
    /// # Errors
    /// Returns an error if no connection can be acquired or the ping fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    /// Insert a new user and return the created record.
    /// # Errors
    /// Returns [`StoreError::DuplicateEmail`] when the unique index on
    /// `email` rejects the insert.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id, name, email, password",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                StoreError::DuplicateEmail
            } else {
                StoreError::Database(err)
            }
        })
    }

    /// Look up exactly one user by email.
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email, password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// Check whether an email is already registered.
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        match sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) AS exists")
            .bind(email)
            .fetch_one(&self.pool)
            .await
        {
            Ok(row) => Ok(row.get("exists")),
            Err(e) => Err(e),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().map(|db| db.kind()),
        Some(ErrorKind::UniqueViolation)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::DuplicateEmail;
        assert_eq!(err.to_string(), "email already registered");
    }

    #[test]
    fn test_unique_violation_does_not_match_row_not_found() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
