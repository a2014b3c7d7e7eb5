//! One-way password hashing. bcrypt salts each hash and embeds the work
//! factor, so verification only needs the stored hash. Comparison happens
//! inside the crate in constant time.
//!
//! Hashing and verification are CPU bound; call sites run them through
//! `spawn_blocking`.

use bcrypt::BcryptError;

/// Hash a plaintext password at the given work factor.
/// # Errors
/// Returns an error if the cost is outside the range bcrypt accepts.
pub fn hash(plain: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(plain, cost)
}

/// Verify a plaintext password against a stored hash.
/// # Errors
/// Returns an error if the stored hash is malformed.
pub fn verify(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plain, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // the minimum cost bcrypt accepts, keeps the tests fast
    const COST: u32 = 4;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hashed = hash("secret123", COST).unwrap();
        assert_ne!(hashed, "secret123");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash("secret123", COST).unwrap();
        let second = hash("secret123", COST).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_round_trip() {
        let hashed = hash("secret123", COST).unwrap();
        assert!(verify("secret123", &hashed).unwrap());
        assert!(!verify("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify("secret123", "not-a-bcrypt-hash").is_err());
    }
}
