pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

// common validation for the handlers, mirrored by the web form schema
use regex::Regex;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

// at least MIN_PASSWORD_LENGTH characters with a letter and a digit
pub fn valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@x.com"));
        assert!(valid_email("jane@example.com"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("spaces in@example.com"));
        assert!(!valid_email("missing@tld"));
        assert!(!valid_email(""));
    }

    #[test]
    fn test_valid_password() {
        assert!(valid_password("secret123"));
        assert!(valid_password("Passw0rd!"));
        assert!(!valid_password("short1"));
        assert!(!valid_password("lettersonly"));
        assert!(!valid_password("12345678"));
        assert!(!valid_password(""));
    }

    #[test]
    fn test_valid_name() {
        assert!(valid_name("Jane"));
        assert!(!valid_name(""));
        assert!(!valid_name("   "));
    }
}
