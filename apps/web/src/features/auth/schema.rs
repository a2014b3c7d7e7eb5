//! Shared sign-up form schema. Mirrors the rules the auth service enforces
//! so invalid input is rejected before any request is issued.

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Borrowed view of the sign-up form fields.
pub struct SignUpData<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Validates the form fields, returning the first user-facing problem.
pub fn validate(data: &SignUpData<'_>) -> Result<(), String> {
    if data.name.trim().is_empty() {
        return Err("Name is required.".to_string());
    }

    if !valid_email(data.email) {
        return Err("Email address looks invalid.".to_string());
    }

    if data.password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters."
        ));
    }

    if !data.password.chars().any(|c| c.is_ascii_alphabetic())
        || !data.password.chars().any(|c| c.is_ascii_digit())
    {
        return Err("Password must contain a letter and a digit.".to_string());
    }

    Ok(())
}

/// Lowercases and trims an email address before validation or submission.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
