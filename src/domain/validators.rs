//! Field-level validators.
//!
//! Pure checks over a single input value. Each returns a
//! `validator::ValidationError` carrying a clause-specific message so the
//! schema layer can report it against the failing field.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

use crate::config::{
    COMMON_PASSWORDS, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS,
    PHONE_PATTERN, SANITIZE_STRIP_CHARS, USERNAME_PATTERN,
};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(USERNAME_PATTERN).expect("username pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Username: 3-20 characters, ASCII letters, digits or underscore.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(invalid(
            "username",
            "Username must be 3-20 characters, alphanumeric or underscore",
        ))
    }
}

/// Syntactic email check. Returns the normalized address: surrounding
/// whitespace trimmed and the domain part lowercased.
///
/// Deliverability is not checked.
pub fn validate_email_format(email: &str) -> Result<String, ValidationError> {
    let trimmed = email.trim().to_owned();
    if !trimmed.validate_email() {
        return Err(invalid("email", "Not a valid email address."));
    }

    match trimmed.rsplit_once('@') {
        Some((local, domain)) => Ok(format!("{}@{}", local, domain.to_lowercase())),
        None => Err(invalid("email", "Not a valid email address.")),
    }
}

/// Adapter for `#[validate(custom(...))]`, which expects a unit result.
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    validate_email_format(email).map(|_| ())
}

/// Password strength. Clauses are checked in a fixed order and the first
/// violated one is reported.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();

    if length > MAX_PASSWORD_LENGTH {
        return Err(invalid("password_length", "Password too long"));
    }

    if length < MIN_PASSWORD_LENGTH {
        return Err(invalid(
            "password_length",
            "Password must be at least 8 characters long",
        ));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(invalid(
            "password_uppercase",
            "Password must contain at least one uppercase letter",
        ));
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(invalid(
            "password_lowercase",
            "Password must contain at least one lowercase letter",
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid(
            "password_digit",
            "Password must contain at least one number",
        ));
    }

    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(invalid(
            "password_symbol",
            "Password must contain at least one special character",
        ));
    }

    if COMMON_PASSWORDS.contains(&password.to_lowercase().as_str()) {
        return Err(invalid("password_common", "Password too common."));
    }

    Ok(())
}

/// International phone number: optional '+', then 10-19 digits.
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone_number) {
        Ok(())
    } else {
        Err(invalid("phone_number", "Invalid phone number format"))
    }
}

/// Strip markup/quote characters, trim, and optionally cap the length
/// (in characters).
pub fn sanitize_input(input: &str, max_length: Option<usize>) -> String {
    let sanitized: String = input
        .chars()
        .filter(|c| !SANITIZE_STRIP_CHARS.contains(c))
        .collect();
    let sanitized = sanitized.trim();

    match max_length {
        Some(max) => sanitized.chars().take(max).collect(),
        None => sanitized.to_string(),
    }
}
