//! User schemas: creation input and serialized output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{Payload, Schema};
use crate::domain::validators::{
    check_email, validate_email_format, validate_password_strength, validate_username,
};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// User creation payload
#[derive(Debug, Clone, Validate, ToSchema)]
pub struct CreateUser {
    /// 3-20 characters: letters, digits or underscore
    #[validate(custom(function = "validate_username"))]
    #[schema(example = "alice_01", min_length = 3, max_length = 20)]
    pub username: String,
    /// Email address, stored normalized
    #[validate(custom(function = "check_email"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// 8-64 characters with upper, lower, digit and symbol (write-only)
    #[validate(custom(function = "validate_password_strength"))]
    #[schema(example = "Str0ng!Pass", min_length = 8, max_length = 64, write_only)]
    pub password: String,
}

impl Schema for CreateUser {
    const FIELDS: &'static [&'static str] = &["username", "email", "password"];

    fn load(payload: Value) -> AppResult<Self> {
        let mut reader = Payload::new(payload, Self::FIELDS);

        let mut input = CreateUser {
            username: reader.required_string("username").unwrap_or_default(),
            email: reader.required_string("email").unwrap_or_default(),
            password: reader.required_string("password").unwrap_or_default(),
        };

        if let Err(errors) = input.validate() {
            reader.merge(&errors);
        }
        if reader.has_errors() {
            return Err(AppError::Validation(reader.into_errors()));
        }

        input.email = validate_email_format(&input.email).map_err(|e| {
            AppError::field("email", e.message.unwrap_or_default().to_string())
        })?;

        Ok(input)
    }
}

/// User as returned by the API. The password hash is never part of it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "alice_01")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub is_active: bool,
    pub is_verified: bool,
    /// Last successful login, if any
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_active: user.is_active,
            is_verified: user.is_verified,
            last_login: user.last_login,
        }
    }
}
