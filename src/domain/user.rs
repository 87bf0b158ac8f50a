//! User domain entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Password;

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2 hash; never serialized.
    pub password: Password,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new, active, unverified user with a fresh id.
    pub fn new(username: String, email: String, password: Password) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password,
            is_active: true,
            is_verified: false,
            last_login: None,
            created_at: now,
            updated_at: now,
            password_reset_token: None,
            password_reset_expires: None,
        }
    }
}
