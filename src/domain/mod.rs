//! Domain layer - Core business entities and logic
//!
//! The user entity, its password value object and the field validators.
//! Nothing here touches the database or HTTP.

pub mod password;
pub mod user;
pub mod validators;

pub use password::Password;
pub use user::User;
