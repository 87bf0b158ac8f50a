//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Password, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string
    pub password: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password: Password::from_hash(model.password),
            is_active: model.is_active,
            is_verified: model.is_verified,
            last_login: model.last_login,
            created_at: model.created_at,
            updated_at: model.updated_at,
            password_reset_token: model.password_reset_token,
            password_reset_expires: model.password_reset_expires,
        }
    }
}

/// Every column set, ready for insert
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            password: Set(user.password.into()),
            is_active: Set(user.is_active),
            is_verified: Set(user.is_verified),
            last_login: Set(user.last_login),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
            password_reset_token: Set(user.password_reset_token),
            password_reset_expires: Set(user.password_reset_expires),
        }
    }
}
