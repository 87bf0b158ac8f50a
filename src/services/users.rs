//! User resource: the `Resource` description of user accounts.

use sea_orm::{sea_query::SimpleExpr, ColumnTrait};

use super::crud::{CrudResource, ModelOf, Resource};
use crate::domain::{Password, User};
use crate::errors::AppResult;
use crate::infra::repositories::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::schemas::{CreateUser, UserResponse};

/// User accounts exposed under `/users`.
pub struct UserResource;

/// CRUD operations over user accounts.
pub type UserCrud = CrudResource<UserResource>;

impl Resource for UserResource {
    type Entity = UserEntity;
    type ActiveModel = ActiveModel;
    type Input = CreateUser;
    type Output = UserResponse;

    const NAME: &'static str = "Users";
    const LABEL: &'static str = "user";

    /// Hash the password and assign id, defaults and timestamps.
    fn build(input: CreateUser) -> AppResult<ActiveModel> {
        let password = Password::new(&input.password)?;
        Ok(User::new(input.username, input.email, password).into())
    }

    fn unique_fields(input: &CreateUser) -> Vec<(&'static str, SimpleExpr)> {
        vec![
            ("username", user::Column::Username.eq(input.username.clone())),
            ("email", user::Column::Email.eq(input.email.clone())),
        ]
    }

    fn dump(model: ModelOf<Self>) -> UserResponse {
        UserResponse::from(User::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn input() -> CreateUser {
        CreateUser {
            username: "alice_01".into(),
            email: "a@example.com".into(),
            password: "Str0ng!Pass".into(),
        }
    }

    #[test]
    fn test_build_hashes_password() {
        let model = UserResource::build(input()).unwrap();

        let hash = match model.password {
            ActiveValue::Set(hash) => hash,
            other => panic!("password not set: {:?}", other),
        };
        assert_ne!(hash, "Str0ng!Pass");
        assert!(Password::from_hash(hash).verify("Str0ng!Pass"));
    }

    #[test]
    fn test_build_sets_defaults() {
        let model = UserResource::build(input()).unwrap();

        assert_eq!(model.is_active, ActiveValue::Set(true));
        assert_eq!(model.is_verified, ActiveValue::Set(false));
        assert_eq!(model.last_login, ActiveValue::Set(None));
    }

    #[test]
    fn test_unique_fields_cover_username_and_email() {
        let fields: Vec<&str> = UserResource::unique_fields(&input())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(fields, vec!["username", "email"]);
    }
}
