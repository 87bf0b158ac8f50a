//! Generic CRUD resource.
//!
//! `CrudResource<R>` implements list/read/create/delete once; a concrete
//! resource only describes its entity, schemas and how to build a record.
//! Client errors (bad identifier, missing record, invalid payload,
//! duplicates) always surface as their own variants; only persistence
//! failures inside a write become `AppError::Unhandled`.

use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{
    sea_query::SimpleExpr, ActiveModelBehavior, ActiveModelTrait, EntityName, EntityTrait,
    IntoActiveModel, SqlErr,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::infra::repositories::PrimaryKeyOf;
use crate::infra::Persistence;
use crate::schemas::Schema;

/// Model type of a resource's entity.
pub type ModelOf<R> = <<R as Resource>::Entity as EntityTrait>::Model;

/// Describes one entity exposed through `CrudResource`.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;
    /// Validated creation input
    type Input: Schema;
    /// Serialized representation
    type Output: Serialize + Send;

    /// Plural display name, used in error messages ("Users with ID ...").
    const NAME: &'static str;
    /// Singular label, used in confirmations ("Deleted user with ID ...").
    const LABEL: &'static str;
    /// Name of the primary-key field as seen by clients.
    const PRIMARY_KEY: &'static str = "id";

    /// Construct a new record from validated input.
    fn build(input: Self::Input) -> AppResult<Self::ActiveModel>;

    /// Unique fields of the input, each with the filter that finds a
    /// record already holding that value.
    fn unique_fields(_input: &Self::Input) -> Vec<(&'static str, SimpleExpr)> {
        Vec::new()
    }

    /// Serialize a stored record.
    fn dump(model: ModelOf<Self>) -> Self::Output;
}

/// List/read/create/delete over resource `R`.
pub struct CrudResource<R> {
    persistence: Arc<Persistence>,
    _resource: PhantomData<R>,
}

impl<R> Clone for CrudResource<R> {
    fn clone(&self) -> Self {
        Self {
            persistence: self.persistence.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> CrudResource<R>
where
    R: Resource,
    ModelOf<R>: IntoActiveModel<R::ActiveModel> + Send + Sync,
    PrimaryKeyOf<R::Entity>: From<Uuid>,
{
    pub fn new(persistence: Arc<Persistence>) -> Self {
        Self {
            persistence,
            _resource: PhantomData,
        }
    }

    /// Every stored record, in query order.
    pub async fn list(&self) -> AppResult<Vec<R::Output>> {
        let models = self.persistence.store::<R::Entity>().find_all().await?;
        Ok(models.into_iter().map(R::dump).collect())
    }

    /// One record by identifier.
    pub async fn read(&self, identifier: &str) -> AppResult<R::Output> {
        let id = Self::parse_identifier(identifier)?;

        self.persistence
            .store::<R::Entity>()
            .find_by_id(id)
            .await?
            .map(R::dump)
            .ok_or_else(|| Self::not_found(identifier))
    }

    /// Validate `data`, then persist a new record in one transaction.
    pub async fn create(&self, data: Value) -> AppResult<R::Output> {
        let input = <R::Input as Schema>::load(data)?;
        let unique = R::unique_fields(&input);
        let record = R::build(input)?;

        let model = self
            .persistence
            .transaction::<_, ModelOf<R>>(move |ctx| {
                Box::pin(async move {
                    let store = ctx.store::<R::Entity>();

                    for (field, condition) in unique {
                        let existing = store
                            .find_one(condition)
                            .await
                            .map_err(Self::persistence_failure)?;
                        if existing.is_some() {
                            return Err(Self::duplicate(field));
                        }
                    }

                    store.insert(record).await.map_err(Self::persistence_failure)
                })
            })
            .await?;

        tracing::info!(resource = R::NAME, "Record created");
        Ok(R::dump(model))
    }

    /// Permanently remove a record, returning a confirmation message.
    pub async fn delete(&self, identifier: &str) -> AppResult<String> {
        let id = Self::parse_identifier(identifier)?;
        let missing = Self::not_found(identifier);

        self.persistence
            .transaction::<_, ()>(move |ctx| {
                Box::pin(async move {
                    let store = ctx.store::<R::Entity>();

                    let existing = store
                        .find_by_id(id)
                        .await
                        .map_err(Self::persistence_failure)?;
                    if existing.is_none() {
                        return Err(missing);
                    }

                    store
                        .delete_by_id(id)
                        .await
                        .map_err(Self::persistence_failure)?;
                    Ok::<_, AppError>(())
                })
            })
            .await?;

        tracing::info!(resource = R::NAME, id = %id, "Record deleted");
        Ok(format!("Deleted {} with ID {}", R::LABEL, identifier))
    }

    fn parse_identifier(identifier: &str) -> AppResult<Uuid> {
        Uuid::parse_str(identifier).map_err(|_| AppError::InvalidIdentifier {
            field: R::PRIMARY_KEY,
            value: identifier.to_string(),
        })
    }

    fn not_found(identifier: &str) -> AppError {
        AppError::NotFound {
            entity: R::NAME,
            id: identifier.to_string(),
        }
    }

    /// Map a database error raised inside a write. Unique-constraint
    /// violations stay client errors; anything else becomes `Unhandled`.
    fn persistence_failure(err: AppError) -> AppError {
        match err {
            AppError::Database(db_err) => match db_err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(message)) => {
                    match Self::violated_field(&message) {
                        Some(field) => Self::duplicate(&field),
                        None => AppError::conflict(format!(
                            "{} with these values already exist",
                            R::NAME
                        )),
                    }
                }
                _ => AppError::unhandled(db_err.to_string()),
            },
            other => other,
        }
    }

    fn duplicate(field: &str) -> AppError {
        AppError::conflict(format!("{} with this {} already exists", R::NAME, field))
    }

    /// Column named by a unique-violation message, for SQLite
    /// (`UNIQUE constraint failed: users.email`) and Postgres
    /// (`... unique constraint "users_email_key"`).
    fn violated_field(message: &str) -> Option<String> {
        if let Some((_, columns)) = message.split_once("UNIQUE constraint failed: ") {
            let column = columns.split(',').next()?.trim();
            return column.rsplit('.').next().map(str::to_string);
        }

        let table = R::Entity::default().table_name().to_string();
        let constraint = message.split('"').nth(1)?;
        constraint
            .strip_prefix(&format!("{}_", table))?
            .strip_suffix("_key")
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::config::Config;
    use crate::domain::{Password, User};
    use crate::errors::AppError;
    use crate::infra::repositories::entities::user::{ActiveModel, Entity as UserEntity};
    use crate::infra::{Database, Persistence};
    use crate::services::UserCrud;

    fn record(username: &str, email: &str) -> ActiveModel {
        User::new(
            username.to_string(),
            email.to_string(),
            Password::from_hash("stored-hash".to_string()),
        )
        .into()
    }

    async fn persistence() -> Persistence {
        let db = Database::connect(&Config::with_database("sqlite::memory:"))
            .await
            .unwrap();
        Persistence::new(db.get_connection())
    }

    #[tokio::test]
    async fn test_unique_index_violation_maps_to_conflict() {
        let persistence = persistence().await;
        let store = persistence.store::<UserEntity>();

        store.insert(record("alice_01", "a@example.com")).await.unwrap();
        let err = store
            .insert(record("alice_01", "other@example.com"))
            .await
            .unwrap_err();

        match UserCrud::persistence_failure(err) {
            AppError::Conflict(message) => {
                assert_eq!(message, "Users with this username already exists")
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_other_database_errors_become_unhandled() {
        let err = AppError::Database(DbErr::Custom("disk full".into()));

        match UserCrud::persistence_failure(err) {
            AppError::Unhandled(detail) => assert!(detail.contains("disk full")),
            other => panic!("expected unhandled, got {:?}", other),
        }
    }

    #[test]
    fn test_client_errors_pass_through() {
        let err = UserCrud::persistence_failure(AppError::conflict("taken"));
        assert!(matches!(err, AppError::Conflict(m) if m == "taken"));
    }

    #[test]
    fn test_violated_field_from_backend_messages() {
        assert_eq!(
            UserCrud::violated_field("UNIQUE constraint failed: users.email").as_deref(),
            Some("email")
        );
        assert_eq!(
            UserCrud::violated_field(
                "duplicate key value violates unique constraint \"users_username_key\""
            )
            .as_deref(),
            Some("username")
        );
        assert_eq!(UserCrud::violated_field("something else"), None);
    }
}
