//! Generic CRUD resource exercised directly, without HTTP.

mod common;

use std::sync::Arc;

use serde_json::json;

use user_registry::errors::AppError;
use user_registry::infra::Persistence;
use user_registry::services::UserCrud;

use common::{test_database, user_payload};

async fn users() -> UserCrud {
    let db = test_database().await;
    UserCrud::new(Arc::new(Persistence::new(db.get_connection())))
}

#[tokio::test]
async fn test_create_returns_serialized_record() {
    let users = users().await;

    let created = users
        .create(user_payload("alice_01", "a@example.com"))
        .await
        .unwrap();

    assert_eq!(created.username, "alice_01");
    assert!(created.is_active);
    assert!(!created.is_verified);
    assert!(created.last_login.is_none());
}

#[tokio::test]
async fn test_invalid_payload_fails_before_persistence() {
    let users = users().await;

    let err = users.create(json!("not an object")).await.unwrap_err();

    match err {
        AppError::Validation(details) => assert!(details.contains_key("_schema")),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_conflict_rolls_back_and_keeps_original() {
    let users = users().await;
    let original = users
        .create(user_payload("bob", "bob@example.com"))
        .await
        .unwrap();

    let err = users
        .create(user_payload("bob", "bob2@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let all = users.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, original.id);
}

#[tokio::test]
async fn test_read_and_delete_share_identifier_errors() {
    let users = users().await;

    assert!(matches!(
        users.read("xyz").await.unwrap_err(),
        AppError::InvalidIdentifier { field: "id", .. }
    ));
    assert!(matches!(
        users.delete("xyz").await.unwrap_err(),
        AppError::InvalidIdentifier { field: "id", .. }
    ));

    let missing = uuid::Uuid::new_v4().to_string();
    assert!(matches!(
        users.read(&missing).await.unwrap_err(),
        AppError::NotFound { entity: "Users", .. }
    ));
    assert!(matches!(
        users.delete(&missing).await.unwrap_err(),
        AppError::NotFound { entity: "Users", .. }
    ));
}

#[tokio::test]
async fn test_delete_is_permanent() {
    let users = users().await;
    let created = users
        .create(user_payload("carol", "c@example.com"))
        .await
        .unwrap();
    let id = created.id.to_string();

    let message = users.delete(&id).await.unwrap();
    assert_eq!(message, format!("Deleted user with ID {id}"));

    assert!(matches!(
        users.read(&id).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
    assert!(matches!(
        users.delete(&id).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
}
