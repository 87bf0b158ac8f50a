//! Service-level behaviour: health, docs and transport errors.

mod common;

use axum::http::{Method, StatusCode};

use common::{send, test_app};

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/swagger.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Test API");
    assert!(body["paths"]["/users"].is_object());
    assert!(body["paths"]["/users/{id}"]["delete"].is_object());
    assert_eq!(
        body["paths"]["/users"]["post"]["requestBody"]["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/CreateUser"
    );
}

#[tokio::test]
async fn test_unknown_route_uses_error_shape() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/nowhere", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert!(body["description"].is_string());
}

#[tokio::test]
async fn test_unsupported_method_uses_error_shape() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::PUT, "/users", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method Not Allowed");
}
