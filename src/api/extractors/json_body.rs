//! JSON body extractor with uniform error responses.
//!
//! Field-level validation belongs to the resource's schema; this extractor
//! only guarantees the body is JSON. Malformed bodies and wrong content
//! types are passed through as `AppError::Http` with the rejection's status.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;

/// Raw JSON request body.
///
/// # Example
///
/// ```rust,ignore
/// use user_registry::api::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody) {
///     // payload is any JSON value; the schema decides if it is acceptable
/// }
/// ```
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(JsonBody(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::http(rejection.status(), rejection.body_text())
}
