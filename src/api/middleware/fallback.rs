//! Outermost error handling: unknown routes, unsupported methods and
//! panics all answer with the same JSON error shape as handlers do.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// Router fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::http(
        StatusCode::NOT_FOUND,
        "The requested URL was not found on the server.",
    )
}

/// Give axum's bodiless 405 responses a JSON body.
pub async fn method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return AppError::http(
            StatusCode::METHOD_NOT_ALLOWED,
            "The method is not allowed for the requested URL.",
        )
        .into_response();
    }
    response
}

/// Panic handler for `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_method_not_allowed_gets_body() {
        let response = method_not_allowed(StatusCode::METHOD_NOT_ALLOWED.into_response()).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn test_other_responses_untouched() {
        let response = method_not_allowed(StatusCode::OK.into_response()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
