//! Application route configuration.

use axum::{middleware, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health_routes, user_routes};
use super::middleware::{handle_panic, method_not_allowed, not_found};
use super::openapi::api_doc;
use super::AppState;
use crate::config::{OPENAPI_URL, SWAGGER_UI_URL};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        // Swagger UI plus the raw OpenAPI document
        .merge(SwaggerUi::new(SWAGGER_UI_URL).url(OPENAPI_URL, api_doc(&state.api_title)))
        .fallback(not_found)
        // Global middleware
        .layer(middleware::map_response(method_not_allowed))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
