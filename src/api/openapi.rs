//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/swagger.json` and browsable through Swagger UI at
//! `/docs`.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::schemas::{CreateUser, UserResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the user registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry API",
        version = "1.0.0",
        description = "User account management: create, list, read and delete",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::delete_user,
    ),
    components(schemas(CreateUser, UserResponse, MessageResponse)),
    tags(
        (name = "Users", description = "User operations")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with the configured title.
pub fn api_doc(title: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = title.to_string();
    doc
}
