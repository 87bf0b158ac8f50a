//! User Registry - account management over HTTP/JSON.
//!
//! A generic CRUD resource exposes one entity (users) with schema
//! validation, SeaORM persistence and OpenAPI documentation.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, password hashing, field validators
//! - **schemas**: Input loading and output shapes
//! - **services**: Generic CRUD resource and the user resource
//! - **infra**: Database, migrations, entity store, unit of work
//! - **api**: HTTP handlers, middleware, routes and OpenAPI
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod schemas;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
