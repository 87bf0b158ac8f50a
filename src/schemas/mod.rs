//! Schemas - input loading and output shapes for entities.
//!
//! An input schema turns an untyped JSON payload into a validated value,
//! reporting every failing field at once rather than stopping at the
//! first problem.

mod payload;
pub mod user;

pub use payload::Payload;
pub use user::{CreateUser, UserResponse};

use serde_json::Value;

use crate::errors::AppResult;

/// Validated input loaded from a JSON payload.
pub trait Schema: Sized + Send + 'static {
    /// Field names accepted on input; anything else is rejected.
    const FIELDS: &'static [&'static str];

    /// Deserialize and validate, failing with `AppError::Validation`.
    fn load(payload: Value) -> AppResult<Self>;
}
