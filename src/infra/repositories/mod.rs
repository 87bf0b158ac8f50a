//! Repository layer - Data access abstraction
//!
//! A single generic store covers every entity; entity-specific
//! behaviour lives with the resource that uses it.

mod base;
pub mod entities;

pub use base::{EntityStore, PrimaryKeyOf};
