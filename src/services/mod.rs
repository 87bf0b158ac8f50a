//! Application services layer - Use cases and business logic.
//!
//! The generic CRUD resource and its concrete instantiations. Writes run
//! through the Unit of Work so each one is a single transaction.

pub mod crud;
mod users;

pub use crud::{CrudResource, ModelOf, Resource};
pub use users::{UserCrud, UserResource};
