//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM entities and the generic entity store
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::EntityStore;
pub use unit_of_work::{Persistence, TransactionContext};
