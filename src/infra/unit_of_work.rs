//! Unit of Work pattern implementation.
//!
//! Owns the connection pool and scopes transactions: a closure receives a
//! `TransactionContext`, and the transaction is committed when it returns
//! `Ok` and rolled back when it returns `Err`.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, TransactionTrait};

use super::repositories::EntityStore;
use crate::errors::{AppError, AppResult};

/// Boxed future returned by a transaction body.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Transaction context providing store access within a transaction.
///
/// All operations performed through this context are part of the same
/// database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Store for entity `E` bound to this transaction
    pub fn store<E: EntityTrait>(&self) -> EntityStore<'a, E, DatabaseTransaction> {
        EntityStore::new(self.txn)
    }
}

/// Connection pool plus transaction scoping.
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Store for entity `E` outside any transaction (reads)
    pub fn store<E: EntityTrait>(&self) -> EntityStore<'_, E, DatabaseConnection> {
        EntityStore::new(&self.db)
    }

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    /// A failed rollback is logged and the original error is returned.
    pub async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
