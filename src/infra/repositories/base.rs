//! Generic entity store.
//!
//! Works over any SeaORM entity and any connection, so the same code runs
//! against the pool or inside a transaction.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::SimpleExpr, ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter,
};

use crate::errors::AppResult;

/// Primary key value type of an entity.
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Basic persistence operations for entity `E` over connection `C`.
pub struct EntityStore<'c, E, C> {
    conn: &'c C,
    _entity: PhantomData<E>,
}

impl<'c, E, C> EntityStore<'c, E, C> {
    pub fn new(conn: &'c C) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }
}

impl<'c, E, C> EntityStore<'c, E, C>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    /// Find all entities, in query order
    pub async fn find_all(&self) -> AppResult<Vec<E::Model>> {
        E::find().all(self.conn).await.map_err(Into::into)
    }

    /// Find entity by primary key
    pub async fn find_by_id<K>(&self, id: K) -> AppResult<Option<E::Model>>
    where
        K: Into<PrimaryKeyOf<E>> + Send,
    {
        E::find_by_id(id).one(self.conn).await.map_err(Into::into)
    }

    /// Find the first entity matching `condition`
    pub async fn find_one(&self, condition: SimpleExpr) -> AppResult<Option<E::Model>> {
        E::find()
            .filter(condition)
            .one(self.conn)
            .await
            .map_err(Into::into)
    }

    /// Insert new entity
    pub async fn insert<A>(&self, model: A) -> AppResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.conn).await.map_err(Into::into)
    }

    /// Delete entity by primary key, returning the number of rows removed
    pub async fn delete_by_id<K>(&self, id: K) -> AppResult<u64>
    where
        K: Into<PrimaryKeyOf<E>> + Send,
    {
        let result = E::delete_by_id(id).exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
