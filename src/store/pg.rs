use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::{Item, ItemChanges, NewItem};
use crate::schema::items::dsl;

use super::{ItemStore, StoreError, StoreResult};

/// Postgres-backed store. Diesel is synchronous, so every query runs on
/// tokio's blocking thread pool with its own pooled connection.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run<T, F>(&self, query: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> QueryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| StoreError::Fault(e.into()))?;
            query(&mut conn).map_err(from_diesel)
        })
        .await
        .map_err(|e| StoreError::Fault(e.into()))?
    }
}

fn from_diesel(err: diesel::result::Error) -> StoreError {
    match err {
        diesel::result::Error::NotFound => StoreError::NotFound,
        other => StoreError::Fault(other.into()),
    }
}

#[async_trait]
impl ItemStore for PgStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        self.run(|conn| {
            dsl::items
                .select(Item::as_select())
                .order(dsl::created_at.asc())
                .load(conn)
        })
        .await
    }

    async fn get(&self, id: Uuid) -> StoreResult<Item> {
        self.run(move |conn| dsl::items.find(id).select(Item::as_select()).first(conn))
            .await
    }

    async fn create(&self, new: NewItem) -> StoreResult<Item> {
        self.run(move |conn| {
            diesel::insert_into(dsl::items)
                .values(&new)
                .returning(Item::as_returning())
                .get_result(conn)
        })
        .await
    }

    async fn replace(&self, id: Uuid, name: String) -> StoreResult<Item> {
        self.run(move |conn| {
            diesel::update(dsl::items.find(id))
                .set((dsl::name.eq(name), dsl::updated_at.eq(diesel::dsl::now)))
                .returning(Item::as_returning())
                .get_result(conn)
        })
        .await
    }

    async fn patch(&self, id: Uuid, changes: ItemChanges) -> StoreResult<Item> {
        // An all-None changeset is not a valid UPDATE; serve the current row.
        if changes.is_empty() {
            return self.get(id).await;
        }
        self.run(move |conn| {
            diesel::update(dsl::items.find(id))
                .set((&changes, dsl::updated_at.eq(diesel::dsl::now)))
                .returning(Item::as_returning())
                .get_result(conn)
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let deleted = self
            .run(move |conn| diesel::delete(dsl::items.find(id)).execute(conn))
            .await?;
        if deleted == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
