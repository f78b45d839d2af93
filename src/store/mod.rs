mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Item, ItemChanges, NewItem};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("item not found")]
    NotFound,
    #[error(transparent)]
    Fault(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The storage handle the service owns. Implementations assign ids and
/// timestamps; handlers never construct those fields themselves.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, oldest first.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    async fn get(&self, id: Uuid) -> StoreResult<Item>;

    async fn create(&self, new: NewItem) -> StoreResult<Item>;

    /// Full replacement of mutable fields; refreshes `updated_at`.
    async fn replace(&self, id: Uuid, name: String) -> StoreResult<Item>;

    /// Applies only the fields present in `changes`. An empty changeset
    /// returns the current record untouched.
    async fn patch(&self, id: Uuid, changes: ItemChanges) -> StoreResult<Item>;

    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
