use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{Item, ItemChanges, NewItem};

use super::{ItemStore, StoreError, StoreResult};

/// In-memory store for tests and `--in-memory` runs. Assigns ids and
/// timestamps the way the database defaults would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<Uuid, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let items = self.items.read().expect("lock poisoned");
        let mut all: Vec<Item> = items.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn get(&self, id: Uuid) -> StoreResult<Item> {
        let items = self.items.read().expect("lock poisoned");
        items.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, new: NewItem) -> StoreResult<Item> {
        let now = Utc::now();
        let item = Item {
            id: Uuid::new_v4(),
            name: new.name,
            created_at: now,
            updated_at: now,
        };
        let mut items = self.items.write().expect("lock poisoned");
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn replace(&self, id: Uuid, name: String) -> StoreResult<Item> {
        let mut items = self.items.write().expect("lock poisoned");
        let item = items.get_mut(&id).ok_or(StoreError::NotFound)?;
        item.name = name;
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn patch(&self, id: Uuid, changes: ItemChanges) -> StoreResult<Item> {
        let mut items = self.items.write().expect("lock poisoned");
        let item = items.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(name) = changes.name {
            item.name = name;
            item.updated_at = Utc::now();
        }
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut items = self.items.write().expect("lock poisoned");
        items.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
