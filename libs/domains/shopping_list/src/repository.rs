use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, NewItem, UpdateItem, seed_items};

/// Repository trait for Item storage
///
/// Every method is a single atomic step: implementations must not let another
/// caller observe a half-applied mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Append a new item and return the collection as it stands afterwards
    async fn create(&self, input: NewItem) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>>;

    /// Overwrite the purchased flag of an item
    async fn set_purchased(&self, id: u64, is_purchased: bool) -> ItemResult<Item>;

    /// Apply an update to an existing item
    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Item>;

    /// Delete an item by ID, returning whether anything was removed
    async fn delete(&self, id: u64) -> ItemResult<bool>;

    /// Restore the seed list and restart id assignment after it
    async fn reset(&self) -> ItemResult<()>;
}

#[derive(Debug)]
struct ItemTable {
    items: Vec<Item>,
    /// Next id to hand out; only ever grows, so deleted ids are never reused
    next_id: u64,
}

impl ItemTable {
    fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    fn find_mut(&mut self, id: u64) -> ItemResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(ItemError::NotFound(id))
    }
}

/// In-memory implementation of ItemRepository
///
/// Clones share the same underlying list.
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    table: Arc<RwLock<ItemTable>>,
}

impl InMemoryItemRepository {
    /// An empty repository; the first item gets id 1
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// A repository holding the four seed items
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            table: Arc::new(RwLock::new(ItemTable::with_items(items))),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let table = self.table.read().await;
        Ok(table.items.clone())
    }

    async fn create(&self, input: NewItem) -> ItemResult<Vec<Item>> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;
        table.items.push(Item::new(id, input));

        tracing::info!(item_id = id, "Created item");
        Ok(table.items.clone())
    }

    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>> {
        let table = self.table.read().await;
        Ok(table.items.iter().find(|i| i.id == id).cloned())
    }

    async fn set_purchased(&self, id: u64, is_purchased: bool) -> ItemResult<Item> {
        let mut table = self.table.write().await;
        let item = table.find_mut(id)?;
        item.is_purchased = is_purchased;

        tracing::info!(item_id = id, is_purchased, "Updated purchase status");
        Ok(item.clone())
    }

    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        let mut table = self.table.write().await;
        let item = table.find_mut(id)?;
        item.apply_update(input);

        tracing::info!(item_id = id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: u64) -> ItemResult<bool> {
        let mut table = self.table.write().await;

        let before = table.items.len();
        table.items.retain(|i| i.id != id);

        if table.items.len() < before {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn reset(&self) -> ItemResult<()> {
        let mut table = self.table.write().await;
        *table = ItemTable::with_items(seed_items());

        tracing::info!("Reset items to seed list");
        Ok(())
    }
}
