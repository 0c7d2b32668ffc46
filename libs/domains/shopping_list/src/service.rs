//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult, PURCHASED_FLAG_REQUIRED};
use crate::models::{CreateItem, Item, NewItem, SetPurchased, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing the shopping list operations
///
/// The service owns validation and the order in which failures are reported;
/// the repository only stores.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every item in insertion order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Add an item and return the full updated list
    #[instrument(skip(self, input), fields(item_name = ?input.item_name))]
    pub async fn add_item(&self, input: CreateItem) -> ItemResult<Vec<Item>> {
        input.validate().map_err(|e| {
            tracing::debug!(errors = %e, "Rejected item");
            ItemError::missing_fields()
        })?;

        let new_item = NewItem::try_from(input)?;
        self.repository.create(new_item).await
    }

    /// Overwrite the purchased flag of an item
    ///
    /// An unknown id is reported before a missing flag.
    #[instrument(skip(self, input))]
    pub async fn set_purchased(&self, id: u64, input: SetPurchased) -> ItemResult<Item> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ItemError::NotFound(id));
        }

        let is_purchased = input
            .is_purchased
            .ok_or_else(|| ItemError::Validation(PURCHASED_FLAG_REQUIRED.to_string()))?;

        self.repository.set_purchased(id, is_purchased).await
    }

    /// Update name, price and quantity with whichever non-empty values are given
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        self.repository.update(id, input).await
    }

    /// Remove an item
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: u64) -> ItemResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    /// Restore the seed list
    #[instrument(skip(self))]
    pub async fn reset(&self) -> ItemResult<()> {
        self.repository.reset().await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
