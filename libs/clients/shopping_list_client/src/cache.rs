//! Local mirror of the server's item list.

use crate::models::Item;

/// Items as last confirmed by the server
///
/// Only successful calls change the items. A failed call marks the cache
/// stale so the owner knows to refresh before trusting it.
#[derive(Debug, Clone, Default)]
pub struct ItemCache {
    items: Vec<Item>,
    stale: bool,
}

impl ItemCache {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Drop trust in the mirror without touching its contents
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Replace everything with a fresh server snapshot
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.stale = false;
    }

    /// What the purchased items cost: the sum of `unit_price * qty`
    pub fn purchased_total(&self) -> f64 {
        self.items
            .iter()
            .filter(|i| i.is_purchased)
            .map(|i| i.unit_price * i.qty)
            .sum()
    }

    pub fn mark_purchased(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.is_purchased = true;
        }
    }

    /// Overwrite the cached copy of an item with the server's version
    pub fn merge(&mut self, updated: Item) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == updated.id) {
            *item = updated;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|i| i.id != id);
    }
}
