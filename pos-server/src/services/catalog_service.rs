//! Catalog Service - in-memory menu cache
//!
//! Read-mostly: the menu is loaded once and only availability flips during service.
//! Every entry is validated before it becomes selectable.

use crate::orders::money;
use crate::orders::traits::CatalogSource;
use parking_lot::RwLock;
use shared::models::CatalogItem;
use shared::order::ValidationError;
use std::sync::Arc;

/// Menu cache, cheap to clone and share
#[derive(Clone, Default)]
pub struct CatalogService {
    /// Items in menu order
    items: Arc<RwLock<Vec<CatalogItem>>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("items_count", &self.items.read().len())
            .finish()
    }
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole menu
    ///
    /// All items are validated first; on error the current menu is kept.
    pub fn load(&self, items: Vec<CatalogItem>) -> Result<usize, ValidationError> {
        for item in &items {
            money::validate_catalog_item(item)?;
        }
        let count = items.len();
        *self.items.write() = items;
        tracing::info!(count, "Catalog loaded");
        Ok(count)
    }

    /// Insert a new item at the end of the menu, or replace the item with the same id
    pub fn upsert(&self, item: CatalogItem) -> Result<(), ValidationError> {
        money::validate_catalog_item(&item)?;
        let mut items = self.items.write();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<CatalogItem> {
        self.items.read().iter().find(|i| i.id == id).cloned()
    }

    pub fn list(&self) -> Vec<CatalogItem> {
        self.items.read().clone()
    }

    /// Mark an item as (un)available; returns false when the id is unknown
    pub fn set_available(&self, id: &str, available: bool) -> bool {
        let mut items = self.items.write();
        let Some(item) = items.iter_mut().find(|i| i.id == id) else {
            tracing::warn!(catalog_id = %id, "Availability change for unknown catalog item");
            return false;
        };
        item.available = available;
        tracing::debug!(catalog_id = %id, available, "Catalog availability changed");
        true
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl CatalogSource for CatalogService {
    fn catalog(&self) -> Vec<CatalogItem> {
        self.list()
    }
}
