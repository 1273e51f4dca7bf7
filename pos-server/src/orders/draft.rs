//! Draft order - the in-progress, not yet submitted order
//!
//! An immutable value threaded through the aggregator. Every edit returns a new draft,
//! so the presentation layer only keeps a reference to the latest one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::CatalogItem;
use shared::order::{LineItem, OrderSubmission, ValidationError};

use super::{aggregator, money};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftOrder {
    pub table_number: i32,
    pub items: Vec<LineItem>,
}

impl Default for DraftOrder {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DraftOrder {
    pub fn new(table_number: i32) -> Self {
        Self {
            table_number,
            items: Vec::new(),
        }
    }

    pub fn with_table(&self, table_number: i32) -> Self {
        Self {
            table_number,
            items: self.items.clone(),
        }
    }

    /// Add one portion of a catalog item (merging by catalog id)
    pub fn with_item(&self, catalog_item: &CatalogItem) -> Self {
        Self {
            table_number: self.table_number,
            items: aggregator::add_item(&self.items, catalog_item),
        }
    }

    /// Set a line item's quantity; `<= 0` removes it
    pub fn with_quantity(&self, catalog_id: &str, quantity: i32) -> Self {
        Self {
            table_number: self.table_number,
            items: aggregator::set_quantity(&self.items, catalog_id, quantity),
        }
    }

    /// "+" control on a line item
    pub fn increment(&self, catalog_id: &str) -> Self {
        match self.quantity_of(catalog_id) {
            Some(q) => self.with_quantity(catalog_id, aggregator::incremented(q)),
            None => self.clone(),
        }
    }

    /// "-" control on a line item; going below 1 removes it
    pub fn decrement(&self, catalog_id: &str) -> Self {
        match self.quantity_of(catalog_id) {
            Some(q) => self.with_quantity(catalog_id, q - 1),
            None => self.clone(),
        }
    }

    pub fn quantity_of(&self, catalog_id: &str) -> Option<i32> {
        self.items
            .iter()
            .find(|i| i.catalog_id == catalog_id)
            .map(|i| i.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running total of the draft; fails when the sum leaves the decimal range
    pub fn total(&self) -> Result<Decimal, ValidationError> {
        money::compute_total(&self.items)
    }

    /// Completed draft for the order service
    ///
    /// Rejects an empty draft first, then a table number below 1.
    pub fn to_submission(&self) -> Result<OrderSubmission, ValidationError> {
        aggregator::validate_draft(&self.items)?;
        if self.table_number < 1 {
            return Err(ValidationError::InvalidTable(self.table_number));
        }
        Ok(OrderSubmission {
            table_number: self.table_number,
            items: self.items.clone(),
            total: self.total()?,
        })
    }
}
