//! Line-item aggregation
//!
//! Pure functions that turn "add this catalog item" / "set quantity" actions into a
//! minimal line-item list. Every function takes the current list by reference and
//! returns a new one; inputs are never mutated.
//!
//! Invariants kept by every function here:
//! - at most one line item per catalog id
//! - every stored quantity is >= 1

use shared::models::CatalogItem;
use shared::order::{LineItem, ValidationError};

use super::money::{self, MAX_QUANTITY};

/// Add one portion of `catalog_item`
///
/// Merges into the existing line item for the same catalog id (quantity + 1, name and
/// price untouched), otherwise appends a new line item with quantity 1 and the
/// catalog's current name and price.
pub fn add_item(current: &[LineItem], catalog_item: &CatalogItem) -> Vec<LineItem> {
    if current.iter().any(|i| i.catalog_id == catalog_item.id) {
        return current
            .iter()
            .map(|i| {
                if i.catalog_id == catalog_item.id {
                    LineItem {
                        quantity: i.quantity.saturating_add(1),
                        ..i.clone()
                    }
                } else {
                    i.clone()
                }
            })
            .collect();
    }

    let mut items = Vec::with_capacity(current.len() + 1);
    items.extend_from_slice(current);
    items.push(LineItem::new(
        &catalog_item.id,
        &catalog_item.name,
        catalog_item.price,
        1,
    ));
    items
}

/// Set the quantity of the line item for `catalog_id`
///
/// `new_quantity <= 0` removes the line item. An absent `catalog_id` is a no-op,
/// quantity controls are only shown for items already in the list.
pub fn set_quantity(current: &[LineItem], catalog_id: &str, new_quantity: i32) -> Vec<LineItem> {
    if new_quantity <= 0 {
        return current
            .iter()
            .filter(|i| i.catalog_id != catalog_id)
            .cloned()
            .collect();
    }

    current
        .iter()
        .map(|i| {
            if i.catalog_id == catalog_id {
                LineItem {
                    quantity: new_quantity,
                    ..i.clone()
                }
            } else {
                i.clone()
            }
        })
        .collect()
}

/// Catalog items that can be picked for an order
///
/// Keeps available items whose name contains `search_term` case-insensitively
/// (plain substring match). An empty term keeps every available item. Catalog order
/// is preserved.
pub fn filter_selectable(catalog: &[CatalogItem], search_term: &str) -> Vec<CatalogItem> {
    let needle = search_term.to_lowercase();
    catalog
        .iter()
        .filter(|item| item.available && item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Check that a line-item list can be submitted as an order
///
/// Emptiness is checked first, then quantity and unit price of each line item.
pub fn validate_draft(items: &[LineItem]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }
    for item in items {
        money::validate_quantity(item.quantity)?;
        money::validate_unit_price(&item.catalog_id, item.unit_price)?;
    }
    Ok(())
}

/// Quantity after pressing "+" on a line item, capped at [`MAX_QUANTITY`]
pub fn incremented(quantity: i32) -> i32 {
    quantity.saturating_add(1).min(MAX_QUANTITY)
}
