//! Money calculation utilities using rust_decimal for precision
//!
//! Prices and totals are `Decimal` end to end, so recomputing a total any number of
//! times yields the same value. Formatting for display is left to the caller.

use rust_decimal::Decimal;
use shared::models::CatalogItem;
use shared::order::{LineItem, ValidationError};

/// Maximum allowed unit price (1,000,000,000 in the store currency)
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Maximum allowed quantity per line item
pub const MAX_QUANTITY: i32 = 9999;

/// Validate a unit price against `[0, MAX_PRICE]`
pub fn validate_unit_price(catalog_id: &str, price: Decimal) -> Result<(), ValidationError> {
    if price < Decimal::ZERO {
        return Err(ValidationError::InvalidPrice(format!(
            "price of {} must be non-negative, got {}",
            catalog_id, price
        )));
    }
    if price > MAX_PRICE {
        return Err(ValidationError::InvalidPrice(format!(
            "price of {} exceeds maximum allowed ({}), got {}",
            catalog_id, MAX_PRICE, price
        )));
    }
    Ok(())
}

/// Validate a catalog entry before it is offered for ordering
pub fn validate_catalog_item(item: &CatalogItem) -> Result<(), ValidationError> {
    validate_unit_price(&item.id, item.price)
}

/// Validate a line item quantity
pub fn validate_quantity(quantity: i32) -> Result<(), ValidationError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(ValidationError::QuantityOutOfRange(quantity));
    }
    Ok(())
}

/// Order total: sum of `unit_price * quantity` over all line items
///
/// Overflow of the decimal range is reported as `InvalidPrice` naming the line
/// item where it happened.
pub fn compute_total(items: &[LineItem]) -> Result<Decimal, ValidationError> {
    items.iter().try_fold(Decimal::ZERO, |acc, item| {
        item.line_total()
            .and_then(|t| acc.checked_add(t))
            .ok_or_else(|| {
                ValidationError::InvalidPrice(format!(
                    "order total overflows at {}",
                    item.catalog_id
                ))
            })
    })
}
