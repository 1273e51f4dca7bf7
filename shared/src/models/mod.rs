//! Data models
//!
//! Catalog-side entities shared between the order engine and whatever serves the menu.

pub mod catalog_item;

// Re-exports
pub use catalog_item::*;
