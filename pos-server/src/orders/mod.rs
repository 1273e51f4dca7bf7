//! Order engine
//!
//! - **aggregator**: pure line-item aggregation and catalog filtering
//! - **money**: decimal totals and price / quantity bounds
//! - **draft**: the immutable in-progress order
//! - **lifecycle**: order creation and status transitions
//! - **manager**: OrdersManager, the caller that persists through the order service
//! - **traits**: the catalog and order service seams
//!
//! # Architecture
//!
//! ```text
//! CatalogSource → filter_selectable → DraftOrder (add_item / set_quantity)
//!                                          ↓
//!                              OrdersManager::submit_draft
//!                                          ↓
//!                      OrderGateway::submit_order → create_order
//!                                          ↓
//!              update_status → transition → OrderGateway::persist_status
//!                                          ↓
//!                                  Broadcast OrderEvent
//! ```

pub mod aggregator;
pub mod draft;
pub mod lifecycle;
pub mod manager;
pub mod money;
pub mod traits;

// Re-exports
pub use draft::DraftOrder;
pub use manager::{ManagerError, ManagerResult, OrdersManager};
pub use traits::{CatalogSource, GatewayError, OrderGateway};
