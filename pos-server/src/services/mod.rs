//! Service layer - collaborators of the order engine
//!
//! - [`CatalogService`] - menu cache implementing `CatalogSource`
//! - [`OrderNumberIssuer`] - order ids and receipt-style order numbers
//! - [`SimulatedGateway`] - in-process order service implementing `OrderGateway`

pub mod catalog_service;
pub mod gateway;
pub mod order_number;

pub use catalog_service::CatalogService;
pub use gateway::SimulatedGateway;
pub use order_number::OrderNumberIssuer;
