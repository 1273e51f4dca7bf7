//! POS Server - restaurant order aggregation and lifecycle engine
//!
//! # Overview
//!
//! - **Orders** (`orders`): line-item aggregation, order creation, status lifecycle and
//!   the OrdersManager that persists through an external order service
//! - **Services** (`services`): menu cache, order number issuing, in-process order service
//! - **Core** (`core`): configuration and environment setup
//! - **Utils** (`utils`): logging and the unified error types
//!
//! # Module layout
//!
//! ```text
//! pos-server/src/
//! ├── core/          # Config, environment setup
//! ├── orders/        # Aggregator, lifecycle, manager
//! ├── services/      # Catalog, order numbers, gateway
//! └── utils/         # Logger, error re-exports
//! ```

pub mod core;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, setup_environment};
pub use orders::{
    CatalogSource, DraftOrder, GatewayError, ManagerError, ManagerResult, OrderGateway,
    OrdersManager,
};
pub use services::{CatalogService, OrderNumberIssuer, SimulatedGateway};

// Re-export unified error types from shared
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/
   order engine
    "#
    );
}
