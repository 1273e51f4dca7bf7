//! Order id and order number issuing
//!
//! Ids are UUID v4. Order numbers follow the receipt scheme `ORD{YYYYMMDD}{10000+n}`
//! where `n` counts orders issued by this process.

use chrono::Local;
use shared::order::OrderIdentity;
use std::sync::atomic::{AtomicU64, Ordering};

const ORDER_NUMBER_PREFIX: &str = "ORD";
const ORDER_NUMBER_BASE: u64 = 10000;

#[derive(Debug, Default)]
pub struct OrderNumberIssuer {
    issued: AtomicU64,
}

impl OrderNumberIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate next order number
    pub fn next_order_number(&self) -> String {
        let count = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let date_str = Local::now().format("%Y%m%d").to_string();
        format!("{}{}{}", ORDER_NUMBER_PREFIX, date_str, ORDER_NUMBER_BASE + count)
    }

    /// Fresh id plus the next order number
    pub fn issue(&self) -> OrderIdentity {
        OrderIdentity::new(uuid::Uuid::new_v4().to_string(), self.next_order_number())
    }

    /// Number of order numbers issued so far
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}
