//! Desk configuration.
//!
//! Capacities only pre-size storage; every collection still grows on demand.
//!
//! ```
//! use order_desk::{DeskConfig, OrderDesk};
//!
//! let config = DeskConfig::default().with_order_capacity(10_000);
//! let desk = OrderDesk::with_config(&config);
//! assert!(desk.orders().is_empty());
//! ```

/// Default number of pre-allocated slots per collection
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskConfig {
    /// Pre-allocated customer slots
    pub customer_capacity: usize,

    /// Pre-allocated product tree nodes
    pub product_capacity: usize,

    /// Pre-allocated ledger slots (the undo stack uses the same figure)
    pub order_capacity: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            customer_capacity: DEFAULT_CAPACITY,
            product_capacity: DEFAULT_CAPACITY,
            order_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DeskConfig {
    pub fn with_customer_capacity(mut self, capacity: usize) -> Self {
        self.customer_capacity = capacity;
        self
    }

    pub fn with_product_capacity(mut self, capacity: usize) -> Self {
        self.product_capacity = capacity;
        self
    }

    pub fn with_order_capacity(mut self, capacity: usize) -> Self {
        self.order_capacity = capacity;
        self
    }
}
