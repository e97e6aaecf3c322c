//! # Order Desk
//!
//! In-memory order management: customers, a product catalog, an order
//! ledger and undo of the most recent placement.
//!
//! ## Architecture
//!
//! - **Types**: Core records (Customer, Product, Order, UndoneOrder)
//! - **Registry**: Customer list and product binary search tree
//! - **Ledger**: Placement-ordered order queue and undo stack
//! - **Desk**: The service that validates placements and performs undo
//!
//! ## Design Principles
//!
//! 1. **No global state**: All state lives in an [`OrderDesk`] value
//! 2. **All-or-nothing placement**: Validation strictly precedes mutation
//! 3. **Outcomes, not panics**: Every rejected or empty request is a [`DeskError`]
//! 4. **Exact prices**: Decimal arithmetic, never floating point
//!
//! ## Example
//!
//! ```
//! use order_desk::OrderDesk;
//! use rust_decimal::Decimal;
//!
//! let mut desk = OrderDesk::new();
//! desk.add_product(5, "A", Decimal::ONE).unwrap();
//! desk.add_product(3, "B", Decimal::new(2, 0)).unwrap();
//! desk.add_product(7, "C", Decimal::new(3, 0)).unwrap();
//!
//! let ids: Vec<i64> = desk.list_products().unwrap().iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![3, 5, 7]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Customer, Product, Order
pub mod types;

/// Customer registry and product catalog
pub mod registry;

/// Order ledger and undo stack
pub mod ledger;

/// Order desk service
pub mod desk;

/// Error taxonomy
pub mod error;

/// Storage sizing
pub mod config;

/// Subscriber setup for binaries
pub mod logging;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::DeskConfig;
pub use desk::OrderDesk;
pub use error::{Collection, DeskError, Result};
pub use ledger::{OrderLedger, UndoStack};
pub use registry::{CustomerRegistry, ProductCatalog};
pub use types::{Customer, Order, Product, UndoneOrder};
