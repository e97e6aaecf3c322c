//! Registries for the reference data an order points at.
//!
//! ## Components
//!
//! - [`CustomerRegistry`]: Insert-only customer list, most recent first
//! - [`ProductCatalog`]: Binary search tree of products keyed by id
//!
//! Both keep their nodes in a `slab::Slab` and link them by slab key.
//!
//! ## Example
//!
//! ```
//! use order_desk::registry::{CustomerRegistry, ProductCatalog};
//! use rust_decimal::Decimal;
//!
//! let mut customers = CustomerRegistry::new();
//! customers.insert(1, "Alice");
//!
//! let mut products = ProductCatalog::new();
//! products.insert(10, "Widget", Decimal::new(999, 2)).unwrap();
//!
//! assert!(customers.find_by_id(1).is_some());
//! assert!(products.find_by_id(10).is_some());
//! ```

pub mod catalog;
pub mod customers;

pub use catalog::ProductCatalog;
pub use customers::CustomerRegistry;
