//! Core data types for the order desk
//!
//! ## Types
//!
//! - [`Customer`]: A registered customer
//! - [`Product`]: A catalog entry with a decimal price
//! - [`Order`]: A placement linking a customer to a product
//! - [`UndoneOrder`]: Result of reversing the most recent placement
//!
//! ## Prices
//!
//! Prices use `rust_decimal::Decimal`; see [`price`] for parsing and
//! two-decimal formatting.

mod customer;
mod order;
mod product;
pub mod price;

// Re-export all types at module level
pub use customer::Customer;
pub use order::{Order, UndoneOrder};
pub use product::Product;
