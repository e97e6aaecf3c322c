//! Order desk service.
//!
//! [`OrderDesk`] owns the customer registry, product catalog, order ledger
//! and undo stack, and keeps the ledger and undo stack consistent across
//! placements and undos.

pub mod digest;
mod service;

pub use service::OrderDesk;
