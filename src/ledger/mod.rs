//! Order ledger and undo stack.
//!
//! ## Components
//!
//! - [`OrderLedger`]: Placement-ordered queue with O(1) append
//! - [`UndoStack`]: LIFO record of placements consulted by undo
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Append order | O(1) |
//! | Remove by order ID | O(n) walk + O(1) unlink |
//! | Filter by customer | O(n) |
//! | Push / pop undo | O(1) |
//!
//! ## Example
//!
//! ```
//! use order_desk::ledger::{OrderLedger, UndoStack};
//! use order_desk::types::Order;
//!
//! let mut ledger = OrderLedger::new();
//! let mut undo = UndoStack::new();
//!
//! let order = Order::new(100, 1, 10);
//! ledger.append(order.clone());
//! undo.push(order);
//!
//! let last = undo.pop().unwrap();
//! assert!(ledger.remove_by_order_id(last.order_id).is_some());
//! assert!(ledger.is_empty());
//! ```

mod node;
pub mod queue;
pub mod undo;

pub(crate) use node::OrderNode;
pub use queue::OrderLedger;
pub use undo::UndoStack;
