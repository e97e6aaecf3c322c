//! Order node for slab-based storage.
//!
//! `OrderNode` wraps an `Order` with doubly-linked list pointers so the
//! ledger can unlink any entry without walking back to its predecessor.
//! The pointers are slab keys; only the ledger touches them.
//!
//! - `next`: the order placed just after this one
//! - `prev`: the order placed just before this one

use crate::types::Order;

#[derive(Debug, Clone)]
pub(crate) struct OrderNode {
    pub(crate) order: Order,

    /// None if this is the tail (newest order)
    pub(crate) next: Option<usize>,

    /// None if this is the head (oldest order)
    pub(crate) prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    #[inline]
    pub(crate) fn new(order: Order) -> Self {
        Self {
            order,
            next: None,
            prev: None,
        }
    }

    #[inline]
    pub(crate) fn order_id(&self) -> i64 {
        self.order.order_id
    }
}
