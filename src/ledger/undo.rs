//! Undo stack of placed orders.
//!
//! Each successful placement pushes a value copy of the order. Popping is
//! destructive: once popped, the record is gone even if the matching ledger
//! entry cannot be found.

use tracing::debug;

use crate::error::{DeskError, Result};
use crate::types::Order;

/// Last-in-first-out record of placements.
#[derive(Debug, Default, Clone)]
pub struct UndoStack {
    entries: Vec<Order>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a placement on top of the stack
    pub fn push(&mut self, order: Order) {
        debug!(order_id = order.order_id, depth = self.entries.len() + 1, "undo record pushed");
        self.entries.push(order);
    }

    /// Remove and return the most recent placement
    ///
    /// # Errors
    ///
    /// `NothingToUndo` if the stack is empty
    pub fn pop(&mut self) -> Result<Order> {
        self.entries.pop().ok_or(DeskError::NothingToUndo)
    }
}
