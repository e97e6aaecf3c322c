//! Order ledger: placement-ordered queue of orders.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail in O(1)
//! - Removal by order id walks from the head and unlinks the first match
//!
//! Order ids are not unique, so there is no id index: "first match from
//! the head" is the removal contract.

use slab::Slab;
use tracing::debug;

use crate::error::{Collection, DeskError, Result};
use crate::ledger::OrderNode;
use crate::types::Order;

/// Append-only (except for undo) sequence of placed orders.
#[derive(Debug, Default)]
pub struct OrderLedger {
    /// Order storage
    /// Key: slab index, Value: OrderNode
    orders: Slab<OrderNode>,

    /// Oldest order (slab key)
    head: Option<usize>,

    /// Newest order (slab key)
    tail: Option<usize>,
}

impl OrderLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Get the total number of orders in the ledger
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append an order at the tail
    pub fn append(&mut self, order: Order) {
        let order_id = order.order_id;
        let mut node = OrderNode::new(order);
        node.prev = self.tail;
        let key = self.orders.insert(node);

        match self.tail {
            // Link the old tail to the new node
            Some(tail_key) => self.orders[tail_key].next = Some(key),
            // Empty list - this is also the head
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        debug!(order_id, len = self.orders.len(), "order appended to ledger");
    }

    /// Remove the first order (from the head) whose id matches
    ///
    /// # Returns
    ///
    /// The removed order, or None if no order has this id
    pub fn remove_by_order_id(&mut self, order_id: i64) -> Option<Order> {
        let key = self.find_key(order_id)?;
        let order = self.unlink(key);
        debug!(order_id, len = self.orders.len(), "order removed from ledger");
        Some(order)
    }

    /// All orders in placement order
    pub fn list_all(&self) -> Result<Vec<&Order>> {
        if self.is_empty() {
            return Err(DeskError::EmptyCollection(Collection::Orders));
        }
        Ok(self.iter().collect())
    }

    /// Orders placed by one customer, in placement order
    ///
    /// # Errors
    ///
    /// `NoneFound` when the customer has no orders, whether or not the
    /// ledger itself is empty.
    pub fn list_by_customer(&self, customer_id: i64) -> Result<Vec<&Order>> {
        let orders: Vec<&Order> = self.iter().filter(|o| o.belongs_to(customer_id)).collect();
        if orders.is_empty() {
            return Err(DeskError::NoneFound { customer_id });
        }
        Ok(orders)
    }

    /// Iterate from the head (oldest) to the tail (newest)
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            orders: &self.orders,
            cursor: self.head,
        }
    }

    fn find_key(&self, order_id: i64) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.orders[key];
            if node.order_id() == order_id {
                return Some(key);
            }
            cursor = node.next;
        }
        None
    }

    /// Unlink a node, repairing head/tail, and free its slot
    fn unlink(&mut self, key: usize) -> Order {
        let node = self.orders.remove(key);

        match node.prev {
            Some(prev) => self.orders[prev].next = node.next,
            // This was the head
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => self.orders[next].prev = node.prev,
            // This was the tail
            None => self.tail = node.prev,
        }

        node.order
    }
}

/// Iterator over ledger orders in placement order.
pub struct Iter<'a> {
    orders: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.orders.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
