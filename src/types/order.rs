//! Order types for the order desk.
//!
//! Ids are signed: any integer a caller supplies is a valid id, negative
//! values included. The ledger digest encodes them through a `u64` view
//! (see `desk::digest`).

use std::fmt;

// ============================================================================
// Order struct
// ============================================================================

/// An order placed by a customer for a single product.
///
/// Orders are plain values: the ledger owns one copy and the undo stack
/// holds another until it is popped.
///
/// ## Example
///
/// ```
/// use order_desk::types::Order;
///
/// let order = Order::new(100, 1, 10);
/// assert_eq!(order.to_string(), "OrderID: 100, CustomerID: 1, ProductID: 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order {
    /// Caller-supplied order identifier (not checked for uniqueness)
    pub order_id: i64,

    /// Customer who placed the order
    pub customer_id: i64,

    /// Product being ordered
    pub product_id: i64,
}

impl Order {
    /// Create a new order
    pub fn new(order_id: i64, customer_id: i64, product_id: i64) -> Self {
        Self {
            order_id,
            customer_id,
            product_id,
        }
    }

    /// Check if this order was placed by the given customer
    #[inline]
    pub fn belongs_to(&self, customer_id: i64) -> bool {
        self.customer_id == customer_id
    }

    /// Line used in a customer's order history, where the customer is implied
    pub fn history_line(&self) -> String {
        format!("OrderID: {}, ProductID: {}", self.order_id, self.product_id)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderID: {}, CustomerID: {}, ProductID: {}",
            self.order_id, self.customer_id, self.product_id
        )
    }
}

// ============================================================================
// UndoneOrder
// ============================================================================

/// Outcome of a successful undo.
///
/// `removed_from_ledger` is false when the popped order had no matching
/// entry left in the ledger. The undo record is consumed either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoneOrder {
    /// The order popped from the undo stack
    pub order: Order,

    /// Whether a ledger entry with the same order id was removed
    pub removed_from_ledger: bool,
}

impl fmt::Display for UndoneOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Undid Order {} (Customer {}, Product {})",
            self.order.order_id, self.order.customer_id, self.order.product_id
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = Order::new(100, 1, 10);

        assert_eq!(order.order_id, 100);
        assert_eq!(order.customer_id, 1);
        assert_eq!(order.product_id, 10);
        assert!(order.belongs_to(1));
        assert!(!order.belongs_to(2));
    }

    #[test]
    fn test_order_negative_ids() {
        let order = Order::new(-1, -2, -3);

        assert!(order.belongs_to(-2));
        assert_eq!(order.to_string(), "OrderID: -1, CustomerID: -2, ProductID: -3");
    }

    #[test]
    fn test_order_display() {
        let order = Order::new(100, 1, 10);

        assert_eq!(order.to_string(), "OrderID: 100, CustomerID: 1, ProductID: 10");
        assert_eq!(order.history_line(), "OrderID: 100, ProductID: 10");
    }

    #[test]
    fn test_undone_order_display() {
        let undone = UndoneOrder {
            order: Order::new(7, 2, 30),
            removed_from_ledger: true,
        };

        assert_eq!(undone.to_string(), "Undid Order 7 (Customer 2, Product 30)");
    }
}
