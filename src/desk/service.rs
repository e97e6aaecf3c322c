//! The order desk: registries, ledger and undo behind one owner.
//!
//! ## Placement
//!
//! Validation strictly precedes mutation. The customer is checked first,
//! then the product; only when both resolve is the order appended to the
//! ledger and a copy pushed on the undo stack.
//!
//! ## Undo
//!
//! Undo pops the stack unconditionally, then removes the first ledger entry
//! carrying the popped order id. Order ids are not unique, so with repeated
//! ids the entry removed is the oldest one with that id, not necessarily the
//! order that was just placed.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::DeskConfig;
use crate::desk::digest::{compute_digest, digest_hex};
use crate::error::{DeskError, Result};
use crate::ledger::{OrderLedger, UndoStack};
use crate::registry::{CustomerRegistry, ProductCatalog};
use crate::types::{Customer, Order, Product, UndoneOrder};

/// Owner of all desk state.
///
/// Every instance is independent; there is no process-wide state.
///
/// ## Example
///
/// ```
/// use order_desk::{DeskError, OrderDesk};
/// use rust_decimal::Decimal;
///
/// let mut desk = OrderDesk::new();
/// desk.add_customer(1, "Alice");
/// desk.add_product(10, "Widget", Decimal::new(999, 2)).unwrap();
///
/// desk.place_order(100, 1, 10).unwrap();
/// assert_eq!(desk.place_order(101, 2, 10), Err(DeskError::CustomerNotFound(2)));
///
/// let undone = desk.undo_last_order().unwrap();
/// assert_eq!(undone.order.order_id, 100);
/// assert!(desk.list_orders().is_err());
/// ```
#[derive(Debug, Default)]
pub struct OrderDesk {
    customers: CustomerRegistry,
    products: ProductCatalog,
    orders: OrderLedger,
    undo: UndoStack,
}

impl OrderDesk {
    /// Create an empty desk
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty desk with storage sized by `config`
    pub fn with_config(config: &DeskConfig) -> Self {
        Self {
            customers: CustomerRegistry::with_capacity(config.customer_capacity),
            products: ProductCatalog::with_capacity(config.product_capacity),
            orders: OrderLedger::with_capacity(config.order_capacity),
            undo: UndoStack::with_capacity(config.order_capacity),
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[inline]
    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    #[inline]
    pub fn products(&self) -> &ProductCatalog {
        &self.products
    }

    #[inline]
    pub fn orders(&self) -> &OrderLedger {
        &self.orders
    }

    #[inline]
    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    // ========================================================================
    // Customers and products
    // ========================================================================

    /// Register a customer (always succeeds, duplicate ids shadow)
    pub fn add_customer(&mut self, id: i64, name: impl Into<String>) -> &Customer {
        self.customers.insert(id, name)
    }

    /// Customers, most recently added first
    pub fn list_customers(&self) -> Result<Vec<&Customer>> {
        self.customers.list_all()
    }

    /// Add a product; a duplicate id is skipped and reported
    pub fn add_product(
        &mut self,
        id: i64,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<&Product> {
        self.products.insert(id, name, price)
    }

    /// Products in ascending id order
    pub fn list_products(&self) -> Result<Vec<&Product>> {
        self.products.list_in_order()
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Place an order
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if `customer_id` is not registered
    /// - `ProductNotFound` if `product_id` is not in the catalog
    ///
    /// On error nothing is appended and nothing is pushed for undo.
    pub fn place_order(&mut self, order_id: i64, customer_id: i64, product_id: i64) -> Result<Order> {
        if self.customers.find_by_id(customer_id).is_none() {
            debug!(order_id, customer_id, "order rejected: unknown customer");
            return Err(DeskError::CustomerNotFound(customer_id));
        }
        if self.products.find_by_id(product_id).is_none() {
            debug!(order_id, product_id, "order rejected: unknown product");
            return Err(DeskError::ProductNotFound(product_id));
        }

        let order = Order::new(order_id, customer_id, product_id);
        self.orders.append(order.clone());
        self.undo.push(order.clone());

        debug!(order_id, customer_id, product_id, "order placed");
        Ok(order)
    }

    /// Orders in placement order
    pub fn list_orders(&self) -> Result<Vec<&Order>> {
        self.orders.list_all()
    }

    /// Reverse the most recent placement
    ///
    /// # Errors
    ///
    /// `NothingToUndo` if no placement is left on the stack.
    ///
    /// If the popped order id no longer appears in the ledger the undo
    /// record is still consumed and `removed_from_ledger` is false.
    pub fn undo_last_order(&mut self) -> Result<UndoneOrder> {
        let order = self.undo.pop()?;
        let removed_from_ledger = self.orders.remove_by_order_id(order.order_id).is_some();

        if removed_from_ledger {
            debug!(order_id = order.order_id, "order undone");
        } else {
            warn!(
                order_id = order.order_id,
                "undo record consumed but order is no longer in the ledger"
            );
        }

        Ok(UndoneOrder {
            order,
            removed_from_ledger,
        })
    }

    /// Orders placed by one customer, in placement order
    ///
    /// # Errors
    ///
    /// `NoneFound` when the customer has no orders.
    pub fn customer_history(&self, customer_id: i64) -> Result<Vec<&Order>> {
        self.orders.list_by_customer(customer_id)
    }

    // ========================================================================
    // Digest
    // ========================================================================

    /// SHA-256 over the SSZ-encoded ledger in placement order
    pub fn ledger_digest(&self) -> Result<[u8; 32]> {
        compute_digest(self.orders.iter())
    }

    /// Hex form of [`OrderDesk::ledger_digest`]
    pub fn ledger_digest_hex(&self) -> Result<String> {
        self.ledger_digest().map(|d| digest_hex(&d))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_desk() -> OrderDesk {
        let mut desk = OrderDesk::new();
        desk.add_customer(1, "Alice");
        desk.add_customer(2, "Bob");
        desk.add_product(10, "Widget", Decimal::new(999, 2)).unwrap();
        desk.add_product(20, "Gadget", Decimal::new(1500, 2)).unwrap();
        desk
    }

    fn order_ids(desk: &OrderDesk) -> Vec<i64> {
        desk.orders().iter().map(|o| o.order_id).collect()
    }

    #[test]
    fn test_place_order_appends_and_records_undo() {
        let mut desk = seeded_desk();

        let order = desk.place_order(100, 1, 10).unwrap();
        assert_eq!(order, Order::new(100, 1, 10));
        assert_eq!(order_ids(&desk), vec![100]);
        assert_eq!(desk.undo_stack().len(), 1);
    }

    #[test]
    fn test_place_order_unknown_customer_checked_first() {
        let mut desk = seeded_desk();

        // Both references unknown: the customer is reported
        assert_eq!(desk.place_order(100, 9, 99), Err(DeskError::CustomerNotFound(9)));
        assert_eq!(desk.place_order(100, 1, 99), Err(DeskError::ProductNotFound(99)));

        assert!(desk.orders().is_empty());
        assert!(desk.undo_stack().is_empty());
    }

    #[test]
    fn test_undo_reverse_placement_order() {
        let mut desk = seeded_desk();
        desk.place_order(100, 1, 10).unwrap();
        desk.place_order(101, 2, 20).unwrap();
        desk.place_order(102, 1, 20).unwrap();

        assert_eq!(desk.undo_last_order().unwrap().order.order_id, 102);
        assert_eq!(desk.undo_last_order().unwrap().order.order_id, 101);
        assert_eq!(desk.undo_last_order().unwrap().order.order_id, 100);
        assert_eq!(desk.undo_last_order(), Err(DeskError::NothingToUndo));
        assert!(desk.orders().is_empty());
    }

    #[test]
    fn test_undo_with_missing_ledger_entry_consumes_record() {
        let mut desk = seeded_desk();
        desk.place_order(100, 1, 10).unwrap();
        desk.place_order(101, 1, 10).unwrap();

        // Drop the ledger entry behind the stack's back
        desk.orders.remove_by_order_id(101);

        let undone = desk.undo_last_order().unwrap();
        assert_eq!(undone.order.order_id, 101);
        assert!(!undone.removed_from_ledger);
        assert_eq!(order_ids(&desk), vec![100]);
        assert_eq!(desk.undo_stack().len(), 1);
    }

    #[test]
    fn test_undo_duplicate_order_id_removes_oldest_entry() {
        let mut desk = seeded_desk();
        desk.place_order(5, 1, 10).unwrap();
        desk.place_order(5, 2, 20).unwrap();

        let undone = desk.undo_last_order().unwrap();
        assert_eq!(undone.order, Order::new(5, 2, 20));
        assert!(undone.removed_from_ledger);

        // The first-placed order 5 went, the second one stays
        assert_eq!(desk.list_orders().unwrap(), vec![&Order::new(5, 2, 20)]);
    }

    #[test]
    fn test_negative_ids_place_and_undo() {
        let mut desk = OrderDesk::new();
        desk.add_customer(-1, "Minus");
        desk.add_product(-10, "Negative", Decimal::ONE).unwrap();

        let order = desk.place_order(-100, -1, -10).unwrap();
        assert_eq!(order, Order::new(-100, -1, -10));
        assert_eq!(desk.customer_history(-1).unwrap(), vec![&order]);
        assert_eq!(desk.place_order(-101, 1, -10), Err(DeskError::CustomerNotFound(1)));

        let undone = desk.undo_last_order().unwrap();
        assert_eq!(undone.order, order);
        assert!(undone.removed_from_ledger);
        assert!(desk.orders().is_empty());
    }

    #[test]
    fn test_customer_history() {
        let mut desk = seeded_desk();
        desk.place_order(100, 1, 10).unwrap();
        desk.place_order(101, 2, 20).unwrap();
        desk.place_order(102, 1, 20).unwrap();

        let history: Vec<i64> = desk
            .customer_history(1)
            .unwrap()
            .iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(history, vec![100, 102]);
        assert_eq!(
            desk.customer_history(3),
            Err(DeskError::NoneFound { customer_id: 3 })
        );
    }

    #[test]
    fn test_digest_restored_after_undo() {
        let mut desk = seeded_desk();
        desk.place_order(100, 1, 10).unwrap();
        let before = desk.ledger_digest().unwrap();

        desk.place_order(101, 2, 20).unwrap();
        assert_ne!(desk.ledger_digest().unwrap(), before);

        desk.undo_last_order().unwrap();
        assert_eq!(desk.ledger_digest().unwrap(), before);
        assert_eq!(desk.ledger_digest_hex().unwrap().len(), 64);
    }

    #[test]
    fn test_with_config() {
        let config = DeskConfig::default().with_order_capacity(1);
        let mut desk = OrderDesk::with_config(&config);
        desk.add_customer(1, "Alice");
        desk.add_product(10, "Widget", Decimal::ONE).unwrap();

        // Capacity is a hint, not a limit
        desk.place_order(1, 1, 10).unwrap();
        desk.place_order(2, 1, 10).unwrap();
        assert_eq!(desk.orders().len(), 2);
    }
}
