//! Customer registry.
//!
//! ## Design
//!
//! Customers form a singly linked list threaded through a slab. New
//! customers are pushed at the head, so iteration yields the most recently
//! registered customer first.
//!
//! ```text
//! head (newest) -> customer2 -> customer1 (oldest)
//! ```
//!
//! Ids are not checked for uniqueness. A re-used id shadows the older
//! entry because lookups walk from the head and stop at the first match.

use slab::Slab;
use tracing::debug;

use crate::error::{Collection, DeskError, Result};
use crate::types::Customer;

/// Customer stored in the slab with its link to the next (older) customer.
#[derive(Debug, Clone)]
struct CustomerNode {
    customer: Customer,
    next: Option<usize>,
}

/// Insert-only customer list, most recent first.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    nodes: Slab<CustomerNode>,
    head: Option<usize>,
}

impl CustomerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
        }
    }

    /// Number of registered customers (shadowed entries included)
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Register a customer at the head of the list
    ///
    /// Always succeeds, even when `id` is already registered.
    pub fn insert(&mut self, id: i64, name: impl Into<String>) -> &Customer {
        let node = CustomerNode {
            customer: Customer::new(id, name),
            next: self.head,
        };
        let key = self.nodes.insert(node);
        self.head = Some(key);

        let customer = &self.nodes[key].customer;
        debug!(customer_id = id, name = %customer.name, "customer registered");
        customer
    }

    /// Find the most recently registered customer with `id`
    pub fn find_by_id(&self, id: i64) -> Option<&Customer> {
        let found = self.iter().find(|c| c.id == id);
        debug!(customer_id = id, found = found.is_some(), "customer lookup");
        found
    }

    /// All customers, most recently registered first
    pub fn list_all(&self) -> Result<Vec<&Customer>> {
        if self.is_empty() {
            return Err(DeskError::EmptyCollection(Collection::Customers));
        }
        Ok(self.iter().collect())
    }

    /// Iterate from the head (newest) to the tail (oldest)
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

/// Iterator over customers in list order.
pub struct Iter<'a> {
    nodes: &'a Slab<CustomerNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Customer;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.customer)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = CustomerRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.find_by_id(1).is_none());
        assert_eq!(
            registry.list_all(),
            Err(DeskError::EmptyCollection(Collection::Customers))
        );
    }

    #[test]
    fn test_registry_insert_returns_customer() {
        let mut registry = CustomerRegistry::with_capacity(4);

        let customer = registry.insert(1, "Alice");
        assert_eq!(customer.id, 1);
        assert_eq!(customer.name, "Alice");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_most_recent_first() {
        let mut registry = CustomerRegistry::new();
        registry.insert(1, "Alice");
        registry.insert(2, "Bob");
        registry.insert(3, "Carol");

        let ids: Vec<i64> = registry.list_all().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_registry_find_by_id() {
        let mut registry = CustomerRegistry::new();
        registry.insert(1, "Alice");
        registry.insert(2, "Bob");

        assert_eq!(registry.find_by_id(1).map(|c| c.name.as_str()), Some("Alice"));
        assert_eq!(registry.find_by_id(2).map(|c| c.name.as_str()), Some("Bob"));
        assert!(registry.find_by_id(3).is_none());
    }

    #[test]
    fn test_registry_duplicate_id_shadows() {
        let mut registry = CustomerRegistry::new();
        registry.insert(1, "Alice");
        registry.insert(1, "Alicia");

        // Both entries are kept, the newer one wins on lookup
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_id(1).unwrap().name, "Alicia");

        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alicia", "Alice"]);
    }
}
