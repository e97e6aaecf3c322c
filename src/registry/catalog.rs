//! Product catalog as an unbalanced binary search tree.
//!
//! ## Design
//!
//! Tree nodes live in a slab; `left` and `right` are slab keys rather than
//! boxed children. For every node, ids in the left subtree are smaller and
//! ids in the right subtree are larger.
//!
//! ```text
//!         5
//!       /   \
//!      3     7
//! ```
//!
//! Insert and search descend iteratively. The in-order walk uses an
//! explicit stack so a degenerate (list-shaped) tree cannot overflow the
//! call stack.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use slab::Slab;
use tracing::debug;

use crate::error::{Collection, DeskError, Result};
use crate::types::Product;

/// Tree node stored in the slab.
#[derive(Debug, Clone)]
struct ProductNode {
    product: Product,
    left: Option<usize>,
    right: Option<usize>,
}

impl ProductNode {
    fn leaf(product: Product) -> Self {
        Self {
            product,
            left: None,
            right: None,
        }
    }
}

/// Which child link of a parent a new leaf hangs from
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(usize),
    Right(usize),
}

/// Products keyed by id, listed in ascending id order.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    nodes: Slab<ProductNode>,
    root: Option<usize>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a product as a new leaf
    ///
    /// # Errors
    ///
    /// `DuplicateProductId` if `id` is already present. The catalog is left
    /// unchanged; the existing product is never overwritten.
    pub fn insert(&mut self, id: i64, name: impl Into<String>, price: Decimal) -> Result<&Product> {
        let mut link = Link::Root;
        let mut cursor = self.root;

        while let Some(key) = cursor {
            let node = &self.nodes[key];
            match id.cmp(&node.product.id) {
                Ordering::Less => {
                    link = Link::Left(key);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(key);
                    cursor = node.right;
                }
                Ordering::Equal => {
                    debug!(product_id = id, "duplicate product id skipped");
                    return Err(DeskError::DuplicateProductId(id));
                }
            }
        }

        let key = self.nodes.insert(ProductNode::leaf(Product::new(id, name, price)));
        match link {
            Link::Root => self.root = Some(key),
            Link::Left(parent) => self.nodes[parent].left = Some(key),
            Link::Right(parent) => self.nodes[parent].right = Some(key),
        }

        let product = &self.nodes[key].product;
        debug!(product_id = id, name = %product.name, price = %product.price, "product added");
        Ok(product)
    }

    /// Find a product by descending from the root
    pub fn find_by_id(&self, id: i64) -> Option<&Product> {
        let mut cursor = self.root;

        while let Some(key) = cursor {
            let node = &self.nodes[key];
            cursor = match id.cmp(&node.product.id) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    debug!(product_id = id, found = true, "product lookup");
                    return Some(&node.product);
                }
            };
        }

        debug!(product_id = id, found = false, "product lookup");
        None
    }

    /// All products in ascending id order
    pub fn list_in_order(&self) -> Result<Vec<&Product>> {
        if self.is_empty() {
            return Err(DeskError::EmptyCollection(Collection::Products));
        }
        Ok(self.iter().collect())
    }

    /// In-order iterator, restarted from the root on every call
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

}

/// In-order traversal over the catalog tree.
pub struct InOrder<'a> {
    nodes: &'a Slab<ProductNode>,
    stack: Vec<usize>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut cursor: Option<usize>) {
        while let Some(key) = cursor {
            self.stack.push(key);
            cursor = self.nodes[key].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        let node = &self.nodes[key];
        self.push_left_spine(node.right);
        Some(&node.product)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn ids(catalog: &ProductCatalog) -> Vec<i64> {
        catalog.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_catalog_new() {
        let catalog = ProductCatalog::new();

        assert!(catalog.is_empty());
        assert!(catalog.find_by_id(1).is_none());
        assert_eq!(
            catalog.list_in_order(),
            Err(DeskError::EmptyCollection(Collection::Products))
        );
    }

    #[test]
    fn test_catalog_in_order_listing() {
        let mut catalog = ProductCatalog::with_capacity(8);
        catalog.insert(5, "A", price(100)).unwrap();
        catalog.insert(3, "B", price(200)).unwrap();
        catalog.insert(7, "C", price(300)).unwrap();

        assert_eq!(ids(&catalog), vec![3, 5, 7]);
    }

    #[test]
    fn test_catalog_links_follow_bst_ordering() {
        let mut catalog = ProductCatalog::new();
        for id in [50, 30, 70, 20, 40, 60, 80] {
            catalog.insert(id, format!("P{}", id), price(100)).unwrap();
        }

        let root = catalog.root.unwrap();
        let root_node = &catalog.nodes[root];
        assert_eq!(root_node.product.id, 50);

        let left = &catalog.nodes[root_node.left.unwrap()];
        let right = &catalog.nodes[root_node.right.unwrap()];
        assert_eq!(left.product.id, 30);
        assert_eq!(right.product.id, 70);
        assert_eq!(catalog.nodes[left.right.unwrap()].product.id, 40);
        assert_eq!(catalog.nodes[right.left.unwrap()].product.id, 60);

        assert_eq!(ids(&catalog), vec![20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn test_catalog_negative_ids_sort_first() {
        let mut catalog = ProductCatalog::new();
        for id in [0, -5, 3, -1, i64::MIN] {
            catalog.insert(id, "P", price(1)).unwrap();
        }

        assert_eq!(ids(&catalog), vec![i64::MIN, -5, -1, 0, 3]);
        assert!(catalog.find_by_id(-1).is_some());
        assert!(catalog.find_by_id(-2).is_none());
    }

    #[test]
    fn test_catalog_duplicate_is_skipped() {
        let mut catalog = ProductCatalog::new();
        catalog.insert(5, "A", price(100)).unwrap();

        let result = catalog.insert(5, "Replacement", price(999));
        assert_eq!(result.unwrap_err(), DeskError::DuplicateProductId(5));

        // Existing product untouched
        assert_eq!(catalog.len(), 1);
        let product = catalog.find_by_id(5).unwrap();
        assert_eq!(product.name, "A");
        assert_eq!(product.price, price(100));
    }

    #[test]
    fn test_catalog_find_by_id() {
        let mut catalog = ProductCatalog::new();
        catalog.insert(10, "Widget", price(999)).unwrap();
        catalog.insert(4, "Gadget", price(450)).unwrap();
        catalog.insert(12, "Gizmo", price(1250)).unwrap();

        assert_eq!(catalog.find_by_id(4).unwrap().name, "Gadget");
        assert_eq!(catalog.find_by_id(12).unwrap().price, price(1250));
        assert!(catalog.find_by_id(11).is_none());
        assert!(catalog.find_by_id(0).is_none());
    }

    #[test]
    fn test_catalog_degenerate_tree() {
        let mut catalog = ProductCatalog::new();
        for id in 1..=1_000 {
            catalog.insert(id, "P", price(1)).unwrap();
        }

        // Ascending inserts build a right spine
        let root = &catalog.nodes[catalog.root.unwrap()];
        assert!(root.left.is_none());
        assert_eq!(root.product.id, 1);
        assert_eq!(ids(&catalog), (1..=1_000).collect::<Vec<_>>());
        assert!(catalog.find_by_id(1_000).is_some());
    }

    #[test]
    fn test_catalog_iter_restartable() {
        let mut catalog = ProductCatalog::new();
        catalog.insert(2, "B", price(1)).unwrap();
        catalog.insert(1, "A", price(1)).unwrap();

        assert_eq!(ids(&catalog), vec![1, 2]);
        assert_eq!(ids(&catalog), vec![1, 2]);
    }
}
