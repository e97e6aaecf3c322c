//! Error and outcome taxonomy for desk operations.
//!
//! Every variant is recoverable: operations return it to the caller and
//! leave the desk unchanged. Messages mirror what an operator sees.

use std::fmt;

use thiserror::Error;

/// Which collection an empty listing refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Customers,
    Products,
    Orders,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Customers => "customers",
            Collection::Products => "products",
            Collection::Orders => "orders",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    #[error("Customer {0} does not exist. Order not placed.")]
    CustomerNotFound(i64),

    #[error("Product {0} does not exist. Order not placed.")]
    ProductNotFound(i64),

    #[error("Product with ID {0} already exists. Skipped.")]
    DuplicateProductId(i64),

    #[error("No order to undo.")]
    NothingToUndo,

    #[error("No {0} to display.")]
    EmptyCollection(Collection),

    #[error("No orders found for customer {customer_id}.")]
    NoneFound { customer_id: i64 },

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl DeskError {
    /// Whether this outcome is informational rather than a rejected request
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            DeskError::EmptyCollection(_) | DeskError::NoneFound { .. } | DeskError::NothingToUndo
        )
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DeskError::CustomerNotFound(2).to_string(),
            "Customer 2 does not exist. Order not placed."
        );
        assert_eq!(
            DeskError::DuplicateProductId(5).to_string(),
            "Product with ID 5 already exists. Skipped."
        );
        assert_eq!(
            DeskError::EmptyCollection(Collection::Products).to_string(),
            "No products to display."
        );
    }

    #[test]
    fn test_is_empty_result() {
        assert!(DeskError::NothingToUndo.is_empty_result());
        assert!(DeskError::NoneFound { customer_id: 1 }.is_empty_result());
        assert!(!DeskError::ProductNotFound(1).is_empty_result());
    }
}
