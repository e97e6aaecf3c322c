//! Customer record.

use std::fmt;

/// A registered customer.
///
/// Customers are never mutated or removed once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Customer identifier (duplicates allowed, most recent shadows)
    pub id: i64,

    /// Display name
    pub name: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.id, self.name)
    }
}
