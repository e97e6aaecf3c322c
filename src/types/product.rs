//! Product record.

use std::fmt;

use rust_decimal::Decimal;

use crate::types::price::format_price;

/// A product in the catalog.
///
/// ## Example
///
/// ```
/// use order_desk::types::Product;
/// use order_desk::types::price::parse_price;
///
/// let product = Product::new(10, "Widget", parse_price("9.99").unwrap());
/// assert_eq!(product.to_string(), "ID: 10, Name: Widget, Price: 9.99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Catalog key (unique within a catalog)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Decimal,
}

impl Product {
    /// Create a new product
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: {}",
            self.id,
            self.name,
            format_price(self.price)
        )
    }
}
