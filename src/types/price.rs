//! Product price utilities.
//!
//! ## Overview
//!
//! Prices are held as `rust_decimal::Decimal`; 9.99 stays exactly 9.99.
//!
//! ## Display
//!
//! Listings always show two decimal places. Exact ties round to even, the
//! same result C's `printf("%.2f")` gives (0.125 prints as 0.12).
//!
//! ## Examples
//!
//! ```
//! use order_desk::types::price::{parse_price, format_price};
//!
//! let price = parse_price("9.99").unwrap();
//! assert_eq!(format_price(price), "9.99");
//! assert_eq!(format_price(parse_price("3").unwrap()), "3.00");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown in listings
pub const DISPLAY_DP: u32 = 2;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Parse a decimal string into a price
///
/// # Returns
///
/// * `Some(Decimal)` - The parsed price
/// * `None` - If the string is not a decimal number
///
/// # Example
///
/// ```
/// use order_desk::types::price::parse_price;
///
/// assert!(parse_price("1.5").is_some());
/// assert!(parse_price("abc").is_none());
/// ```
pub fn parse_price(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

/// Round a price to the display precision
fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Format a price with exactly two decimal places
///
/// # Example
///
/// ```
/// use order_desk::types::price::{format_price, parse_price};
///
/// assert_eq!(format_price(parse_price("2.345").unwrap()), "2.34");
/// assert_eq!(format_price(parse_price("2.355").unwrap()), "2.36");
/// assert_eq!(format_price(parse_price("0.5").unwrap()), "0.50");
/// ```
pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", round_price(price))
}

// ============================================================================
// Unit Tests
// ============================================================================
