//! Ledger digest.
//!
//! A 32-byte SHA-256 hash over the SSZ encoding of every order in placement
//! order. Two ledgers with the same orders in the same order always hash the
//! same, which makes "place then undo restores the previous state" a single
//! comparison.
//!
//! ## SSZ Layout
//!
//! SSZ has no signed integers, so each id is encoded through its two's
//! complement `u64` bit pattern. The cast is lossless: distinct `i64` ids
//! map to distinct `u64` values.
//!
//! ```text
//! EncodedOrder { order_id: u64, customer_id: u64, product_id: u64 }  // 24 bytes
//! ```

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::{DeskError, Result as DeskResult};
use crate::types::Order;

/// SSZ view of an [`Order`] with ids bit-cast to `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
struct EncodedOrder {
    order_id: u64,
    customer_id: u64,
    product_id: u64,
}

impl From<&Order> for EncodedOrder {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id as u64,
            customer_id: order.customer_id as u64,
            product_id: order.product_id as u64,
        }
    }
}

/// Deterministic SSZ bytes for one order
fn encode(order: &Order) -> DeskResult<Vec<u8>> {
    ssz_rs::serialize(&EncodedOrder::from(order)).map_err(|e| DeskError::Encoding(format!("{:?}", e)))
}

/// Hash a sequence of orders
pub fn compute_digest<'a, I>(orders: I) -> DeskResult<[u8; 32]>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut hasher = Sha256::new();
    for order in orders {
        hasher.update(encode(order)?);
    }

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    Ok(hash)
}

/// Hex form of a digest
pub fn digest_hex(digest: &[u8; 32]) -> String {
    hex::encode(digest)
}
