//! Transaction type representing a single typed buy/sell record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Side;

/// A single typed transaction from the input log.
///
/// Transactions are ephemeral: the ledger consumes each one in turn and
/// retains only the open lots they produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date token (opaque, equality-only).
    pub date: String,
    /// Whether this is an acquisition or a disposal.
    pub side: Side,
    /// Price per unit.
    pub price: Decimal,
    /// Unit amount bought or sold.
    pub quantity: Decimal,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(date: impl Into<String>, side: Side, price: Decimal, quantity: Decimal) -> Self {
        Self {
            date: date.into(),
            side,
            price,
            quantity,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.date, self.side, self.price, self.quantity
        )
    }
}
