//! Parser for raw taxlots transaction records.
//!
//! A raw record is one line of the transaction log, with exactly four
//! comma-separated fields:
//!
//! ```text
//! <date>,<buy|sell>,<price>,<quantity>
//! ```
//!
//! [`parse_record`] turns one such line into a typed
//! [`Transaction`](taxlots_core::Transaction) plus a candidate lot id. The
//! id is a proposal derived from the number of lots created so far; the
//! caller materializes it only if the record actually opens a new lot.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxlots_core::Side;
//! use taxlots_parser::parse_record;
//!
//! let parsed = parse_record("2021-01-01,buy,10000.00,1.0", 0).unwrap();
//! assert_eq!(parsed.transaction.side, Side::Buy);
//! assert_eq!(parsed.transaction.price, dec!(10000.00));
//! assert_eq!(parsed.proposed_id, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use rust_decimal::Decimal;
use std::fmt;
use taxlots_core::{Side, Transaction};
use thiserror::Error;

/// Which numeric field of a record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// The third field: price per unit.
    Price,
    /// The fourth field: unit amount.
    Quantity,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => write!(f, "price"),
            Self::Quantity => write!(f, "quantity"),
        }
    }
}

/// Error returned when a raw record cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The record does not split into exactly four fields.
    #[error("invalid record format; incorrect field count (should be 4, got {found})")]
    FieldCount {
        /// Number of fields the record split into.
        found: usize,
    },
    /// The side token is neither buy nor sell.
    #[error("invalid order side (must be either \"buy\" or \"sell\"): {token}")]
    InvalidSide {
        /// The normalized side token that was rejected.
        token: String,
    },
    /// The price or quantity field is not a decimal number.
    #[error("invalid (non-decimal) {field}: {value}")]
    InvalidNumber {
        /// Which field was malformed.
        field: NumericField,
        /// The text that failed to parse.
        value: String,
    },
}

/// A successfully parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// The typed transaction.
    pub transaction: Transaction,
    /// Candidate id for the lot this record would open: one past the number
    /// of lots created so far. Only materialized if the caller opens a lot.
    pub proposed_id: u64,
}

/// Parse one raw record.
///
/// Pure function of its inputs; `lots_created` is the number of lots the
/// caller's ledger has created so far.
pub fn parse_record(raw: &str, lots_created: u64) -> Result<ParsedRecord, ParseError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 4 {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    }

    let date = fields[0];
    let side_token = fields[1].to_lowercase();
    let side: Side = side_token
        .parse()
        .map_err(|_| ParseError::InvalidSide { token: side_token })?;
    let price: Decimal = fields[2].parse().map_err(|_| ParseError::InvalidNumber {
        field: NumericField::Price,
        value: fields[2].to_string(),
    })?;
    let quantity: Decimal = fields[3].parse().map_err(|_| ParseError::InvalidNumber {
        field: NumericField::Quantity,
        value: fields[3].to_string(),
    })?;

    Ok(ParsedRecord {
        transaction: Transaction::new(date, side, price, quantity),
        proposed_id: lots_created + 1,
    })
}
