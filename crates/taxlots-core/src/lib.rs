//! Core types for taxlots
//!
//! This crate provides the fundamental types used throughout the taxlots
//! project:
//!
//! - [`Lot`] - An open, unconsumed acquisition with a remaining quantity
//! - [`Transaction`] - A single typed buy/sell record
//! - [`Ledger`] - The ordered collection of open lots with booking support
//! - [`SelectionMethod`] - How lots are matched when a sale consumes them
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxlots_core::{Ledger, SelectionMethod, Side, Transaction};
//!
//! let mut ledger = Ledger::new();
//!
//! // Acquire one unit at 10000.
//! let buy = Transaction::new("2021-01-01", Side::Buy, dec!(10000.00), dec!(1.0));
//! ledger.record_buy(&buy, ledger.lots_created() + 1);
//!
//! // Sell half of it, earliest-acquired first.
//! ledger.consume(dec!(0.5), SelectionMethod::Fifo).unwrap();
//!
//! assert_eq!(ledger.total_quantity(), dec!(0.5));
//! assert_eq!(ledger.lots()[0].id, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ledger;
pub mod lot;
pub mod method;
pub mod transaction;

pub use ledger::{Ledger, LedgerError};
pub use lot::{Lot, Side};
pub use method::{SelectionMethod, UnknownMethodError};
pub use transaction::Transaction;

// Re-export the numeric type used for prices and quantities
pub use rust_decimal::Decimal;
