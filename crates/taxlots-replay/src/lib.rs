//! Replay engine for taxlots.
//!
//! [`process`] folds a chronological sequence of raw transaction records
//! into the ledger of remaining tax lots under a
//! [`SelectionMethod`](taxlots_core::SelectionMethod). Each record is parsed
//! with `taxlots-parser`, then applied as a buy (open or same-day merge) or
//! a sale (FIFO/HIFO consumption).
//!
//! Processing is all-or-nothing: any parse failure or impossible sale
//! aborts the replay and no partial ledger escapes.
//!
//! # Example
//!
//! ```
//! use taxlots_replay::process;
//! use taxlots_core::SelectionMethod;
//!
//! let records = [
//!     "2021-01-01,buy,10000.00,1.0",
//!     "2021-02-01,sell,20000.00,0.5",
//! ];
//! let lots = process(&records, SelectionMethod::Fifo).unwrap();
//! assert_eq!(lots[0].to_string(), "1,2021-01-01,10000.00,0.50000000");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use taxlots_core::{Ledger, LedgerError, Lot, SelectionMethod, Side, UnknownMethodError};
use taxlots_parser::{parse_record, ParseError};
use thiserror::Error;

/// Error returned when a replay cannot complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// A record failed to parse; carries the offending raw text.
    #[error("problem parsing raw transaction ({record}): {source}")]
    Parse {
        /// The raw record that failed to parse.
        record: String,
        /// The underlying parse failure.
        source: ParseError,
    },
    /// A sale could not be satisfied; carries the active method name.
    #[error("problem executing sale ({method}): {source}")]
    Sale {
        /// The selection method that was in effect.
        method: SelectionMethod,
        /// The underlying booking failure.
        source: LedgerError,
    },
    /// The selector token names no known selection method.
    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethodError),
}

/// Replay `records` in order and return the remaining lots.
///
/// Records must already be in chronological order; the engine performs no
/// reordering or look-ahead. The returned lots are in ascending-id
/// (acquisition) order.
pub fn process<I, S>(records: I, method: SelectionMethod) -> Result<Vec<Lot>, ReplayError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ledger = Ledger::new();

    for record in records {
        let raw = record.as_ref();
        let parsed = parse_record(raw, ledger.lots_created()).map_err(|source| {
            ReplayError::Parse {
                record: raw.to_string(),
                source,
            }
        })?;

        match parsed.transaction.side {
            Side::Buy => ledger.record_buy(&parsed.transaction, parsed.proposed_id),
            Side::Sell => ledger
                .consume(parsed.transaction.quantity, method)
                .map_err(|source| ReplayError::Sale { method, source })?,
        }
    }

    Ok(ledger.into_lots())
}

/// Replay `records` under a raw selector token (`"fifo"` or `"hifo"`).
///
/// The selector is validated once, up front, before any record is touched;
/// past this point an invalid method is unrepresentable.
pub fn process_with_selector<I, S>(records: I, selector: &str) -> Result<Vec<Lot>, ReplayError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let method: SelectionMethod = selector.parse()?;
    process(records, method)
}
