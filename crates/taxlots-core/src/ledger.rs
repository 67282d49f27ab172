//! Ledger type representing the ordered collection of open lots.
//!
//! A [`Ledger`] tracks every still-open [`Lot`] in chronological order and
//! provides the two booking operations of the replay: recording a buy
//! (with the same-day weighted-average merge) and consuming a sale under a
//! [`SelectionMethod`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Lot, SelectionMethod, Side, Transaction};

/// Error that can occur while booking against the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A sale asked for more units than all open lots hold together.
    #[error(
        "sale quantity exceeded total buy quantity: requested {requested}, available {available}"
    )]
    InsufficientLots {
        /// Units the sale asked for.
        requested: Decimal,
        /// Units available across all open lots.
        available: Decimal,
    },
}

/// The ordered collection of open lots.
///
/// Lots are kept in ascending-id order, which is equivalent to chronological
/// acquisition order. That order is an invariant observable by callers at
/// all times: HIFO sales pick their consumption order through a price-ranked
/// view of the lot indices instead of re-sorting the ledger itself, so the
/// physical sequence never changes.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxlots_core::{Ledger, SelectionMethod, Side, Transaction};
///
/// let mut ledger = Ledger::new();
/// let buy = Transaction::new("2021-01-01", Side::Buy, dec!(10000), dec!(2));
/// ledger.record_buy(&buy, ledger.lots_created() + 1);
///
/// ledger.consume(dec!(2), SelectionMethod::Hifo).unwrap();
/// assert!(ledger.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    lots: Vec<Lot>,
    created: u64,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all open lots, in ascending-id order.
    #[must_use]
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// Check if the ledger holds no open lots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Get the number of open lots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lots.len()
    }

    /// Get the number of lots ever created in this ledger.
    ///
    /// Merges and consumptions do not decrement this; it feeds the parser's
    /// candidate lot id so that ids stay strictly increasing in parse order.
    #[must_use]
    pub fn lots_created(&self) -> u64 {
        self.created
    }

    /// Get the total units held across all open lots.
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.lots.iter().map(|lot| lot.quantity).sum()
    }

    /// Consume the ledger and return the remaining lots.
    #[must_use]
    pub fn into_lots(self) -> Vec<Lot> {
        self.lots
    }

    /// Record a buy transaction. `tx.side` must be [`Side::Buy`]; sales go
    /// through [`Ledger::consume`].
    ///
    /// A buy whose date differs from the current last lot's date (or that
    /// arrives into an empty ledger) opens a new lot carrying `proposed_id`.
    /// A buy on the same date as the last lot merges into it with a
    /// quantity-weighted average price; the lot keeps its id and date.
    ///
    /// Merge eligibility checks only the immediately preceding lot, so
    /// consecutive same-day buys coalesce transitively into one lot while a
    /// buy never merges into an earlier, non-adjacent lot.
    pub fn record_buy(&mut self, tx: &Transaction, proposed_id: u64) {
        debug_assert_eq!(tx.side, Side::Buy, "record_buy requires a buy transaction");
        match self.lots.last_mut() {
            Some(last) if last.date == tx.date => {
                let total = last.quantity + tx.quantity;
                if !total.is_zero() {
                    last.price =
                        (last.price * last.quantity + tx.price * tx.quantity) / total;
                }
                last.quantity = total;
            }
            _ => {
                self.lots
                    .push(Lot::new(proposed_id, tx.date.clone(), tx.price, tx.quantity));
                self.created += 1;
            }
        }
    }

    /// Consume `quantity` units from the open lots under `method`.
    ///
    /// Consumption is greedy against the method's ordering: FIFO walks the
    /// lots in ascending-id order, HIFO in descending-price order with ties
    /// broken toward the lower id. Fully-consumed lots are dropped.
    ///
    /// Availability is checked before anything is touched: on
    /// [`LedgerError::InsufficientLots`] the ledger is left exactly as it
    /// was.
    pub fn consume(
        &mut self,
        quantity: Decimal,
        method: SelectionMethod,
    ) -> Result<(), LedgerError> {
        if quantity <= Decimal::ZERO {
            return Ok(());
        }

        let available = self.total_quantity();
        if quantity > available {
            return Err(LedgerError::InsufficientLots {
                requested: quantity,
                available,
            });
        }

        let order: Vec<usize> = match method {
            SelectionMethod::Fifo => (0..self.lots.len()).collect(),
            SelectionMethod::Hifo => {
                let mut ranked: Vec<usize> = (0..self.lots.len()).collect();
                // Stable sort: equal prices keep ascending-id order.
                ranked.sort_by(|&a, &b| self.lots[b].price.cmp(&self.lots[a].price));
                ranked
            }
        };

        let mut remaining = quantity;
        for idx in order {
            if remaining.is_zero() {
                break;
            }
            let lot = &mut self.lots[idx];
            let take = remaining.min(lot.quantity);
            lot.quantity -= take;
            remaining -= take;
        }
        debug_assert!(remaining.is_zero());

        self.lots.retain(|lot| !lot.is_consumed());
        Ok(())
    }
}
