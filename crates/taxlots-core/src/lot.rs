//! Lot type representing an open acquisition with a remaining quantity.
//!
//! A [`Lot`] is created by a buy transaction and carries the cost basis used
//! for capital-gains reporting. Sales shrink a lot's quantity; a lot that
//! reaches exactly zero is dropped from the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The side of a transaction: an acquisition or a disposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// An acquisition; creates or extends a lot.
    Buy,
    /// A disposal; consumes open lots.
    Sell,
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(format!("unknown side: {s}")),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// An open, unconsumed acquisition record.
///
/// The `id` is assigned at parse time as one past the number of lots created
/// so far. It is strictly increasing in parse order and is never reassigned
/// when lots merge or shrink; it ties a surviving lot back to its
/// chronological position in the input.
///
/// The `date` is an opaque token. The ledger compares dates only for
/// equality (the same-day merge test) and never interprets them as calendar
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    /// Chronological lot number, starting at 1.
    pub id: u64,
    /// Acquisition date token.
    pub date: String,
    /// Cost basis per unit.
    pub price: Decimal,
    /// Remaining units.
    pub quantity: Decimal,
    /// The side of the transaction that created this lot.
    pub side: Side,
}

impl Lot {
    /// Create a new lot.
    pub fn new(id: u64, date: impl Into<String>, price: Decimal, quantity: Decimal) -> Self {
        Self {
            id,
            date: date.into(),
            price,
            quantity,
            side: Side::Buy,
        }
    }

    /// Check whether this lot has been fully consumed.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.quantity.is_zero()
    }
}

impl fmt::Display for Lot {
    /// Renders the report row: id, date, price to 2 decimal places,
    /// quantity to 8 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Precision formatting on Decimal truncates; round first so a
        // repeating merged price lands on the nearest representable row.
        write!(
            f,
            "{},{},{:.2},{:.8}",
            self.id,
            self.date,
            self.price.round_dp(2),
            self.quantity.round_dp(8)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
        assert_eq!("Buy".parse::<Side>().unwrap(), Side::Buy);
        assert!("hold".parse::<Side>().is_err());
    }

    #[test]
    fn lot_row_formats_prices_and_quantities() {
        let lot = Lot::new(1, "2021-01-01", dec!(10000), dec!(0.5));
        assert_eq!(lot.to_string(), "1,2021-01-01,10000.00,0.50000000");
    }

    #[test]
    fn lot_row_rounds_to_fixed_places() {
        let lot = Lot::new(3, "2021-06-15", dec!(12500.006), dec!(1.123456789));
        assert_eq!(lot.to_string(), "3,2021-06-15,12500.01,1.12345679");
    }

    #[test]
    fn lot_row_rounds_repeating_price_expansions() {
        // 500/3 has no finite decimal expansion; the row must round, not
        // truncate.
        let lot = Lot::new(1, "2021-01-01", dec!(500) / dec!(3), dec!(3));
        assert_eq!(lot.to_string(), "1,2021-01-01,166.67,3.00000000");
    }
}
