//! Selection method determining how lots are matched when a sale consumes
//! them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a selector token names no known selection method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid algorithm (must be either \"fifo\" or \"hifo\"): {token}")]
pub struct UnknownMethodError {
    /// The selector token that failed to resolve.
    pub token: String,
}

/// How a sale chooses which open lots to consume, and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionMethod {
    /// First In, First Out. Earliest-acquired lots are consumed first.
    #[default]
    Fifo,
    /// Highest In, First Out. Highest-cost-basis lots are consumed first.
    Hifo,
}

impl FromStr for SelectionMethod {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "hifo" => Ok(Self::Hifo),
            _ => Err(UnknownMethodError {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "fifo"),
            Self::Hifo => write!(f, "hifo"),
        }
    }
}
