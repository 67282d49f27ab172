//! taxlots - replay a transaction log and report remaining tax lots.
//!
//! This crate is the CLI shell around `taxlots-replay`: it reads raw
//! transaction records from a line-oriented input stream, replays them under
//! the selected lot-selection method, and prints one report row per
//! remaining lot.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;
