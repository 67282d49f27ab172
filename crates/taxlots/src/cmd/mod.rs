//! Command implementations for the CLI.
//!
//! The full implementation lives here; the binary under `src/bin/` is a
//! thin wrapper.

pub mod replay;
