//! Line-oriented input and output for the replay command.

use std::io::{self, BufRead, Write};
use taxlots_core::Lot;

/// Read raw transaction records, one per line, stopping at the first blank
/// line or end of input.
pub fn read_transaction_log<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        records.push(line);
    }
    Ok(records)
}

/// Write one report row per remaining lot:
/// `<id>,<date>,<price .2>,<quantity .8>`.
pub fn write_lots<W: Write>(writer: &mut W, lots: &[Lot]) -> io::Result<()> {
    for lot in lots {
        writeln!(writer, "{lot}")?;
    }
    Ok(())
}
