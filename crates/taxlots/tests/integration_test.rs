//! End-to-end tests: raw input stream in, formatted report rows out.

use std::io::Cursor;
use taxlots::report::{read_transaction_log, write_lots};
use taxlots_replay::process_with_selector;

/// Run the full pipeline the binary runs: read until a blank line, replay
/// under the selector, format the surviving lots.
fn replay(input: &str, selector: &str) -> Result<String, String> {
    let records = read_transaction_log(Cursor::new(input)).map_err(|e| e.to_string())?;
    let lots = process_with_selector(&records, selector).map_err(|e| e.to_string())?;
    let mut out = Vec::new();
    write_lots(&mut out, &lots).map_err(|e| e.to_string())?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn fifo_partial_sale() {
    let out = replay(
        "2021-01-01,buy,10000.00,1.0\n2021-02-01,sell,20000.00,0.5\n",
        "fifo",
    )
    .unwrap();
    assert_eq!(out, "1,2021-01-01,10000.00,0.50000000\n");
}

#[test]
fn fifo_sale_spanning_two_lots() {
    let out = replay(
        "2021-01-01,buy,10000.00,1.0\n\
         2021-01-02,buy,20000.00,1.0\n\
         2021-02-01,sell,20000.00,1.5\n",
        "fifo",
    )
    .unwrap();
    assert_eq!(out, "2,2021-01-02,20000.00,0.50000000\n");
}

#[test]
fn hifo_sale_spanning_two_lots() {
    let out = replay(
        "2021-01-01,buy,10000.00,1.0\n\
         2021-01-02,buy,20000.00,1.0\n\
         2021-02-01,sell,20000.00,1.5\n",
        "hifo",
    )
    .unwrap();
    assert_eq!(out, "1,2021-01-01,10000.00,0.50000000\n");
}

#[test]
fn hifo_after_same_day_merge() {
    let out = replay(
        "2021-01-01,buy,10000.00,1.0\n\
         2021-01-01,buy,15000.00,1.0\n\
         2021-02-01,sell,20000.00,1.5\n",
        "hifo",
    )
    .unwrap();
    assert_eq!(out, "1,2021-01-01,12500.00,0.50000000\n");
}

#[test]
fn untouched_log_reports_every_lot_in_acquisition_order() {
    let out = replay(
        "2021-01-01,buy,10000.00,1.0\n\
         2021-01-02,buy,20000.00,2.0\n\
         2021-01-03,buy,15000.00,0.25\n",
        "fifo",
    )
    .unwrap();
    assert_eq!(
        out,
        "1,2021-01-01,10000.00,1.00000000\n\
         2,2021-01-02,20000.00,2.00000000\n\
         3,2021-01-03,15000.00,0.25000000\n"
    );
}

#[test]
fn records_after_a_blank_line_are_ignored() {
    let out = replay(
        "2021-01-01,buy,10000.00,1.0\n\n2021-02-01,sell,20000.00,5.0\n",
        "fifo",
    )
    .unwrap();
    assert_eq!(out, "1,2021-01-01,10000.00,1.00000000\n");
}

#[test]
fn oversized_sale_reports_insufficiency_and_no_rows() {
    let err = replay(
        "2021-01-01,buy,10000.00,2.0\n2021-02-01,sell,20000.00,5.0\n",
        "fifo",
    )
    .unwrap_err();
    assert!(err.contains("sale quantity exceeded total buy quantity"));
    assert!(err.contains("fifo"));
}

#[test]
fn malformed_record_reports_the_offending_line() {
    let err = replay("2021-01-01,buy,abc,1.0\n", "hifo").unwrap_err();
    assert!(err.contains("2021-01-01,buy,abc,1.0"));
    assert!(err.contains("price"));
}

#[test]
fn unknown_selector_is_rejected_before_any_record_is_read() {
    let err = replay("2021-01-01,buy,10000.00,1.0\n", "lifo").unwrap_err();
    assert!(err.contains("lifo"));
    assert!(err.contains("fifo"));
}
