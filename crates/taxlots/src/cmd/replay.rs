//! Implementation of the `taxlots` command.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use taxlots_core::SelectionMethod;
use tracing::{debug, Level};

use crate::report;

/// Replay a chronological buy/sell transaction log from stdin and print the
/// remaining cost-basis tax lots.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Lot-selection method: "fifo" (earliest-acquired first) or "hifo"
    /// (highest cost basis first)
    #[arg(value_name = "METHOD")]
    pub method: SelectionMethod,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the usage hint on failure (just use the exit code)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Main entry point for the replay command.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            if !args.quiet {
                eprintln!();
                eprintln!("Example usage:");
                eprintln!(
                    "  echo -e '2021-01-01,buy,10000.00,1.00000000\\n2021-02-01,sell,20000.00,0.50000000' | taxlots fifo"
                );
            }
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let records = report::read_transaction_log(io::stdin().lock())
        .context("reading transaction log from stdin")?;
    debug!(records = records.len(), method = %args.method, "replaying transaction log");

    let lots = taxlots_replay::process(&records, args.method)?;
    debug!(lots = lots.len(), "replay complete");

    let mut stdout = io::stdout().lock();
    report::write_lots(&mut stdout, &lots).context("writing lot report")?;
    Ok(())
}
