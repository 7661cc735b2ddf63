//! # `attesta events` — Event Log Dump
//!
//! Prints the append-only event log as JSON lines, oldest first. This is
//! the observer surface: issuance activity can be followed here without
//! scanning record storage.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::snapshot;

/// Arguments for `attesta events`.
#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,
}

/// Print every event, one JSON object per line.
pub fn run(args: &EventsArgs) -> Result<()> {
    let ledger = snapshot::load(&args.ledger)?;
    for event in ledger.events() {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}
