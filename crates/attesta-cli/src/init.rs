//! # `attesta init` — Ledger Bootstrap
//!
//! Creates a new ledger snapshot with its one administrative capability,
//! owned by the deploying address. Runs once per snapshot; an existing
//! file is never overwritten.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use attesta_core::Address;
use attesta_ledger::Ledger;

use crate::snapshot;

/// Arguments for `attesta init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path for the new ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,

    /// Address that receives the administrative capability.
    #[arg(long, value_name = "ADDRESS")]
    pub admin: Address,
}

/// Bootstrap a ledger and write the initial snapshot.
pub fn run(args: &InitArgs) -> Result<()> {
    let ledger = Ledger::bootstrap(args.admin.clone());
    snapshot::create(&args.ledger, &ledger)?;

    println!("ledger initialized at {}", args.ledger.display());
    println!("admin capability {} owned by {}", ledger.admin_cap().id(), args.admin);
    Ok(())
}
