//! # Issuer Commands
//!
//! `attesta grant` presents the administrative capability to create a new
//! issuing capability; `attesta issuers` lists the registry.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use attesta_core::{Address, AdminCapId};

use crate::snapshot;

/// Arguments for `attesta grant`.
#[derive(Args, Debug)]
pub struct GrantArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,

    /// Address invoking the grant (must own the admin capability).
    #[arg(long = "as", value_name = "ADDRESS")]
    pub caller: Address,

    /// Identity of the admin capability being presented.
    #[arg(long, value_name = "CAP-ID")]
    pub cap: AdminCapId,

    /// Human-readable issuer name to bind into the capability.
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Address the new capability is bound to and owned by.
    #[arg(long, value_name = "ADDRESS")]
    pub issuer: Address,
}

/// Arguments for `attesta issuers`.
#[derive(Args, Debug)]
pub struct IssuersArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,
}

/// Grant a new issuing capability.
pub fn grant(args: &GrantArgs) -> Result<()> {
    let mut ledger = snapshot::load(&args.ledger)?;

    let cap_id = ledger.create_issuer(
        &args.caller,
        args.cap,
        args.name.as_bytes(),
        args.issuer.clone(),
    )?;
    snapshot::save(&args.ledger, &ledger)?;

    println!("issuer capability {cap_id} granted to {}", args.issuer);
    Ok(())
}

/// List the admin capability and every issuing capability.
pub fn list(args: &IssuersArgs) -> Result<()> {
    let ledger = snapshot::load(&args.ledger)?;

    let admin = ledger.admin_cap();
    println!("admin {} owner {}", admin.id(), admin.owner());
    for cap in ledger.issuer_caps() {
        println!(
            "issuer {} name {:?} address {}",
            cap.id(),
            cap.issuer_name(),
            cap.issuer_address()
        );
    }
    Ok(())
}
