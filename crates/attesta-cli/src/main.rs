//! # attesta CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Attesta — capability-gated certificate ledger host.
///
/// Bootstraps ledger snapshots, grants issuing capabilities, issues and
/// verifies non-transferable certificates, and inspects the event log.
#[derive(Parser, Debug)]
#[command(name = "attesta", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Bootstrap a new ledger snapshot with its admin capability.
    Init(attesta_cli::init::InitArgs),
    /// Grant an issuing capability (admin only).
    Grant(attesta_cli::issuer::GrantArgs),
    /// List the admin capability and all issuing capabilities.
    Issuers(attesta_cli::issuer::IssuersArgs),
    /// Issue one certificate.
    Issue(attesta_cli::certificate::IssueArgs),
    /// Issue a batch of certificates from a manifest file.
    BatchIssue(attesta_cli::certificate::BatchIssueArgs),
    /// Print a certificate record or one of its fields.
    Show(attesta_cli::certificate::ShowArgs),
    /// Check whether a certificate was issued by an address.
    Verify(attesta_cli::certificate::VerifyArgs),
    /// Destroy a certificate (recipient only).
    Destroy(attesta_cli::certificate::DestroyArgs),
    /// Dump the event log as JSON lines.
    Events(attesta_cli::events::EventsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => attesta_cli::init::run(&args),
        Commands::Grant(args) => attesta_cli::issuer::grant(&args),
        Commands::Issuers(args) => attesta_cli::issuer::list(&args),
        Commands::Issue(args) => attesta_cli::certificate::issue(&args),
        Commands::BatchIssue(args) => attesta_cli::certificate::batch_issue(&args),
        Commands::Show(args) => attesta_cli::certificate::show(&args),
        Commands::Verify(args) => attesta_cli::certificate::verify(&args),
        Commands::Destroy(args) => attesta_cli::certificate::destroy(&args),
        Commands::Events(args) => attesta_cli::events::run(&args),
    }
}
