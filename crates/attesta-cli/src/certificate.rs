//! # Certificate Commands
//!
//! Issuance (`issue`, `batch-issue`), inspection (`show`, `verify`), and
//! destruction (`destroy`). Issue dates default to the process clock and
//! can be pinned with `--issued-at` for reproducible runs.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use serde::Deserialize;

use attesta_core::{Address, CertificateId, IssuerCapId, Timestamp};
use attesta_ledger::Certificate;

use crate::snapshot;

/// Arguments for `attesta issue`.
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,

    /// Address invoking the issuance (must match the capability's bound
    /// address).
    #[arg(long = "as", value_name = "ADDRESS")]
    pub caller: Address,

    /// Identity of the issuing capability being presented.
    #[arg(long, value_name = "CAP-ID")]
    pub cap: IssuerCapId,

    /// Recipient the certificate is bound to.
    #[arg(long, value_name = "ADDRESS")]
    pub recipient: Address,

    /// Certificate name.
    #[arg(long, value_name = "TEXT")]
    pub name: String,

    /// Certificate description.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Image reference.
    #[arg(long, value_name = "URL", default_value = "")]
    pub image_url: String,

    /// Certificate-type label.
    #[arg(long, value_name = "TEXT")]
    pub certificate_type: String,

    /// Free-form metadata, stored uninterpreted.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub metadata: String,

    /// Issue date (RFC 3339, Z suffix). Defaults to the current time.
    #[arg(long, value_name = "TIMESTAMP")]
    pub issued_at: Option<String>,
}

/// Arguments for `attesta batch-issue`.
#[derive(Args, Debug)]
pub struct BatchIssueArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,

    /// Address invoking the issuance.
    #[arg(long = "as", value_name = "ADDRESS")]
    pub caller: Address,

    /// Identity of the issuing capability being presented.
    #[arg(long, value_name = "CAP-ID")]
    pub cap: IssuerCapId,

    /// Path to the batch manifest (JSON with parallel arrays).
    #[arg(long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Issue date shared by the whole batch. Defaults to the current time.
    #[arg(long, value_name = "TIMESTAMP")]
    pub issued_at: Option<String>,
}

/// Arguments for `attesta show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,

    /// Certificate identity.
    pub id: CertificateId,

    /// Print a single field instead of the whole record.
    #[arg(long, value_enum, value_name = "FIELD")]
    pub field: Option<Field>,

    /// Print the record's content fingerprint as well.
    #[arg(long)]
    pub digest: bool,
}

/// Arguments for `attesta verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,

    /// Certificate identity.
    pub id: CertificateId,

    /// Expected issuer address.
    #[arg(long, value_name = "ADDRESS")]
    pub issuer: Address,
}

/// Arguments for `attesta destroy`.
#[derive(Args, Debug)]
pub struct DestroyArgs {
    /// Path to the ledger snapshot.
    #[arg(long, value_name = "FILE")]
    pub ledger: PathBuf,

    /// Address invoking the destruction (must be the recipient).
    #[arg(long = "as", value_name = "ADDRESS")]
    pub caller: Address,

    /// Certificate identity.
    pub id: CertificateId,
}

/// One certificate field, for `show --field`.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Field {
    Name,
    Description,
    ImageUrl,
    Recipient,
    Issuer,
    IssueDate,
    CertificateType,
    Metadata,
}

/// Batch manifest: parallel arrays, one entry per certificate.
///
/// The arrays must agree on length; the ledger rejects the whole batch
/// otherwise.
#[derive(Deserialize, Debug)]
pub struct BatchManifest {
    /// Recipient addresses.
    pub recipients: Vec<Address>,
    /// Certificate names.
    pub names: Vec<String>,
    /// Certificate descriptions.
    pub descriptions: Vec<String>,
    /// Image references.
    pub image_urls: Vec<String>,
    /// Certificate-type labels.
    pub certificate_types: Vec<String>,
    /// Free-form metadata entries.
    pub metadatas: Vec<String>,
}

/// Resolve `--issued-at`, defaulting to the process clock.
fn clock_reading(issued_at: &Option<String>) -> Result<Timestamp> {
    match issued_at {
        Some(raw) => Timestamp::parse(raw).map_err(|e| anyhow!(e)),
        None => Ok(Timestamp::now()),
    }
}

fn as_byte_rows(items: &[String]) -> Vec<Vec<u8>> {
    items.iter().map(|s| s.as_bytes().to_vec()).collect()
}

/// Issue one certificate.
pub fn issue(args: &IssueArgs) -> Result<()> {
    let mut ledger = snapshot::load(&args.ledger)?;
    let issued_at = clock_reading(&args.issued_at)?;

    let id = ledger.issue_certificate(
        &args.caller,
        args.cap,
        args.recipient.clone(),
        args.name.as_bytes(),
        args.description.as_bytes(),
        args.image_url.as_bytes(),
        args.certificate_type.as_bytes(),
        args.metadata.as_bytes(),
        issued_at,
    )?;
    snapshot::save(&args.ledger, &ledger)?;

    println!("certificate {id} issued to {}", args.recipient);
    Ok(())
}

/// Issue a batch of certificates from a manifest file.
pub fn batch_issue(args: &BatchIssueArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("failed to read manifest {}", args.manifest.display()))?;
    let manifest: BatchManifest = serde_json::from_str(&raw)
        .with_context(|| format!("manifest {} is not valid", args.manifest.display()))?;

    let mut ledger = snapshot::load(&args.ledger)?;
    let issued_at = clock_reading(&args.issued_at)?;

    let ids = ledger.batch_issue_certificates(
        &args.caller,
        args.cap,
        &manifest.recipients,
        &as_byte_rows(&manifest.names),
        &as_byte_rows(&manifest.descriptions),
        &as_byte_rows(&manifest.image_urls),
        &as_byte_rows(&manifest.certificate_types),
        &as_byte_rows(&manifest.metadatas),
        issued_at,
    )?;
    snapshot::save(&args.ledger, &ledger)?;

    println!("{} certificates issued at {issued_at}", ids.len());
    for id in ids {
        println!("{id}");
    }
    Ok(())
}

/// Print a certificate record, one field of it, or its fingerprint.
pub fn show(args: &ShowArgs) -> Result<()> {
    let ledger = snapshot::load(&args.ledger)?;
    let cert = ledger
        .certificate(args.id)
        .ok_or_else(|| anyhow!("unknown certificate: {}", args.id))?;

    match args.field {
        Some(field) => println!("{}", field_value(cert, field)),
        None => println!("{}", serde_json::to_string_pretty(cert)?),
    }
    if args.digest {
        println!("{}", cert.content_digest()?);
    }
    Ok(())
}

/// Check a certificate's issuer and print the result.
pub fn verify(args: &VerifyArgs) -> Result<()> {
    let ledger = snapshot::load(&args.ledger)?;
    let verified = ledger.verify_certificate(args.id, &args.issuer)?;
    println!("{verified}");
    Ok(())
}

/// Destroy a certificate as its recipient.
pub fn destroy(args: &DestroyArgs) -> Result<()> {
    let mut ledger = snapshot::load(&args.ledger)?;
    ledger.destroy_certificate(&args.caller, args.id)?;
    snapshot::save(&args.ledger, &ledger)?;

    println!("certificate {} destroyed", args.id);
    Ok(())
}

fn field_value(cert: &Certificate, field: Field) -> String {
    match field {
        Field::Name => cert.name().to_owned(),
        Field::Description => cert.description().to_owned(),
        Field::ImageUrl => cert.image_url().to_owned(),
        Field::Recipient => cert.recipient().to_string(),
        Field::Issuer => cert.issuer().to_string(),
        Field::IssueDate => cert.issue_date().to_string(),
        Field::CertificateType => cert.certificate_type().to_owned(),
        Field::Metadata => cert.metadata().to_owned(),
    }
}
