//! # attesta-core — Foundational Types for the Attesta Ledger
//!
//! This crate is the bedrock of the Attesta certificate ledger. It defines
//! the type-system primitives every other crate in the workspace builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address`, `AdminCapId`,
//!    `IssuerCapId`, `CertificateId` are all distinct types with validated
//!    constructors. No bare strings for identifiers.
//!
//! 2. **`CanonicalBytes` newtype.** All record-fingerprint computation flows
//!    through `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for
//!    digests, ever. Two hosts fingerprinting the same record always produce
//!    the same bytes.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. Issue dates are supplied by the host
//!    clock once per entry operation.
//!
//! 4. **Text fields decoded at the boundary.** Entry operations accept raw
//!    byte sequences; `text::decode_text()` is the single place invalid
//!    UTF-8 is rejected.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `attesta-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public record types derive `Debug` and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;
pub mod text;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, ValidationError};
pub use identity::{Address, AdminCapId, CertificateId, IssuerCapId};
pub use temporal::Timestamp;
pub use text::decode_text;
