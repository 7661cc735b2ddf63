//! # attesta-ledger — Capability-Gated Certificate Issuance
//!
//! Implements the certificate ledger's authorization chain and record
//! lifecycle. One administrative capability, minted at bootstrap, grants
//! issuing capabilities; an issuing capability, used from the exact
//! address it was bound to, mints certificates; a certificate belongs to
//! its recipient until the recipient destroys it.
//!
//! ## Components
//!
//! - **Authority registry** (`authority.rs`): the admin capability and the
//!   set of issuing capabilities it has granted. Possession of a presented
//!   capability is checked on every use.
//!
//! - **Issuance engine** (`issuance.rs`): constructs records under the
//!   issuance authorization check (`caller == issuer_address`), singly or
//!   as an all-or-nothing batch sharing one issue date.
//!
//! - **Certificate store** (`store.rs`, `certificate.rs`): the minted
//!   records, their read-only accessors, issuer verification, and
//!   recipient-only destruction.
//!
//! - **Event log** (`event.rs`): append-only feed of grants, issuances,
//!   and destructions for off-ledger observers.
//!
//! - **Entry surface** (`ledger.rs`): the `Ledger` aggregate the host
//!   invokes, one synchronous all-or-nothing transition per call.
//!
//! ## Design
//!
//! Certificates are non-transferable because no transfer operation exists:
//! `recipient` is set at mint time and nothing on the public surface can
//! reassign it. Authorship is unforgeable the same way: `issuer` is copied
//! from the presented capability under the authorization check and never
//! writable afterwards.

pub mod authority;
pub mod certificate;
pub mod error;
pub mod event;
mod issuance;
pub mod ledger;
pub mod store;

// ─── Re-exports ─────────────────────────────────────────────────────

pub use authority::{AdminCap, AuthorityRegistry, IssuerCap};
pub use certificate::Certificate;
pub use error::LedgerError;
pub use event::{EventLog, LedgerEvent};
pub use ledger::Ledger;
pub use store::CertificateStore;
