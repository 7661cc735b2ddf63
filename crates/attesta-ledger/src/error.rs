//! # Ledger Errors
//!
//! The error surface of the entry operations. `NotAuthorized` is the one
//! error the authorization chain itself produces; the others report bad
//! inputs (`InvalidInput`, `MalformedText`) or references to objects that
//! do not exist (`UnknownCapability`, `UnknownCertificate`).
//!
//! Every error aborts the enclosing operation with no state change; there
//! is no partial success.

use thiserror::Error;

use attesta_core::{Address, CertificateId, ValidationError};

/// Errors returned by ledger entry operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The caller may not perform this operation: a presented capability
    /// is bound to a different address, or a certificate belongs to
    /// someone else.
    #[error("caller {caller} is not authorized for this operation")]
    NotAuthorized {
        /// The address that attempted the operation.
        caller: Address,
    },

    /// Batch input sequences disagree on length.
    #[error("batch input length mismatch: {field} has {actual} entries, expected {expected}")]
    InvalidInput {
        /// The sequence whose length diverges from `recipients`.
        field: &'static str,
        /// Expected entry count (the length of `recipients`).
        expected: usize,
        /// Actual entry count.
        actual: usize,
    },

    /// A text field could not be decoded as UTF-8.
    #[error("malformed text: {0}")]
    MalformedText(#[from] ValidationError),

    /// No capability with the presented identity exists.
    #[error("unknown capability: {id}")]
    UnknownCapability {
        /// The identity that failed to resolve.
        id: String,
    },

    /// No certificate with the given identity exists (never minted, or
    /// already destroyed).
    #[error("unknown certificate: {id}")]
    UnknownCertificate {
        /// The identity that failed to resolve.
        id: CertificateId,
    },
}
