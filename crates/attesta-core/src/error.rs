//! # Error Types
//!
//! Validation and canonicalization errors for the foundational types.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Ledger-level authorization errors live in
//! `attesta-ledger`; this crate only reports problems with the inputs
//! themselves.

use thiserror::Error;

/// Error constructing or decoding a foundational value.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The string is not a well-formed account address.
    #[error("invalid address {0:?}: expected 0x-prefixed hex, at most 64 hex digits")]
    InvalidAddress(String),

    /// A text field contained bytes that are not valid UTF-8.
    #[error("field {field:?} is not valid UTF-8")]
    MalformedText {
        /// Name of the offending field.
        field: &'static str,
        /// The underlying decode failure.
        #[source]
        source: std::str::Utf8Error,
    },

    /// The string is not a valid UTC timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// They have non-deterministic JCS serialization edge cases.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
