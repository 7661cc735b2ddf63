//! # Text Field Decoding
//!
//! Entry operations accept their text fields (names, descriptions, image
//! references, type labels, metadata) as raw byte sequences and store them
//! as text. This module is the single place those bytes are decoded.
//!
//! No further validation happens here: empty strings are legal, metadata
//! is opaque (callers may structure it as JSON or anything else), and the
//! ledger never inspects field content.

use crate::error::ValidationError;

/// Decode a raw byte field as UTF-8 text.
///
/// `field` names the offending field in the error, so a failed batch
/// points at the input that broke it.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedText`] if `raw` is not valid UTF-8.
pub fn decode_text(field: &'static str, raw: &[u8]) -> Result<String, ValidationError> {
    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|source| ValidationError::MalformedText { field, source })
}
