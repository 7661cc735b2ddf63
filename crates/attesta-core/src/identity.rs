//! # Identity Newtypes
//!
//! Domain-primitive newtypes for every identifier in the ledger. Each
//! identifier is a distinct type: you cannot pass an [`IssuerCapId`] where
//! a [`CertificateId`] is expected, and an [`Address`] is never confused
//! with an object identity.
//!
//! ## Validation
//!
//! [`Address`] validates its format at construction time and normalizes to
//! lowercase, so equality checks never depend on the caller's casing. The
//! UUID-based object identities ([`AdminCapId`], [`IssuerCapId`],
//! [`CertificateId`]) are always valid by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time, not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Helper macro for the UUID-based object identities. They share the same
/// impl surface; only the type name differs.
macro_rules! uuid_identity {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $ty(Uuid);

        impl $ty {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_identity! {
    /// Identity of the one administrative capability created at bootstrap.
    AdminCapId
}

uuid_identity! {
    /// Identity of a delegated issuing capability.
    IssuerCapId
}

uuid_identity! {
    /// Identity of an issued certificate record.
    CertificateId
}

/// An account address: the unit of ownership and authorization.
///
/// Every owned object in the ledger (capability or certificate) belongs to
/// exactly one address at a time, and entry operations identify their
/// caller by address.
///
/// # Format
///
/// `0x` followed by 1 to 64 hex digits. Stored lowercase, so two spellings
/// of the same address always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Address(String);

impl_validating_deserialize!(Address);

impl Address {
    /// Create an address from a string, validating and normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] if the string is not
    /// `0x`-prefixed hex of at most 64 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let hex = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) if !hex.is_empty()
                && hex.len() <= 64
                && hex.chars().all(|c| c.is_ascii_hexdigit()) =>
            {
                hex
            }
            _ => return Err(ValidationError::InvalidAddress(s)),
        };
        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }

    /// Access the normalized address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
