//! # Certificate Records
//!
//! The certificate record: an immutable-after-creation data object bound
//! permanently to its recipient.
//!
//! ## Invariants
//!
//! - `issuer` equals the bound address of the capability used at minting
//!   and never changes afterwards. That one field, set under the issuance
//!   authorization check, is the entire authenticity guarantee.
//! - `recipient` is set at mint time. No operation anywhere on the public
//!   surface reassigns it; non-transferability is the absence of a
//!   transfer entry point, not a flag.
//!
//! Records are constructed only by the issuance engine. All field access
//! goes through borrowing accessors; the struct exposes no mutable
//! surface.

use serde::{Deserialize, Serialize};

use attesta_core::{
    sha256_digest, Address, CanonicalBytes, CanonicalizationError, CertificateId, ContentDigest,
    Timestamp,
};

/// One issued certificate.
///
/// Field content is opaque to the ledger: names, descriptions, image
/// references and metadata are stored verbatim and never parsed or
/// schema-checked. `metadata` in particular is free-form text that callers
/// may structure as JSON or anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    id: CertificateId,
    name: String,
    description: String,
    image_url: String,
    recipient: Address,
    issuer: Address,
    issue_date: Timestamp,
    certificate_type: String,
    metadata: String,
}

impl Certificate {
    /// Construct a minted record. Crate-internal: the issuance engine is
    /// the only producer of certificates.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn mint(
        name: String,
        description: String,
        image_url: String,
        recipient: Address,
        issuer: Address,
        issue_date: Timestamp,
        certificate_type: String,
        metadata: String,
    ) -> Self {
        Self {
            id: CertificateId::new(),
            name,
            description,
            image_url,
            recipient,
            issuer,
            issue_date,
            certificate_type,
            metadata,
        }
    }

    /// The record's unique identity.
    pub fn id(&self) -> CertificateId {
        self.id
    }

    /// The certificate name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The certificate description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The image reference.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// The address the certificate is bound to.
    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    /// The address that issued the certificate.
    pub fn issuer(&self) -> &Address {
        &self.issuer
    }

    /// The host-supplied issue date.
    pub fn issue_date(&self) -> Timestamp {
        self.issue_date
    }

    /// The certificate-type label.
    pub fn certificate_type(&self) -> &str {
        &self.certificate_type
    }

    /// The free-form metadata, uninterpreted.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Whether this certificate was issued by `expected_issuer`.
    ///
    /// A pure equality check against the `issuer` field. Because that
    /// field was set once, under the issuance authorization check, and is
    /// immutable, this is the system's authenticity verification.
    pub fn verify_issuer(&self, expected_issuer: &Address) -> bool {
        &self.issuer == expected_issuer
    }

    /// The record's content fingerprint: SHA-256 over its canonical (JCS)
    /// serialization.
    ///
    /// Two observers holding the same record always derive the same
    /// fingerprint; any divergence means the content differs.
    pub fn content_digest(&self) -> Result<ContentDigest, CanonicalizationError> {
        Ok(sha256_digest(&CanonicalBytes::new(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    fn sample() -> Certificate {
        Certificate::mint(
            "Distributed Systems".to_string(),
            "Completed with distinction".to_string(),
            "ipfs://QmcertImage".to_string(),
            addr("0x2ec0"),
            addr("0x155e1"),
            Timestamp::parse("2026-03-01T09:30:00Z").unwrap(),
            "Diploma".to_string(),
            r#"{"gpa":"3.9"}"#.to_string(),
        )
    }

    #[test]
    fn test_accessors_return_mint_inputs() {
        let cert = sample();
        assert_eq!(cert.name(), "Distributed Systems");
        assert_eq!(cert.description(), "Completed with distinction");
        assert_eq!(cert.image_url(), "ipfs://QmcertImage");
        assert_eq!(cert.recipient(), &addr("0x2ec0"));
        assert_eq!(cert.issuer(), &addr("0x155e1"));
        assert_eq!(cert.issue_date().to_rfc3339z(), "2026-03-01T09:30:00Z");
        assert_eq!(cert.certificate_type(), "Diploma");
        assert_eq!(cert.metadata(), r#"{"gpa":"3.9"}"#);
    }

    #[test]
    fn test_metadata_is_not_parsed() {
        let cert = Certificate::mint(
            "n".into(),
            "d".into(),
            "i".into(),
            addr("0x1"),
            addr("0x2"),
            Timestamp::parse("2026-03-01T09:30:00Z").unwrap(),
            "t".into(),
            "{not json at all".into(),
        );
        assert_eq!(cert.metadata(), "{not json at all");
    }

    #[test]
    fn test_verify_issuer() {
        let cert = sample();
        assert!(cert.verify_issuer(&addr("0x155e1")));
        assert!(!cert.verify_issuer(&addr("0x2ec0")));
        assert!(!cert.verify_issuer(&addr("0xdead")));
    }

    #[test]
    fn test_distinct_identities() {
        assert_ne!(sample().id(), sample().id());
    }

    #[test]
    fn test_content_digest_stable_across_clones() {
        let cert = sample();
        let copy = cert.clone();
        assert_eq!(
            cert.content_digest().unwrap(),
            copy.content_digest().unwrap()
        );
    }

    #[test]
    fn test_content_digest_differs_between_records() {
        // Same fields, different ids: fingerprints must differ.
        let a = sample();
        let b = sample();
        assert_ne!(a.content_digest().unwrap(), b.content_digest().unwrap());
    }

    #[test]
    fn test_serde_roundtrip() {
        let cert = sample();
        let json = serde_json::to_string(&cert).unwrap();
        let parsed: Certificate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cert);
    }
}
