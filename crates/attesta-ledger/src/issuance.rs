//! # Issuance Engine
//!
//! Constructs certificate records under a presented issuing capability and
//! binds them irrevocably to their recipients.
//!
//! ## Authorization
//!
//! The engine performs the single authorization check of the issuance
//! path: the caller's address must equal the capability's bound
//! `issuer_address`. Holding a reference to the capability is necessary
//! but not sufficient; it must be used from the exact address it names.
//!
//! ## Batch Semantics
//!
//! A batch is all-or-nothing. Sequence lengths and every text field are
//! validated before the first record is constructed, so a failing batch
//! mints nothing. All records of one batch carry the identical
//! host-supplied issue date even though construction is sequential.

use attesta_core::{decode_text, Address, Timestamp};

use crate::authority::IssuerCap;
use crate::certificate::Certificate;
use crate::error::LedgerError;

/// Enforce the issuance authorization check.
///
/// # Errors
///
/// Returns [`LedgerError::NotAuthorized`] unless `caller` is the address
/// the capability was bound to at grant time.
pub(crate) fn authorize_issuer(caller: &Address, cap: &IssuerCap) -> Result<(), LedgerError> {
    if caller != cap.issuer_address() {
        return Err(LedgerError::NotAuthorized {
            caller: caller.clone(),
        });
    }
    Ok(())
}

/// Construct a single certificate record under an authorized capability.
///
/// Text fields arrive as raw bytes and are decoded here; content is
/// otherwise accepted verbatim. The record's `issuer` is copied from the
/// capability, never from the caller's claims.
#[allow(clippy::too_many_arguments)]
pub(crate) fn mint_certificate(
    caller: &Address,
    cap: &IssuerCap,
    recipient: Address,
    name: &[u8],
    description: &[u8],
    image_url: &[u8],
    certificate_type: &[u8],
    metadata: &[u8],
    issued_at: Timestamp,
) -> Result<Certificate, LedgerError> {
    authorize_issuer(caller, cap)?;

    Ok(Certificate::mint(
        decode_text("name", name)?,
        decode_text("description", description)?,
        decode_text("image_url", image_url)?,
        recipient,
        cap.issuer_address().clone(),
        issued_at,
        decode_text("certificate_type", certificate_type)?,
        decode_text("metadata", metadata)?,
    ))
}

/// Construct one record per recipient, sharing a single issue date.
///
/// Authorization is checked once up front. Every sequence must match
/// `recipients` in length and every field must decode before any record
/// is constructed.
#[allow(clippy::too_many_arguments)]
pub(crate) fn mint_certificate_batch(
    caller: &Address,
    cap: &IssuerCap,
    recipients: &[Address],
    names: &[Vec<u8>],
    descriptions: &[Vec<u8>],
    image_urls: &[Vec<u8>],
    certificate_types: &[Vec<u8>],
    metadatas: &[Vec<u8>],
    issued_at: Timestamp,
) -> Result<Vec<Certificate>, LedgerError> {
    authorize_issuer(caller, cap)?;

    let expected = recipients.len();
    check_len("names", expected, names.len())?;
    check_len("descriptions", expected, descriptions.len())?;
    check_len("image_urls", expected, image_urls.len())?;
    check_len("certificate_types", expected, certificate_types.len())?;
    check_len("metadatas", expected, metadatas.len())?;

    // Decode everything before constructing anything, so a malformed
    // field late in the batch cannot leave earlier records minted.
    let mut decoded = Vec::with_capacity(expected);
    for i in 0..expected {
        decoded.push((
            decode_text("name", &names[i])?,
            decode_text("description", &descriptions[i])?,
            decode_text("image_url", &image_urls[i])?,
            decode_text("certificate_type", &certificate_types[i])?,
            decode_text("metadata", &metadatas[i])?,
        ));
    }

    let issuer = cap.issuer_address().clone();
    let records = recipients
        .iter()
        .zip(decoded)
        .map(|(recipient, (name, description, image_url, certificate_type, metadata))| {
            Certificate::mint(
                name,
                description,
                image_url,
                recipient.clone(),
                issuer.clone(),
                issued_at,
                certificate_type,
                metadata,
            )
        })
        .collect();

    Ok(records)
}

/// Compare one batch sequence's length against the recipient count.
fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), LedgerError> {
    if actual != expected {
        return Err(LedgerError::InvalidInput {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::AuthorityRegistry;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    fn ts() -> Timestamp {
        Timestamp::parse("2026-03-01T09:30:00Z").unwrap()
    }

    /// Grant a capability bound to 0x15 and hand back the registry.
    fn registry_with_issuer() -> (AuthorityRegistry, attesta_core::IssuerCapId) {
        let mut reg = AuthorityRegistry::bootstrap(addr("0xad"));
        let admin_id = reg.admin_cap().id();
        let cap_id = reg
            .grant_issuer(&addr("0xad"), admin_id, "Acme U".into(), addr("0x15"))
            .unwrap()
            .id();
        (reg, cap_id)
    }

    // ── Single issuance ──────────────────────────────────────────────

    #[test]
    fn test_bound_address_can_mint() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        let cert = mint_certificate(
            &addr("0x15"),
            cap,
            addr("0xa1"),
            b"Distributed Systems",
            b"Completed with distinction",
            b"ipfs://QmcertImage",
            b"Diploma",
            b"{}",
            ts(),
        )
        .unwrap();

        assert_eq!(cert.issuer(), &addr("0x15"));
        assert_eq!(cert.recipient(), &addr("0xa1"));
        assert_eq!(cert.certificate_type(), "Diploma");
        assert_eq!(cert.issue_date(), ts());
    }

    #[test]
    fn test_other_address_cannot_mint_with_borrowed_cap() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        let result = mint_certificate(
            &addr("0x99"),
            cap,
            addr("0xa1"),
            b"n",
            b"d",
            b"i",
            b"t",
            b"m",
            ts(),
        );
        assert!(matches!(result, Err(LedgerError::NotAuthorized { .. })));
    }

    #[test]
    fn test_malformed_name_rejected() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        let result = mint_certificate(
            &addr("0x15"),
            cap,
            addr("0xa1"),
            &[0xff, 0xfe],
            b"d",
            b"i",
            b"t",
            b"m",
            ts(),
        );
        assert!(matches!(result, Err(LedgerError::MalformedText(_))));
    }

    // ── Batch issuance ───────────────────────────────────────────────

    fn texts(items: &[&str]) -> Vec<Vec<u8>> {
        items.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_batch_shares_issue_date() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        let recipients = vec![addr("0xa1"), addr("0xb2"), addr("0xc3")];
        let records = mint_certificate_batch(
            &addr("0x15"),
            cap,
            &recipients,
            &texts(&["n1", "n2", "n3"]),
            &texts(&["d1", "d2", "d3"]),
            &texts(&["i1", "i2", "i3"]),
            &texts(&["t1", "t2", "t3"]),
            &texts(&["m1", "m2", "m3"]),
            ts(),
        )
        .unwrap();

        assert_eq!(records.len(), 3);
        for (record, recipient) in records.iter().zip(&recipients) {
            assert_eq!(record.issue_date(), ts());
            assert_eq!(record.issuer(), &addr("0x15"));
            assert_eq!(record.recipient(), recipient);
        }
        // Distinct identities across the batch.
        assert_ne!(records[0].id(), records[1].id());
        assert_ne!(records[1].id(), records[2].id());
    }

    #[test]
    fn test_batch_length_mismatch_rejected() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        let result = mint_certificate_batch(
            &addr("0x15"),
            cap,
            &[addr("0xa1"), addr("0xb2")],
            &texts(&["n1"]),
            &texts(&["d1", "d2"]),
            &texts(&["i1", "i2"]),
            &texts(&["t1", "t2"]),
            &texts(&["m1", "m2"]),
            ts(),
        );
        match result.unwrap_err() {
            LedgerError::InvalidInput {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "names");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected InvalidInput, got: {other}"),
        }
    }

    #[test]
    fn test_batch_malformed_text_mints_nothing() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        let mut names = texts(&["n1", "n2"]);
        names[1] = vec![0xff, 0xfe];
        let result = mint_certificate_batch(
            &addr("0x15"),
            cap,
            &[addr("0xa1"), addr("0xb2")],
            &names,
            &texts(&["d1", "d2"]),
            &texts(&["i1", "i2"]),
            &texts(&["t1", "t2"]),
            &texts(&["m1", "m2"]),
            ts(),
        );
        assert!(matches!(result, Err(LedgerError::MalformedText(_))));
    }

    #[test]
    fn test_batch_authorization_checked_up_front() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        // Even a structurally invalid batch reports NotAuthorized first.
        let result = mint_certificate_batch(
            &addr("0x99"),
            cap,
            &[addr("0xa1")],
            &[],
            &[],
            &[],
            &[],
            &[],
            ts(),
        );
        assert!(matches!(result, Err(LedgerError::NotAuthorized { .. })));
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let (reg, cap_id) = registry_with_issuer();
        let cap = reg.issuer_cap(cap_id).unwrap();

        let records = mint_certificate_batch(
            &addr("0x15"),
            cap,
            &[],
            &[],
            &[],
            &[],
            &[],
            &[],
            ts(),
        )
        .unwrap();
        assert!(records.is_empty());
    }
}
