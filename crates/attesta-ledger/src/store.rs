//! # Certificate Store
//!
//! The set of issued certificate records and the read and destroy
//! operations defined over them. The issuance engine is the only producer
//! of entries; the recipient is the only party that can remove one.
//!
//! A certificate has exactly two lifecycle points: minted (the only entry
//! state) and destroyed (terminal, removal from the store). There is no
//! transfer transition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use attesta_core::{Address, CertificateId};

use crate::certificate::Certificate;
use crate::error::LedgerError;

/// Storage for minted certificates, keyed by record identity.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CertificateStore {
    records: BTreeMap<CertificateId, Certificate>,
}

impl CertificateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly minted record. Crate-internal: only the issuance
    /// engine produces entries.
    pub(crate) fn insert(&mut self, certificate: Certificate) {
        self.records.insert(certificate.id(), certificate);
    }

    /// Look up a record by identity. Destroyed records are gone; they do
    /// not resolve.
    pub fn get(&self, id: CertificateId) -> Option<&Certificate> {
        self.records.get(&id)
    }

    /// All records, in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &Certificate> {
        self.records.values()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Irreversibly remove a record, on the recipient's authority.
    ///
    /// Returns the removed record so the caller can emit its destruction
    /// event.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownCertificate`] if no record with `id`
    ///   exists (never minted, or already destroyed).
    /// - [`LedgerError::NotAuthorized`] if `caller` is not the record's
    ///   recipient; the record persists unchanged.
    pub(crate) fn destroy(
        &mut self,
        caller: &Address,
        id: CertificateId,
    ) -> Result<Certificate, LedgerError> {
        let record = self
            .records
            .get(&id)
            .ok_or(LedgerError::UnknownCertificate { id })?;
        if caller != record.recipient() {
            return Err(LedgerError::NotAuthorized {
                caller: caller.clone(),
            });
        }
        // Checked above; remove cannot miss.
        self.records
            .remove(&id)
            .ok_or(LedgerError::UnknownCertificate { id })
    }
}
