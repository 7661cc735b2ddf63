//! # Ledger Entry Operations
//!
//! The host-facing surface: one `Ledger` value per deployment, holding the
//! authority registry, the certificate store, and the event log, with the
//! entry operations external callers invoke.
//!
//! Each operation is a synchronous state transition that either completes
//! or returns an error having changed nothing. Events are appended only
//! after the operation they describe has succeeded. The host identifies
//! the calling address and supplies the clock reading for issuing
//! operations; the ledger itself never reads a clock.

use serde::{Deserialize, Serialize};

use attesta_core::{Address, AdminCapId, CertificateId, IssuerCapId, Timestamp};

use crate::authority::{AdminCap, AuthorityRegistry, IssuerCap};
use crate::certificate::Certificate;
use crate::error::LedgerError;
use crate::event::{EventLog, LedgerEvent};
use crate::issuance;
use crate::store::CertificateStore;

/// A deployed certificate ledger.
///
/// Serializable as a whole: the host owns persistence and may snapshot and
/// reload the full state. The entry operations below are the only mutation
/// surface.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ledger {
    registry: AuthorityRegistry,
    store: CertificateStore,
    events: EventLog,
}

impl Ledger {
    /// Bring up a new ledger, minting the one administrative capability
    /// and assigning it to `deployer`.
    ///
    /// This is the only constructor and the only place an admin
    /// capability is ever created. A snapshot loaded from disk already
    /// contains its capability; nothing can create a second one.
    pub fn bootstrap(deployer: Address) -> Self {
        tracing::info!(deployer = %deployer, "ledger bootstrapped");
        Self {
            registry: AuthorityRegistry::bootstrap(deployer),
            store: CertificateStore::new(),
            events: EventLog::new(),
        }
    }

    // ── Read surface ─────────────────────────────────────────────────

    /// The administrative capability (read-only projection).
    pub fn admin_cap(&self) -> &AdminCap {
        self.registry.admin_cap()
    }

    /// Look up an issuing capability.
    pub fn issuer_cap(&self, id: IssuerCapId) -> Option<&IssuerCap> {
        self.registry.issuer_cap(id)
    }

    /// All active issuing capabilities.
    pub fn issuer_caps(&self) -> impl Iterator<Item = &IssuerCap> {
        self.registry.issuer_caps()
    }

    /// Look up a certificate record. Destroyed records do not resolve.
    pub fn certificate(&self, id: CertificateId) -> Option<&Certificate> {
        self.store.get(id)
    }

    /// All live certificate records.
    pub fn certificates(&self) -> impl Iterator<Item = &Certificate> {
        self.store.iter()
    }

    /// The append-only event log, oldest first.
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.as_slice()
    }

    /// Whether a certificate with `id` was issued by `expected_issuer`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCertificate`] if the record does not
    /// exist (never minted, or destroyed).
    pub fn verify_certificate(
        &self,
        id: CertificateId,
        expected_issuer: &Address,
    ) -> Result<bool, LedgerError> {
        let record = self
            .store
            .get(id)
            .ok_or(LedgerError::UnknownCertificate { id })?;
        Ok(record.verify_issuer(expected_issuer))
    }

    // ── Entry operations ─────────────────────────────────────────────

    /// Grant a new issuing capability, authorized by presenting the admin
    /// capability.
    ///
    /// The capability is bound to `issuer_address` regardless of who
    /// invoked the grant. Emits [`LedgerEvent::IssuerCreated`].
    pub fn create_issuer(
        &mut self,
        caller: &Address,
        admin_cap_id: AdminCapId,
        issuer_name: &[u8],
        issuer_address: Address,
    ) -> Result<IssuerCapId, LedgerError> {
        let name = attesta_core::decode_text("issuer_name", issuer_name)?;
        let cap = match self
            .registry
            .grant_issuer(caller, admin_cap_id, name, issuer_address)
        {
            Ok(cap) => cap,
            Err(err) => {
                tracing::warn!(caller = %caller, error = %err, "issuer grant rejected");
                return Err(err);
            }
        };

        let id = cap.id();
        let name = cap.issuer_name().to_owned();
        let address = cap.issuer_address().clone();
        tracing::info!(
            issuer_cap_id = %id,
            issuer_address = %address,
            issuer_name = %name,
            "issuer capability granted"
        );
        self.events.emit(LedgerEvent::IssuerCreated {
            issuer_cap_id: id,
            issuer_name: name,
            issuer_address: address,
        });
        Ok(id)
    }

    /// Mint one certificate to `recipient` under a presented issuing
    /// capability. Emits [`LedgerEvent::CertificateIssued`].
    #[allow(clippy::too_many_arguments)]
    pub fn issue_certificate(
        &mut self,
        caller: &Address,
        issuer_cap_id: IssuerCapId,
        recipient: Address,
        name: &[u8],
        description: &[u8],
        image_url: &[u8],
        certificate_type: &[u8],
        metadata: &[u8],
        issued_at: Timestamp,
    ) -> Result<CertificateId, LedgerError> {
        let cap = self.registry.resolve_issuer_cap(issuer_cap_id)?;
        let record = match issuance::mint_certificate(
            caller,
            cap,
            recipient,
            name,
            description,
            image_url,
            certificate_type,
            metadata,
            issued_at,
        ) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(caller = %caller, error = %err, "certificate issuance rejected");
                return Err(err);
            }
        };

        let id = self.record_issued(record);
        Ok(id)
    }

    /// Mint one certificate per recipient in a single all-or-nothing
    /// operation sharing one issue date. Emits one
    /// [`LedgerEvent::CertificateIssued`] per record.
    #[allow(clippy::too_many_arguments)]
    pub fn batch_issue_certificates(
        &mut self,
        caller: &Address,
        issuer_cap_id: IssuerCapId,
        recipients: &[Address],
        names: &[Vec<u8>],
        descriptions: &[Vec<u8>],
        image_urls: &[Vec<u8>],
        certificate_types: &[Vec<u8>],
        metadatas: &[Vec<u8>],
        issued_at: Timestamp,
    ) -> Result<Vec<CertificateId>, LedgerError> {
        let cap = self.registry.resolve_issuer_cap(issuer_cap_id)?;
        let records = match issuance::mint_certificate_batch(
            caller,
            cap,
            recipients,
            names,
            descriptions,
            image_urls,
            certificate_types,
            metadatas,
            issued_at,
        ) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(caller = %caller, error = %err, "batch issuance rejected");
                return Err(err);
            }
        };

        let count = records.len();
        let ids = records
            .into_iter()
            .map(|record| self.record_issued(record))
            .collect();
        tracing::info!(count, issuer_cap_id = %issuer_cap_id, "batch issuance complete");
        Ok(ids)
    }

    /// Irreversibly destroy a certificate, on the recipient's authority.
    /// Emits [`LedgerEvent::CertificateDestroyed`].
    pub fn destroy_certificate(
        &mut self,
        caller: &Address,
        id: CertificateId,
    ) -> Result<(), LedgerError> {
        let record = match self.store.destroy(caller, id) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(caller = %caller, certificate_id = %id, error = %err, "destroy rejected");
                return Err(err);
            }
        };

        tracing::info!(certificate_id = %id, recipient = %record.recipient(), "certificate destroyed");
        self.events.emit(LedgerEvent::CertificateDestroyed {
            certificate_id: id,
            recipient: record.recipient().clone(),
        });
        Ok(())
    }

    /// Store a minted record and emit its issuance event.
    fn record_issued(&mut self, record: Certificate) -> CertificateId {
        let id = record.id();
        tracing::info!(
            certificate_id = %id,
            recipient = %record.recipient(),
            issuer = %record.issuer(),
            certificate_type = %record.certificate_type(),
            "certificate issued"
        );
        self.events.emit(LedgerEvent::CertificateIssued {
            certificate_id: id,
            recipient: record.recipient().clone(),
            issuer: record.issuer().clone(),
            certificate_type: record.certificate_type().to_owned(),
            issue_date: record.issue_date(),
        });
        self.store.insert(record);
        id
    }
}
