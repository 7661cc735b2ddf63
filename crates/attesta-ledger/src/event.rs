//! # Ledger Event Log
//!
//! Append-only record of every state-changing operation, the mechanism
//! for observers to track issuance without scanning record storage.
//!
//! Events are emitted after the operation they describe has fully
//! succeeded; a failed operation emits nothing. The log offers no removal
//! or mutation surface, only append and read.

use serde::{Deserialize, Serialize};

use attesta_core::{Address, CertificateId, IssuerCapId, Timestamp};

/// An entry in the ledger's external event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A new issuing capability was granted.
    IssuerCreated {
        /// Identity of the new capability.
        issuer_cap_id: IssuerCapId,
        /// Human-readable issuer name bound at grant time.
        issuer_name: String,
        /// The address the capability is bound to.
        issuer_address: Address,
    },

    /// A certificate was minted to a recipient.
    CertificateIssued {
        /// Identity of the new record.
        certificate_id: CertificateId,
        /// The address the record was transferred to.
        recipient: Address,
        /// The issuing address, as bound into the record.
        issuer: Address,
        /// The certificate-type label.
        certificate_type: String,
        /// The host-supplied issue date.
        issue_date: Timestamp,
    },

    /// A certificate was destroyed by its recipient.
    CertificateDestroyed {
        /// Identity of the destroyed record.
        certificate_id: CertificateId,
        /// The recipient that destroyed it.
        recipient: Address,
    },
}

/// The append-only event log.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LedgerEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Crate-internal: only entry operations emit.
    pub(crate) fn emit(&mut self, event: LedgerEvent) {
        self.entries.push(event);
    }

    /// All events, oldest first.
    pub fn as_slice(&self) -> &[LedgerEvent] {
        &self.entries
    }

    /// Number of events emitted so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no events have been emitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    #[test]
    fn test_emit_appends_in_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.emit(LedgerEvent::IssuerCreated {
            issuer_cap_id: IssuerCapId::new(),
            issuer_name: "Acme U".to_string(),
            issuer_address: addr("0x11"),
        });
        log.emit(LedgerEvent::CertificateDestroyed {
            certificate_id: CertificateId::new(),
            recipient: addr("0x22"),
        });

        assert_eq!(log.len(), 2);
        assert!(matches!(log.as_slice()[0], LedgerEvent::IssuerCreated { .. }));
        assert!(matches!(
            log.as_slice()[1],
            LedgerEvent::CertificateDestroyed { .. }
        ));
    }

    #[test]
    fn test_event_serialization_tags() {
        let event = LedgerEvent::CertificateIssued {
            certificate_id: CertificateId::new(),
            recipient: addr("0xaa"),
            issuer: addr("0xbb"),
            certificate_type: "Diploma".to_string(),
            issue_date: Timestamp::parse("2026-03-01T09:30:00Z").unwrap(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "certificate_issued");
        assert_eq!(json["certificate_type"], "Diploma");
    }
}
