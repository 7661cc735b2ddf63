//! # Authority Registry
//!
//! Holds the single administrative capability and the set of issuing
//! capabilities it has granted. Leaf component of the authorization chain:
//! Admin grants Issuer, Issuer mints Certificate.
//!
//! ## Presentation Model
//!
//! Capabilities are owned objects. An entry operation "presents" one by
//! naming its identity, and only the object's current owner may use it.
//!
//! - The admin capability is owned by the deploying address, and the
//!   registry checks that ownership on every grant. The capability itself
//!   names no separate admin identity; possession is the whole proof.
//! - An issuing capability is owned by the address it was bound to at
//!   grant time (`issuer_address`), which may differ from whoever invoked
//!   the grant. The registry resolves presented issuing capabilities; the
//!   issuance engine performs the address check that makes one usable.
//!
//! There is no capability transfer, revocation, or admin rotation surface.
//! Loss of the admin capability's address is an unrecoverable operational
//! event.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use attesta_core::{Address, AdminCapId, IssuerCapId};

use crate::error::LedgerError;

/// The singleton administrative capability.
///
/// Created exactly once, when a ledger is bootstrapped, and owned by the
/// deploying address from then on. Not `Clone`; there is no second copy.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminCap {
    id: AdminCapId,
    owner: Address,
}

impl AdminCap {
    /// The capability's identity.
    pub fn id(&self) -> AdminCapId {
        self.id
    }

    /// The address holding administrative authority.
    pub fn owner(&self) -> &Address {
        &self.owner
    }
}

/// A delegated issuing capability.
///
/// Carries the issuer identity bound at grant time. Not `Clone`; the
/// registry holds the one instance.
#[derive(Debug, Serialize, Deserialize)]
pub struct IssuerCap {
    id: IssuerCapId,
    issuer_name: String,
    issuer_address: Address,
}

impl IssuerCap {
    /// The capability's identity.
    pub fn id(&self) -> IssuerCapId {
        self.id
    }

    /// The human-readable issuer name bound at grant time.
    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }

    /// The address this capability is bound to and owned by.
    pub fn issuer_address(&self) -> &Address {
        &self.issuer_address
    }
}

/// The registry of administrative and issuing capabilities.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorityRegistry {
    admin: AdminCap,
    issuers: BTreeMap<IssuerCapId, IssuerCap>,
}

impl AuthorityRegistry {
    /// Create the registry with its one admin capability, owned by
    /// `deployer`. Crate-internal: runs once per ledger, at bootstrap.
    pub(crate) fn bootstrap(deployer: Address) -> Self {
        Self {
            admin: AdminCap {
                id: AdminCapId::new(),
                owner: deployer,
            },
            issuers: BTreeMap::new(),
        }
    }

    /// The admin capability (read-only projection).
    pub fn admin_cap(&self) -> &AdminCap {
        &self.admin
    }

    /// Look up an issuing capability by identity.
    pub fn issuer_cap(&self, id: IssuerCapId) -> Option<&IssuerCap> {
        self.issuers.get(&id)
    }

    /// All active issuing capabilities, in identity order.
    pub fn issuer_caps(&self) -> impl Iterator<Item = &IssuerCap> {
        self.issuers.values()
    }

    /// Grant a new issuing capability, authorized by presentation of the
    /// admin capability.
    ///
    /// The new capability is bound to (and owned by) `issuer_address`,
    /// not the caller; grantor and grantee may differ. No uniqueness
    /// check: granting the same address twice yields two independent
    /// capabilities.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownCapability`] if `admin_cap_id` does not
    ///   name the admin capability.
    /// - [`LedgerError::NotAuthorized`] if the caller does not own it.
    pub(crate) fn grant_issuer(
        &mut self,
        caller: &Address,
        admin_cap_id: AdminCapId,
        issuer_name: String,
        issuer_address: Address,
    ) -> Result<&IssuerCap, LedgerError> {
        self.present_admin_cap(caller, admin_cap_id)?;

        let cap = IssuerCap {
            id: IssuerCapId::new(),
            issuer_name,
            issuer_address,
        };
        Ok(self.issuers.entry(cap.id).or_insert(cap))
    }

    /// Resolve the admin capability and enforce the possession rule.
    fn present_admin_cap(
        &self,
        caller: &Address,
        admin_cap_id: AdminCapId,
    ) -> Result<&AdminCap, LedgerError> {
        if admin_cap_id != self.admin.id {
            return Err(LedgerError::UnknownCapability {
                id: admin_cap_id.to_string(),
            });
        }
        if caller != &self.admin.owner {
            return Err(LedgerError::NotAuthorized {
                caller: caller.clone(),
            });
        }
        Ok(&self.admin)
    }

    /// Resolve an issuing capability presented by identity.
    ///
    /// Resolution only; the issuance engine performs the address check
    /// that makes a presented capability usable.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCapability`] if no capability with
    /// that identity exists.
    pub(crate) fn resolve_issuer_cap(&self, id: IssuerCapId) -> Result<&IssuerCap, LedgerError> {
        self.issuer_cap(id)
            .ok_or_else(|| LedgerError::UnknownCapability { id: id.to_string() })
    }
}
