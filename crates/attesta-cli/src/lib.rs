//! # attesta-cli — Host Surface for the Certificate Ledger
//!
//! Handler modules for the `attesta` binary. The CLI plays the host role:
//! it owns persistence (a JSON snapshot of the whole ledger), identifies
//! the calling address for each operation (`--as`), and supplies the
//! clock reading for issuing operations.
//!
//! One process invocation is one transaction: load the snapshot, run a
//! single entry operation, save the snapshot back. A failed operation
//! leaves the snapshot untouched.

pub mod certificate;
pub mod events;
pub mod init;
pub mod issuer;
pub mod snapshot;
