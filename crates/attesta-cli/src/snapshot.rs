//! # Ledger Snapshot I/O
//!
//! Load and save the ledger state file. The snapshot is the host's
//! persistence provision: pretty-printed JSON of the entire `Ledger`,
//! rewritten in full after every successful operation.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use attesta_ledger::Ledger;

/// Load a ledger snapshot from `path`.
pub fn load(path: &Path) -> Result<Ledger> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read ledger snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("ledger snapshot {} is not valid", path.display()))
}

/// Save a ledger snapshot to `path`, replacing any previous contents.
pub fn save(path: &Path, ledger: &Ledger) -> Result<()> {
    let raw = serde_json::to_string_pretty(ledger).context("failed to serialize ledger")?;
    fs::write(path, raw)
        .with_context(|| format!("failed to write ledger snapshot {}", path.display()))
}

/// Save a brand-new snapshot, refusing to clobber an existing one.
pub fn create(path: &Path, ledger: &Ledger) -> Result<()> {
    if path.exists() {
        bail!("ledger snapshot {} already exists", path.display());
    }
    save(path, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attesta_core::Address;

    #[test]
    fn test_create_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let ledger = Ledger::bootstrap(Address::new("0xad").unwrap());
        create(&path, &ledger).unwrap();

        let restored = load(&path).unwrap();
        assert_eq!(restored.admin_cap().owner().as_str(), "0xad");
    }

    #[test]
    fn test_create_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let ledger = Ledger::bootstrap(Address::new("0xad").unwrap());
        create(&path, &ledger).unwrap();
        assert!(create(&path, &ledger).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json")).is_err());
    }
}
