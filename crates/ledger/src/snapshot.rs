//! Snapshot persistence for a ledger.
//!
//! The ledger itself never touches a storage medium: the host loads a
//! [`Snapshot`] at startup and saves one after each successful mutation.
//! Storage failures are reported as [`LedgerError::Storage`] and leave the
//! in-memory ledger authoritative until the next successful save.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{BudgetSettings, Expense, LedgerError, Wallet};

/// Serialized state of a ledger: wallet, expenses, budget settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub wallet: Wallet,
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budget_settings: BudgetSettings,
}

/// Durable medium for ledger snapshots.
pub trait SnapshotStore: Send + Sync {
    /// Loads the last saved snapshot, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Snapshot>, LedgerError>;

    /// Persists a snapshot, replacing any previous one.
    fn save(&self, snapshot: &Snapshot) -> Result<(), LedgerError>;
}

/// [`SnapshotStore`] backed by a single JSON file.
///
/// Saves go through a temporary sibling file and a rename, so a crash mid
/// write leaves the previous snapshot readable.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_err(context: &str, err: impl std::fmt::Display) -> LedgerError {
        LedgerError::Storage(format!("{context}: {err}"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>, LedgerError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Self::storage_err("failed to read snapshot", err)),
        };

        let snapshot = serde_json::from_str(&data)
            .map_err(|err| Self::storage_err("failed to decode snapshot", err))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), LedgerError> {
        let data = serde_json::to_string_pretty(snapshot)
            .map_err(|err| Self::storage_err("failed to encode snapshot", err))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, data).map_err(|err| Self::storage_err("failed to write snapshot", err))?;
        fs::rename(&tmp, &self.path)
            .map_err(|err| Self::storage_err("failed to replace snapshot", err))?;
        Ok(())
    }
}
