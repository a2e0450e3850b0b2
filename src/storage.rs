//! Snapshot persistence.
//!
//! The whole [`AppData`] aggregate is serialized as a single pretty-printed
//! JSON document and rewritten wholesale on every save. [`FileSlot`] is the
//! production backend (`~/.workdeck/app_data.json`); [`MemorySlot`] backs
//! tests and ephemeral sessions.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::types::AppData;

const STATE_DIR: &str = ".workdeck";
const SNAPSHOT_FILE: &str = "app_data.json";

/// A place the aggregate snapshot is loaded from and saved to.
pub trait PersistenceSlot: Send {
    /// The stored snapshot, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<AppData>, StorageError>;
    fn save(&self, data: &AppData) -> Result<(), StorageError>;
}

/// Canonical snapshot path (`~/.workdeck/app_data.json`).
pub fn default_snapshot_path() -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::HomeNotFound)?;
    Ok(home.join(STATE_DIR).join(SNAPSHOT_FILE))
}

/// File-backed slot.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot at the canonical per-user location.
    pub fn new() -> Result<Self, StorageError> {
        Ok(FileSlot {
            path: default_snapshot_path()?,
        })
    }

    /// Slot at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        FileSlot { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceSlot for FileSlot {
    fn load(&self) -> Result<Option<AppData>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let data =
            serde_json::from_str(&content).map_err(|e| StorageError::Parse(e.to_string()))?;
        Ok(Some(data))
    }

    fn save(&self, data: &AppData) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content =
            serde_json::to_string_pretty(data).map_err(|e| StorageError::Serialize(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory slot. Clones share the same underlying snapshot, so a test can
/// hold one handle while the store writes through another.
#[derive(Clone, Default)]
pub struct MemorySlot {
    snapshot: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceSlot for MemorySlot {
    fn load(&self) -> Result<Option<AppData>, StorageError> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        match guard.as_deref() {
            Some(content) => {
                let data = serde_json::from_str(content)
                    .map_err(|e| StorageError::Parse(e.to_string()))?;
                Ok(Some(data))
            }
            None => Ok(None),
        }
    }

    fn save(&self, data: &AppData) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(data).map_err(|e| StorageError::Serialize(e.to_string()))?;
        *self
            .snapshot
            .lock()
            .map_err(|_| StorageError::LockPoisoned)? = Some(content);
        Ok(())
    }
}
