//! Durable storage of the shopper's last fitment selection.
//!
//! [`FitmentStore`] is the only code that touches the storage keys. Each
//! selection field lives under its own key as a bare option id (see
//! [`SelectionField::storage_key`]). A store built without a backend models
//! an environment with no durable storage: every operation is a no-op.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tpu_core::{FitmentSelection, FitmentSelectionPatch, SelectionField};

use crate::error::StoreError;

/// A string key/value store that outlives any single page view.
pub trait SelectionStorage {
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

/// In-memory storage. Clones share the same map, the way every tab of a
/// browser shares one storage area.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SelectionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// Storage persisted as a JSON object of `key -> string` in a single file.
///
/// Every write rewrites the file immediately. A missing file reads as empty.
/// Concurrent writers race with last-write-wins semantics.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let encoded = serde_json::to_string_pretty(items).map_err(|source| StoreError::Encode {
            path: self.path.display().to_string(),
            source,
        })?;
        std::fs::write(&self.path, encoded).map_err(|e| self.io_error(e))
    }
}

impl SelectionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Read/write access to the saved fitment selection.
#[derive(Debug, Clone)]
pub struct FitmentStore<S> {
    storage: Option<S>,
}

impl<S: SelectionStorage> FitmentStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        FitmentStore {
            storage: Some(storage),
        }
    }

    /// A store for an environment without durable storage.
    #[must_use]
    pub fn unavailable() -> Self {
        FitmentStore { storage: None }
    }

    #[must_use]
    pub fn from_option(storage: Option<S>) -> Self {
        FitmentStore { storage }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    /// Reads the saved selection. Missing keys read as `""`, and so does
    /// every field when no storage is available.
    ///
    /// # Errors
    ///
    /// Propagates backend read failures.
    pub fn saved_fitment(&self) -> Result<FitmentSelection, StoreError> {
        let mut selection = FitmentSelection::default();
        let Some(storage) = &self.storage else {
            tracing::debug!("no durable storage; returning empty fitment selection");
            return Ok(selection);
        };

        for field in SelectionField::ALL {
            if let Some(value) = storage.get_item(field.storage_key())? {
                selection.set(field, value);
            }
        }
        Ok(selection)
    }

    /// Writes every field present in `patch`; absent fields keep their stored
    /// value. An explicit `""` is written as-is, clearing that choice.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn save_fitment(&self, patch: &FitmentSelectionPatch) -> Result<(), StoreError> {
        let Some(storage) = &self.storage else {
            tracing::debug!("no durable storage; fitment selection not saved");
            return Ok(());
        };

        for field in SelectionField::ALL {
            if let Some(value) = patch.get(field) {
                storage.set_item(field.storage_key(), value)?;
                tracing::debug!(key = field.storage_key(), value, "saved fitment field");
            }
        }
        Ok(())
    }

    /// Removes all four keys.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn clear_saved_fitment(&self) -> Result<(), StoreError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };

        for field in SelectionField::ALL {
            storage.remove_item(field.storage_key())?;
        }
        tracing::debug!("cleared saved fitment selection");
        Ok(())
    }
}
