//! Layout persistence
//!
//! The map session talks to storage through [`LayoutStore`]. Loading and
//! saving never fail from the caller's point of view: a missing, unreadable
//! or corrupt layout reads as "nothing saved", and a failed write is logged
//! and forgotten while the session keeps its in-memory layout.
//!
//! [`KeyedStore`] adapts any string key-value [`StorageBackend`] (an
//! in-memory map or a directory of files) to that contract.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::layout::LayoutSnapshot;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },

    #[error("invalid storage key '{key}'")]
    InvalidKey { key: String },
}

/// The persistence collaborator of a map session
pub trait LayoutStore {
    /// Read the saved layout, if there is a usable one
    fn load(&self) -> Option<LayoutSnapshot>;

    /// Write the layout; failures are absorbed by the store
    fn save(&mut self, snapshot: &LayoutSnapshot);
}

/// A store that never remembers anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl LayoutStore for NullStore {
    fn load(&self) -> Option<LayoutSnapshot> {
        None
    }

    fn save(&mut self, _snapshot: &LayoutSnapshot) {}
}

/// String key-value storage addressed by a single key per value
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process key-value storage
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value exceeds `bytes`
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Store a raw value, bypassing the quota
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.quota.is_some_and(|limit| value.len() > limit) {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Key-value storage as one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

/// A [`LayoutStore`] that keeps the snapshot under one fixed key
#[derive(Debug, Clone)]
pub struct KeyedStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> KeyedStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: StorageBackend> LayoutStore for KeyedStore<B> {
    fn load(&self) -> Option<LayoutSnapshot> {
        let text = match self.backend.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("could not read saved layout '{}': {}", self.key, e);
                return None;
            }
        };

        match LayoutSnapshot::from_json(&text) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("ignoring saved layout '{}': {}", self.key, e);
                None
            }
        }
    }

    fn save(&mut self, snapshot: &LayoutSnapshot) {
        if let Err(e) = self.backend.set(&self.key, &snapshot.to_json()) {
            log::warn!("could not save layout '{}': {}", self.key, e);
        }
    }
}
