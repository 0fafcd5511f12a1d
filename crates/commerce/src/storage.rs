//! Durable-storage backends.
//!
//! The store serializes its entire collection state into one blob and hands
//! it to a [`StorageBackend`] after every mutation; on open it reads the
//! blob back once. The contract is all-or-nothing per call: `save` either
//! lands the whole blob or nothing, and a missing key loads as `Ok(None)`.
//!
//! Methods take `&self` so implementations can use interior mutability.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Errors from storage backends and blob decoding.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing a blob.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The blob could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The persisted blob carries a format version this build cannot read.
    #[error("unsupported state format version {found}")]
    UnsupportedVersion {
        /// Version found in the blob.
        found: u32,
    },

    /// The key contains characters the backend cannot store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A key-value persistence backend.
pub trait StorageBackend {
    /// Persist `blob` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the write fails. A failed write must
    /// leave the previous value intact.
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError>;

    /// Load the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `Ok(None)` if the key has never been written; errors only on
    /// an actual read failure.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        (**self).save(key, blob)
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(key)
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        blobs.insert(key.to_owned(), blob.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let blobs = self.blobs.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(blobs.get(key).cloned())
    }
}

/// File-backed backend: one `<key>.json` file per key under a data
/// directory.
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so a
/// crashed write never leaves a truncated state file behind.
#[derive(Debug)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Open a backend rooted at `dir`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory blobs are stored under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for JsonFileBackend {
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keys become file names; restrict them to a safe alphabet.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}
