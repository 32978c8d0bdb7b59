//! Key-value storage backends for the persisted cart.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use crate::error::PersistenceError;

/// Durable string storage addressed by key (the browser-local-storage contract).
///
/// Writes replace the whole value; there is no merge and no conflict detection.
pub trait CartStorage: Send {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S> CartStorage for Arc<S>
where
    S: CartStorage + Sync + ?Sized,
{
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).save(key, value)
    }
}

/// In-memory storage.
///
/// Clones share the same map, so a test (or a second "session") can observe
/// what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with a snapshot left by an earlier session.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let entries = self.entries.lock().map_err(|_| PersistenceError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut entries = self.entries.lock().map_err(|_| PersistenceError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// ```text
/// <dir>/
///     pyro-shop-cart.json
/// ```
///
/// Each save writes a uniquely named temporary file in the same directory and
/// renames it over the target. A crash mid-write leaves the previous snapshot
/// intact, and concurrent writers never share a temporary file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/<key>.json`. Keys are restricted to `[A-Za-z0-9_-]`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl CartStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|err| err.error)?;
        Ok(())
    }
}
