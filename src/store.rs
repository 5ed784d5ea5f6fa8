//! Key-value store
//!
//! The storefront keeps its catalog cache and quote log in a string-keyed,
//! string-valued store with last-write-wins semantics and no transactional
//! discipline. The trait is the seam between the engine and whatever the host
//! provides; the host may clear the backing storage at any time, so every read
//! treats absence as normal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The backing file held something other than a string map.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// A string-keyed, string-valued store shared by the catalog cache and the
/// quote log.
///
/// Writes are immediately visible and independently overwritable; no caller
/// may assume exclusive access.
pub trait KeyValueStore {
    /// Reads the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the entry under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// An in-process store with no persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);

        Ok(())
    }
}

/// A store persisted as a single JSON object file, surviving across runs.
///
/// The whole map is loaded on open and rewritten on every mutation. A missing
/// backing file is an empty store, not an error.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any entries persisted there.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if an existing backing file cannot be read or
    /// does not decode as a string map.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, entries })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());

        self.persist()
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }

        Ok(())
    }
}
