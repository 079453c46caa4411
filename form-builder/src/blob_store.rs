//! Blob store implementations.
//!
//! `MemoryStore` keeps blobs in a map, which is handy for tests and for hosts
//! that persist elsewhere. `FileStore` keeps one JSON file per key in a
//! directory.
//!
//! # Example
//!
//! ```
//! use form_builder::{BlobStore, FieldType, FormStore, MemoryStore};
//!
//! let mut blobs = MemoryStore::new();
//! let mut builder = FormStore::new();
//! builder.set_title("Feedback");
//! builder.append_field(FieldType::Input);
//! builder.save(&mut blobs).unwrap();
//!
//! assert!(blobs.contains("savedForm"));
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{BlobStore, StoreError};

/// A blob store that lives in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            blobs: HashMap::new(),
        }
    }

    /// Pre-fill a blob.
    pub fn with_blob(mut self, key: impl Into<String>, blob: impl Into<String>) -> Self {
        self.blobs.insert(key.into(), blob.into());
        self
    }

    /// Get the blob stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }

    /// Check if a blob is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.blobs.contains_key(key)
    }

    /// Get the number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// A blob store keeping each key in `<dir>/<key>.json`.
///
/// Keys may only contain ASCII letters, digits, `-` and `_`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for storage, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Get the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Writes to a temporary file first, so a reader never sees half a blob.
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let staging = path.with_extension("json.tmp");
        let io_error = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        fs::write(&staging, blob).map_err(io_error)?;
        fs::rename(&staging, &path).map_err(io_error)
    }
}
