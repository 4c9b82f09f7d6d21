//! File-backed key-value preferences.
//!
//! All entries live in one JSON object on disk. Every mutation rewrites the
//! document through a temporary file and an atomic rename, so a crash never
//! leaves a half-written file behind.

use crate::error::{StorageError, StorageResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// A flat key-value store of JSON values.
#[derive(Debug)]
pub struct Preferences {
    path: Option<PathBuf>,
    entries: RwLock<Map<String, Value>>,
}

impl Preferences {
    /// Opens (or lazily creates) the preference document at `path`.
    ///
    /// A missing or empty file opens as an empty store. The file is only
    /// created on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if it does
    /// not contain a JSON object.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&raw)? {
                    Value::Object(map) => map,
                    other => {
                        return Err(StorageError::InvalidData(format!(
                            "expected a JSON object in {}, found {}",
                            path.display(),
                            json_kind(&other)
                        )));
                    }
                }
            }
        } else {
            Map::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "opened preferences");
        Ok(Self {
            path: Some(path),
            entries: RwLock::new(entries),
        })
    }

    /// Like [`Preferences::open`], but a document that does not parse is
    /// moved aside to `<path>.corrupt` and the store starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read.
    pub fn open_or_reset(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Err(e @ (StorageError::Serialization(_) | StorageError::InvalidData(_))) => {
                let mut aside = path.as_os_str().to_owned();
                aside.push(".corrupt");
                let aside = PathBuf::from(aside);
                warn!(
                    path = %path.display(),
                    moved_to = %aside.display(),
                    error = %e,
                    "unreadable preferences, starting empty"
                );
                if let Err(rename) = fs::rename(path, &aside) {
                    warn!(error = %rename, "could not move unreadable preferences aside");
                }
                Ok(Self {
                    path: Some(path.to_path_buf()),
                    entries: RwLock::new(Map::new()),
                })
            }
            other => other,
        }
    }

    /// Creates a store that never touches the file system.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: RwLock::new(Map::new()),
        }
    }

    /// Returns the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let entries = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    /// Returns true if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> StorageResult<bool> {
        let entries = self.entries.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.contains_key(key))
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The in-memory copy only changes once the document is written.
    pub fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    /// Removes `key`. Returns whether anything was removed.
    pub fn remove(&self, key: &str) -> StorageResult<bool> {
        let mut entries = self.entries.write().map_err(|_| StorageError::LockPoisoned)?;
        if !entries.contains_key(key) {
            return Ok(false);
        }
        let mut next = entries.clone();
        next.remove(key);
        self.flush(&next)?;
        *entries = next;
        Ok(true)
    }

    /// Returns the string stored under `key`.
    ///
    /// Non-string values read as `None`.
    pub fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(match self.get(key)? {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    /// Stores a string under `key`.
    pub fn set_string(&self, key: &str, value: &str) -> StorageResult<()> {
        self.set(key, Value::String(value.to_string()))
    }

    /// Decodes the value under `key` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialization`] if the stored value does not
    /// decode as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Encodes `value` and stores it under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let value = serde_json::to_value(value)?;
        self.set(key, value)
    }

    fn flush(&self, entries: &Map<String, Value>) -> StorageResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = path.with_extension("tmp");
        let bytes = serde_json::to_vec_pretty(entries)?;
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
