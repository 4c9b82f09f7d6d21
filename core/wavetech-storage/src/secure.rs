//! Secure credential storage.
//!
//! The gate persists exactly one secret (the verification token), so the
//! interface stays at `save` / `load` / `delete` keyed by an account name.

use crate::error::{SecureStoreError, SecureStoreResult};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// A store for small secrets keyed by account identifier.
pub trait SecureStore: Send + Sync {
    /// Writes `value` under `key`, overwriting any existing secret.
    fn save(&self, key: &str, value: &str) -> SecureStoreResult<()>;

    /// Reads the secret under `key`.
    ///
    /// # Errors
    ///
    /// [`SecureStoreError::NotFound`] if nothing is stored,
    /// [`SecureStoreError::UnexpectedStatus`] for any other failure.
    fn load(&self, key: &str) -> SecureStoreResult<String>;

    /// Deletes the secret under `key`. Deleting a missing key succeeds.
    fn delete(&self, key: &str) -> SecureStoreResult<()>;
}

/// Secrets kept in the operating system's credential store.
///
/// Entries are addressed by `(service, key)`. Nothing is cached in memory.
///
/// On Linux the backend is the kernel session keyring, so entries are lost
/// at logout or reboot. A missing token reads as [`SecureStoreError::NotFound`]
/// and the gate validates again on the next launch.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Creates a store whose entries live under `service`.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Returns the service name entries are filed under.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> SecureStoreResult<keyring::Entry> {
        keyring::Entry::new(&self.service, key).map_err(SecureStoreError::from)
    }
}

impl SecureStore for KeyringStore {
    fn save(&self, key: &str, value: &str) -> SecureStoreResult<()> {
        self.entry(key)?.set_password(value)?;
        debug!(service = %self.service, key, "secure item saved");
        Ok(())
    }

    fn load(&self, key: &str) -> SecureStoreResult<String> {
        Ok(self.entry(key)?.get_password()?)
    }

    fn delete(&self, key: &str) -> SecureStoreResult<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Secrets held in process memory.
#[derive(Debug, Default)]
pub struct MemorySecureStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemorySecureStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecureStore for MemorySecureStore {
    fn save(&self, key: &str, value: &str) -> SecureStoreResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| SecureStoreError::UnexpectedStatus("lock poisoned".to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> SecureStoreResult<String> {
        let items = self
            .items
            .read()
            .map_err(|_| SecureStoreError::UnexpectedStatus("lock poisoned".to_string()))?;
        items.get(key).cloned().ok_or(SecureStoreError::NotFound)
    }

    fn delete(&self, key: &str) -> SecureStoreResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| SecureStoreError::UnexpectedStatus("lock poisoned".to_string()))?;
        items.remove(key);
        Ok(())
    }
}
