//! Local persistence for WaveTech.
//!
//! Two stores live here:
//!
//! - [`Preferences`]: a flat key-value store of JSON values, persisted as a
//!   single JSON document. Record lists and the cached trusted URL are kept
//!   here.
//! - [`SecureStore`]: a minimal `save`/`load`/`delete` interface over a
//!   platform credential store. [`KeyringStore`] talks to the OS keyring;
//!   [`MemorySecureStore`] keeps secrets in process memory.
//!
//! Neither store caches across processes; every launch reads what the
//! previous one wrote.

mod error;
mod prefs;
mod secure;

pub use error::{SecureStoreError, SecureStoreResult, StorageError, StorageResult};
pub use prefs::Preferences;
pub use secure::{KeyringStore, MemorySecureStore, SecureStore};
