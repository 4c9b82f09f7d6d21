//! The cached trust record.
//!
//! The URL lives in ordinary preferences and the token in the secure store.
//! A record is only trusted when both halves exist and the token equals the
//! expected verification key.

use crate::config::GateConfig;
use crate::error::GateResult;
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, warn};
use wavetech_storage::{Preferences, SecureStore};

/// A cached approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustRecord {
    /// The approved URL.
    pub url: Url,
    /// The token that approved it.
    pub token: String,
}

impl TrustRecord {
    /// Returns true if `token` equals `expected`.
    #[must_use]
    pub fn is_trusted(&self, expected: &str) -> bool {
        self.token == expected
    }
}

/// Reads and writes the trust record across both stores.
#[derive(Clone)]
pub struct TrustStore {
    prefs: Arc<Preferences>,
    secure: Arc<dyn SecureStore>,
    url_key: String,
    token_key: String,
}

impl TrustStore {
    /// Creates a trust store using the cache keys from `config`.
    pub fn new(prefs: Arc<Preferences>, secure: Arc<dyn SecureStore>, config: &GateConfig) -> Self {
        Self {
            prefs,
            secure,
            url_key: config.url_cache_key.clone(),
            token_key: config.token_cache_key.clone(),
        }
    }

    /// Loads the cached record.
    ///
    /// Returns `None` when either half is missing or unreadable; read
    /// failures are logged, never returned.
    pub fn load(&self) -> Option<TrustRecord> {
        let raw_url = match self.prefs.get_string(&self.url_key) {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!("no cached URL");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to read cached URL");
                return None;
            }
        };

        let url = match Url::parse(&raw_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "cached URL does not parse");
                return None;
            }
        };

        let token = match self.secure.load(&self.token_key) {
            Ok(token) => token,
            Err(e) if e.is_not_found() => {
                debug!("no cached verification token");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to read cached verification token");
                return None;
            }
        };

        Some(TrustRecord { url, token })
    }

    /// Loads the cached record and returns it only if its token matches.
    pub fn load_trusted(&self, expected: &str) -> Option<TrustRecord> {
        self.load().filter(|record| record.is_trusted(expected))
    }

    /// Persists a record: URL to preferences, token to the secure store.
    ///
    /// Both writes are attempted even if the first fails; the first error is
    /// returned.
    pub fn persist(&self, record: &TrustRecord) -> GateResult<()> {
        let url_result = self.prefs.set_string(&self.url_key, record.url.as_str());
        let token_result = self.secure.save(&self.token_key, &record.token);
        url_result?;
        token_result?;
        Ok(())
    }

    /// Deletes both halves of the record.
    pub fn clear(&self) -> GateResult<()> {
        self.prefs.remove(&self.url_key)?;
        self.secure.delete(&self.token_key)?;
        Ok(())
    }
}
