//! Gate configuration.

use crate::error::{GateError, GateResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Token the validation server must echo back for a response to be trusted.
pub const DEFAULT_VERIFICATION_KEY: &str = "GJDFHDFHFDJGSDAGKGHK";

/// Configuration for the startup gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Validation endpoint. Empty means "no endpoint": the gate resolves to
    /// the native UI without a request.
    pub endpoint_url: String,
    /// Access key sent as the `p` query parameter.
    pub access_key: String,
    /// Token expected as the first part of an approving response.
    pub verification_key: String,
    /// Preference key holding the cached trusted URL.
    pub url_cache_key: String,
    /// Secure store key holding the cached verification token.
    pub token_cache_key: String,
    /// Total request attempts before giving up on transport failures.
    pub max_attempts: u32,
    /// Upper bound on a single backoff pause, in seconds.
    pub backoff_cap_secs: u64,
    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            access_key: String::new(),
            verification_key: DEFAULT_VERIFICATION_KEY.to_string(),
            url_cache_key: "gate.trusted_url".to_string(),
            token_cache_key: "gate.verification_token".to_string(),
            max_attempts: 3,
            backoff_cap_secs: 30,
            request_timeout_secs: 30,
        }
    }
}

impl GateConfig {
    /// Returns the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the backoff cap.
    #[must_use]
    pub fn backoff_cap(&self) -> Duration {
        Duration::from_secs(self.backoff_cap_secs)
    }

    /// Checks the values that would make the gate misbehave rather than
    /// merely fall back to native.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Config`] describing the first bad field.
    pub fn validate(&self) -> GateResult<()> {
        if self.max_attempts == 0 {
            return Err(GateError::Config("max_attempts must be at least 1".into()));
        }
        if self.verification_key.is_empty() {
            return Err(GateError::Config("verification_key must not be empty".into()));
        }
        if self.verification_key.contains('#') {
            return Err(GateError::Config(
                "verification_key must not contain the '#' delimiter".into(),
            ));
        }
        if self.url_cache_key.is_empty() || self.token_cache_key.is_empty() {
            return Err(GateError::Config("cache keys must not be empty".into()));
        }
        Ok(())
    }
}
