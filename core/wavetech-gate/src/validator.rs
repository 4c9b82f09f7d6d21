//! Remote validation with bounded retries.

use crate::backoff::{Pause, TokioPause, backoff_delay};
use crate::config::GateConfig;
use crate::device::DeviceProfile;
use crate::error::GateResult;
use crate::request::build_request_url;
use crate::response::{Verdict, parse_response};
use crate::state::GateState;
use crate::transport::{HttpTransport, Transport};
use crate::trust::{TrustRecord, TrustStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Asks the validation server whether to show remote content.
pub struct RemoteValidator {
    config: GateConfig,
    profile: DeviceProfile,
    transport: Arc<dyn Transport>,
    pause: Arc<dyn Pause>,
    trust: TrustStore,
}

impl RemoteValidator {
    /// Creates a validator from explicit parts.
    pub fn new(
        config: GateConfig,
        profile: DeviceProfile,
        transport: Arc<dyn Transport>,
        pause: Arc<dyn Pause>,
        trust: TrustStore,
    ) -> Self {
        Self {
            config,
            profile,
            transport,
            pause,
            trust,
        }
    }

    /// Creates a validator for the current device over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_http(config: GateConfig, trust: TrustStore) -> GateResult<Self> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::new(
            config,
            DeviceProfile::collect(),
            Arc::new(transport),
            Arc::new(TokioPause),
            trust,
        ))
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Runs the validation and returns a terminal state.
    ///
    /// Never returns `Idle` or `Validating`. Transport failures are retried
    /// up to `max_attempts` with `min(2^n, cap)` second pauses; any answer
    /// from the server ends the loop.
    pub async fn validate(&self) -> GateState {
        let url = match build_request_url(&self.config, &self.profile) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "cannot build validation request, using native UI");
                return GateState::UseNative;
            }
        };

        let attempts = self.config.max_attempts.max(1);
        for attempt in 1..=attempts {
            debug!(attempt, attempts, "sending validation request");
            match self.transport.fetch_text(&url).await {
                Ok(body) => return self.resolve(&body),
                Err(e) if attempt < attempts => {
                    let delay = backoff_delay(attempt - 1, self.config.backoff_cap());
                    warn!(
                        attempt,
                        error = %e,
                        delay_secs = delay.as_secs(),
                        "validation request failed, retrying"
                    );
                    self.pause.pause(delay).await;
                }
                Err(e) => {
                    warn!(attempt, error = %e, "validation request failed, using native UI");
                    return GateState::UseNative;
                }
            }
        }

        GateState::UseNative
    }

    fn resolve(&self, body: &str) -> GateState {
        match parse_response(body, &self.config.verification_key) {
            Verdict::Approved { token, url } => {
                let record = TrustRecord {
                    url: url.clone(),
                    token: token.clone(),
                };
                if let Err(e) = self.trust.persist(&record) {
                    warn!(error = %e, "failed to cache trust record");
                }
                info!(host = url.host_str().unwrap_or_default(), "remote content approved");
                GateState::Approved { token, url }
            }
            Verdict::Rejected(reason) => {
                info!(%reason, "validation declined, using native UI");
                GateState::UseNative
            }
        }
    }
}
