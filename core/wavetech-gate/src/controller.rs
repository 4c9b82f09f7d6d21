//! The launch state machine.
//!
//! `Idle → Validating → {Approved | UseNative}`, with a short-circuit from
//! `Idle` straight to `Approved` when a trusted record is cached. Once a
//! terminal state is reached it is kept for the rest of the process; a new
//! launch builds a new controller.

use crate::config::GateConfig;
use crate::error::GateResult;
use crate::state::GateState;
use crate::trust::TrustStore;
use crate::validator::RemoteValidator;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::info;
use wavetech_storage::{Preferences, SecureStore};

/// Runs the gate once per process and publishes its state.
pub struct GateController {
    trust: TrustStore,
    validator: RemoteValidator,
    state: watch::Sender<GateState>,
    started: AtomicBool,
}

impl GateController {
    /// Creates an idle controller.
    pub fn new(trust: TrustStore, validator: RemoteValidator) -> Self {
        let (state, _) = watch::channel(GateState::Idle);
        Self {
            trust,
            validator,
            state,
            started: AtomicBool::new(false),
        }
    }

    /// Creates a controller that validates over HTTP for the current device.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn from_stores(
        config: GateConfig,
        prefs: Arc<Preferences>,
        secure: Arc<dyn SecureStore>,
    ) -> GateResult<Self> {
        config.validate()?;
        let trust = TrustStore::new(prefs, secure, &config);
        let validator = RemoteValidator::with_http(config, trust.clone())?;
        Ok(Self::new(trust, validator))
    }

    /// Returns a receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.subscribe()
    }

    /// Returns the current state.
    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }

    /// Runs the gate.
    ///
    /// The first call does the work and returns the terminal state. Later
    /// calls do nothing and return the state at that moment, which is
    /// `Idle` or `Validating` while the first call is still running. Use
    /// [`GateController::wait_until_resolved`] to wait for the outcome.
    ///
    /// A trusted cached record goes straight from `Idle` to `Approved`
    /// without publishing `Validating`.
    pub async fn activate(&self) -> GateState {
        if self.started.swap(true, Ordering::SeqCst) {
            return self.state();
        }

        let expected = &self.validator.config().verification_key;
        if let Some(record) = self.trust.load_trusted(expected) {
            info!("cached trust record accepted, skipping validation");
            let approved = GateState::Approved {
                token: record.token,
                url: record.url,
            };
            self.state.send_replace(approved.clone());
            return approved;
        }

        self.state.send_replace(GateState::Validating);
        let outcome = self.validator.validate().await;
        self.state.send_replace(outcome.clone());
        outcome
    }

    /// Waits until the gate reaches a terminal state.
    pub async fn wait_until_resolved(&self) -> GateState {
        let mut rx = self.subscribe();
        match rx.wait_for(GateState::is_terminal).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }
}
