//! Shared test helpers for gate tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use wavetech_gate::{
    DeviceProfile, GateConfig, GateController, GateError, GateResult, Pause, RemoteValidator,
    Transport, TrustStore, Url,
};
use wavetech_storage::{
    MemorySecureStore, Preferences, SecureStore, SecureStoreError, SecureStoreResult,
};

pub const VALID_BODY: &str = "GJDFHDFHFDJGSDAGKGHK#https://example.com/x";

/// One scripted outcome per request.
pub enum Step {
    Body(&'static str),
    Fail,
}

/// Transport that replays a fixed script and counts requests.
#[derive(Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    urls: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<Url> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch_text(&self, url: &Url) -> GateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.clone());
        match self.steps.lock().unwrap().pop_front() {
            Some(Step::Body(body)) => Ok(body.to_string()),
            Some(Step::Fail) | None => Err(GateError::Network("connection refused".into())),
        }
    }
}

/// Transport that holds every request until [`GatedTransport::release`].
#[derive(Default)]
pub struct GatedTransport {
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn fetch_text(&self, _url: &Url) -> GateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(VALID_BODY.to_string())
    }
}

/// Pause that records requested durations instead of sleeping.
#[derive(Default)]
pub struct RecordingPause {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPause {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pause for RecordingPause {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// Secure store whose every operation fails with a platform status.
pub struct BrokenSecureStore;

impl SecureStore for BrokenSecureStore {
    fn save(&self, _key: &str, _value: &str) -> SecureStoreResult<()> {
        Err(SecureStoreError::UnexpectedStatus("-25308".into()))
    }

    fn load(&self, _key: &str) -> SecureStoreResult<String> {
        Err(SecureStoreError::UnexpectedStatus("-25308".into()))
    }

    fn delete(&self, _key: &str) -> SecureStoreResult<()> {
        Err(SecureStoreError::UnexpectedStatus("-25308".into()))
    }
}

pub fn test_config() -> GateConfig {
    GateConfig {
        endpoint_url: "https://validation.test/check".to_string(),
        access_key: "test-access-key".to_string(),
        ..GateConfig::default()
    }
}

pub fn test_profile() -> DeviceProfile {
    DeviceProfile {
        region: Some("US".to_string()),
        language: "en".to_string(),
        system: "iOS 17.5".to_string(),
        model: "iPhone14,2".to_string(),
    }
}

/// Everything a gate test needs to poke at.
pub struct Harness {
    pub prefs: Arc<Preferences>,
    pub secure: Arc<dyn SecureStore>,
    pub transport: Arc<ScriptedTransport>,
    pub pause: Arc<RecordingPause>,
    pub config: GateConfig,
}

impl Harness {
    pub fn new(steps: Vec<Step>) -> Self {
        Self::with_secure(steps, Arc::new(MemorySecureStore::new()))
    }

    pub fn with_secure(steps: Vec<Step>, secure: Arc<dyn SecureStore>) -> Self {
        Self {
            prefs: Arc::new(Preferences::in_memory()),
            secure,
            transport: ScriptedTransport::new(steps),
            pause: Arc::new(RecordingPause::default()),
            config: test_config(),
        }
    }

    pub fn trust(&self) -> TrustStore {
        TrustStore::new(self.prefs.clone(), self.secure.clone(), &self.config)
    }

    pub fn validator(&self) -> RemoteValidator {
        RemoteValidator::new(
            self.config.clone(),
            test_profile(),
            self.transport.clone(),
            self.pause.clone(),
            self.trust(),
        )
    }

    pub fn controller(&self) -> GateController {
        GateController::new(self.trust(), self.validator())
    }

    /// Controller that talks through `transport` instead of the script.
    pub fn controller_with(&self, transport: Arc<dyn Transport>) -> GateController {
        let validator = RemoteValidator::new(
            self.config.clone(),
            test_profile(),
            transport,
            self.pause.clone(),
            self.trust(),
        );
        GateController::new(self.trust(), validator)
    }

    pub fn cache(&self, url: &str, token: &str) {
        self.prefs.set_string(&self.config.url_cache_key, url).unwrap();
        self.secure.save(&self.config.token_cache_key, token).unwrap();
    }

    pub fn cached_url(&self) -> Option<String> {
        self.prefs.get_string(&self.config.url_cache_key).unwrap()
    }

    pub fn cached_token(&self) -> Option<String> {
        self.secure.load(&self.config.token_cache_key).ok()
    }
}
