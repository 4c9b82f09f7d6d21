//! Retry pacing.

use async_trait::async_trait;
use std::time::Duration;

/// Pause before the retry that follows `failures` failed attempts:
/// `min(2^failures, cap)` seconds, so 1s, 2s, 4s, ... up to `cap`.
#[must_use]
pub fn backoff_delay(failures: u32, cap: Duration) -> Duration {
    let secs = 1u64.checked_shl(failures).unwrap_or(u64::MAX);
    Duration::from_secs(secs).min(cap)
}

/// Something that can wait.
///
/// Injected into the validator so tests can observe the schedule without
/// sleeping.
#[async_trait]
pub trait Pause: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Waits on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPause;

#[async_trait]
impl Pause for TokioPause {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
