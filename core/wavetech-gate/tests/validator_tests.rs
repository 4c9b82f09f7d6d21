mod common;

use common::{BrokenSecureStore, Harness, Step, VALID_BODY};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use wavetech_gate::{GateConfig, GateState, Url};

fn approved(url: &str) -> GateState {
    GateState::Approved {
        token: "GJDFHDFHFDJGSDAGKGHK".to_string(),
        url: Url::parse(url).unwrap(),
    }
}

// ── Approval ────────────────────────────────────────────────────

#[tokio::test]
async fn valid_response_is_approved_and_persisted() {
    let h = Harness::new(vec![Step::Body(VALID_BODY)]);
    let state = h.validator().validate().await;

    assert_eq!(state, approved("https://example.com/x"));
    assert_eq!(h.transport.calls(), 1);
    assert!(h.pause.pauses().is_empty());
    assert_eq!(h.cached_url().as_deref(), Some("https://example.com/x"));
    assert_eq!(h.cached_token().as_deref(), Some("GJDFHDFHFDJGSDAGKGHK"));
}

#[tokio::test]
async fn surrounding_whitespace_is_ignored() {
    let h = Harness::new(vec![Step::Body(
        "\n  GJDFHDFHFDJGSDAGKGHK#https://example.com/x\r\n",
    )]);
    assert_eq!(h.validator().validate().await, approved("https://example.com/x"));
}

#[tokio::test]
async fn persistence_failure_does_not_change_outcome() {
    let h = Harness::with_secure(vec![Step::Body(VALID_BODY)], Arc::new(BrokenSecureStore));
    let state = h.validator().validate().await;
    assert_eq!(state, approved("https://example.com/x"));
    // The URL half still landed.
    assert_eq!(h.cached_url().as_deref(), Some("https://example.com/x"));
}

// ── Definitive rejections: one request, no retry ────────────────

async fn assert_rejected_without_retry(body: &'static str) {
    let h = Harness::new(vec![Step::Body(body), Step::Body(VALID_BODY)]);
    let state = h.validator().validate().await;

    assert_eq!(state, GateState::UseNative, "body {body:?}");
    assert_eq!(h.transport.calls(), 1, "body {body:?}");
    assert!(h.pause.pauses().is_empty(), "body {body:?}");
    assert_eq!(h.cached_url(), None, "body {body:?}");
    assert_eq!(h.cached_token(), None, "body {body:?}");
}

#[tokio::test]
async fn body_without_delimiter_is_rejected() {
    assert_rejected_without_retry("GJDFHDFHFDJGSDAGKGHK").await;
}

#[tokio::test]
async fn body_with_extra_parts_is_rejected() {
    assert_rejected_without_retry("GJDFHDFHFDJGSDAGKGHK#https://example.com/x#frag").await;
}

#[tokio::test]
async fn token_mismatch_is_rejected() {
    assert_rejected_without_retry("WRONGTOKEN#https://example.com/x").await;
}

#[tokio::test]
async fn invalid_url_is_rejected() {
    assert_rejected_without_retry("GJDFHDFHFDJGSDAGKGHK#not a url").await;
}

#[tokio::test]
async fn empty_body_is_rejected() {
    assert_rejected_without_retry("").await;
}

#[tokio::test]
async fn html_error_page_is_rejected() {
    assert_rejected_without_retry("<html><body>502 Bad Gateway</body></html>").await;
}

// ── Transient failures ──────────────────────────────────────────

#[tokio::test]
async fn two_failures_then_success_backs_off_one_then_two_seconds() {
    let h = Harness::new(vec![Step::Fail, Step::Fail, Step::Body(VALID_BODY)]);
    let state = h.validator().validate().await;

    assert_eq!(state, approved("https://example.com/x"));
    assert_eq!(h.transport.calls(), 3);
    assert_eq!(
        h.pause.pauses(),
        vec![Duration::from_secs(1), Duration::from_secs(2)]
    );
}

#[tokio::test]
async fn one_failure_then_rejection_stops() {
    let h = Harness::new(vec![Step::Fail, Step::Body("nope"), Step::Body(VALID_BODY)]);
    let state = h.validator().validate().await;

    assert_eq!(state, GateState::UseNative);
    assert_eq!(h.transport.calls(), 2);
    assert_eq!(h.pause.pauses(), vec![Duration::from_secs(1)]);
}

#[tokio::test]
async fn three_failures_fall_back_to_native() {
    let h = Harness::new(vec![Step::Fail, Step::Fail, Step::Fail, Step::Body(VALID_BODY)]);
    let state = h.validator().validate().await;

    assert_eq!(state, GateState::UseNative);
    assert_eq!(h.transport.calls(), 3);
    assert_eq!(h.pause.pauses().len(), 2);
    assert_eq!(h.cached_url(), None);
}

#[tokio::test]
async fn backoff_is_capped() {
    let mut h = Harness::new(Vec::new());
    h.config = GateConfig {
        max_attempts: 7,
        backoff_cap_secs: 5,
        ..h.config.clone()
    };
    let state = h.validator().validate().await;

    assert_eq!(state, GateState::UseNative);
    assert_eq!(h.transport.calls(), 7);
    let secs: Vec<u64> = h.pause.pauses().iter().map(Duration::as_secs).collect();
    assert_eq!(secs, vec![1, 2, 4, 5, 5, 5]);
}

// ── Request construction ────────────────────────────────────────

#[tokio::test]
async fn missing_endpoint_uses_native_without_request() {
    let mut h = Harness::new(vec![Step::Body(VALID_BODY)]);
    h.config.endpoint_url = String::new();
    assert_eq!(h.validator().validate().await, GateState::UseNative);
    assert_eq!(h.transport.calls(), 0);
}

#[tokio::test]
async fn malformed_endpoint_uses_native_without_request() {
    let mut h = Harness::new(vec![Step::Body(VALID_BODY)]);
    h.config.endpoint_url = "::not-a-url::".to_string();
    assert_eq!(h.validator().validate().await, GateState::UseNative);
    assert_eq!(h.transport.calls(), 0);
}

#[tokio::test]
async fn request_carries_fingerprint() {
    let h = Harness::new(vec![Step::Body(VALID_BODY)]);
    h.validator().validate().await;

    let urls = h.transport.urls();
    assert_eq!(urls.len(), 1);
    let query: Vec<(String, String)> = urls[0].query_pairs().into_owned().collect();
    assert_eq!(
        query,
        vec![
            ("p".to_string(), "test-access-key".to_string()),
            ("os".to_string(), "iOS 17.5".to_string()),
            ("lng".to_string(), "en".to_string()),
            ("devicemodel".to_string(), "iPhone14,2".to_string()),
            ("country".to_string(), "US".to_string()),
        ]
    );
}

#[tokio::test]
async fn retries_reuse_the_same_request() {
    let h = Harness::new(vec![Step::Fail, Step::Body(VALID_BODY)]);
    h.validator().validate().await;
    let urls = h.transport.urls();
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], urls[1]);
}
