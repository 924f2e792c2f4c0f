//! End-to-end tests of the HTTP surface with a stubbed provider.
//!
//! The stub counts calls so tests can assert that rejected requests never
//! produce an outbound lookup.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use imagegate::error::LookupError;
use imagegate::server::{build_router, AppState};
use imagegate::types::{ImageHit, ImageProvider, Orientation, ProviderId};

#[derive(Debug)]
struct StubProvider {
    hits: Vec<ImageHit>,
    error: Option<LookupError>,
    calls: Arc<AtomicUsize>,
}

impl StubProvider {
    fn with_hits(hits: Vec<ImageHit>) -> Self {
        Self {
            hits,
            error: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn empty() -> Self {
        Self::with_hits(Vec::new())
    }

    fn failing(error: LookupError) -> Self {
        Self {
            hits: Vec::new(),
            error: Some(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl ImageProvider for StubProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Pexels
    }

    async fn search(
        &self,
        _query: &str,
        _orientation: &Orientation,
    ) -> Result<Vec<ImageHit>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.hits.clone()),
        }
    }
}

fn sample_hit() -> ImageHit {
    ImageHit {
        image_url: "https://images.example.com/42/large.jpg".to_string(),
        photographer: "Jane Doe".to_string(),
        provider: ProviderId::Pexels,
        raw: None,
    }
}

fn router_with(provider: StubProvider) -> (Router, Arc<AtomicUsize>) {
    let calls = Arc::clone(&provider.calls);
    let state = AppState {
        provider: Arc::new(provider),
    };
    (build_router(state), calls)
}

async fn post_lookup(app: &Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/generate-image")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn health_probe_returns_fixed_payload() {
    let (app, calls) = router_with(StubProvider::empty());

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["status"].is_string());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_lookup_returns_first_hit() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));

    let (status, body) = post_lookup(
        &app,
        json!({ "prompt": "office desk", "orientation": "portrait" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["image_url"], "https://images.example.com/42/large.jpg");
    assert_eq!(body["photographer"], "Jane Doe");
    assert_eq!(body["provider"], "pexels");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_prompt_is_rejected_without_provider_call() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));

    let (status, body) = post_lookup(&app, json!({ "prompt": "" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_prompt_is_rejected_without_provider_call() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));

    let (status, body) = post_lookup(&app, json!({}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_prompt_is_rejected_without_provider_call() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));

    let (status, _body) = post_lookup(&app, json!({ "prompt": "   " }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn video_kind_is_rejected_without_provider_call() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));

    let (status, body) = post_lookup(
        &app,
        json!({ "prompt": "crashing waves", "type": "video" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unsupported_kind");
    assert!(body["detail"].as_str().unwrap().contains("video"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_kind_is_rejected_at_the_boundary() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));

    let (status, body) = post_lookup(
        &app,
        json!({ "prompt": "anything", "type": "audio" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_body_is_rejected_without_provider_call() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));

    let (status, body) = post_lookup(&app, "{not valid json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_result_collection_maps_to_404() {
    let (app, calls) = router_with(StubProvider::empty());

    let (status, body) =
        post_lookup(&app, json!({ "prompt": "xyzzy nothing" }).to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "not_found");
    assert!(body["detail"].as_str().unwrap().contains("No images found"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn provider_status_failure_maps_to_500_with_raw_body() {
    let (app, _calls) = router_with(StubProvider::failing(LookupError::Provider {
        status: 503,
        body: "upstream maintenance window".to_string(),
    }));

    let (status, body) = post_lookup(&app, json!({ "prompt": "office" }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "provider_error");
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("upstream maintenance window"));
}

#[tokio::test]
async fn transport_failure_maps_to_500_with_cause() {
    let (app, _calls) = router_with(StubProvider::failing(LookupError::Transport(
        "connection refused".to_string(),
    )));

    let (status, body) = post_lookup(&app, json!({ "prompt": "office" }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "transport_error");
    assert!(body["detail"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn repeated_requests_yield_identical_responses() {
    let (app, calls) = router_with(StubProvider::with_hits(vec![sample_hit()]));
    let body = json!({ "prompt": "office desk" }).to_string();

    let (first_status, first_body) = post_lookup(&app, body.clone()).await;
    let (second_status, second_body) = post_lookup(&app, body).await;

    assert_eq!(first_status, second_status);
    assert_eq!(first_body, second_body);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
