//! Mock Google speech and translation backend for integration tests
//!
//! Serves `POST /v1/speech:recognize` and `POST /language/translate/v2`
//! with scripted results, recording every request body

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Mock Google backend with call counters
pub struct MockGoogle {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGoogleState>,
}

struct MockGoogleState {
    recognize_count: AtomicU32,
    translate_count: AtomicU32,
    /// Answer every request with 500
    failing: AtomicBool,
    /// Recognition segments, each a ranked list of alternatives
    segments: Vec<Vec<String>>,
    recognize_bodies: Mutex<Vec<Value>>,
    translate_bodies: Mutex<Vec<Value>>,
    api_keys: Mutex<Vec<String>>,
}

impl MockGoogle {
    /// Start the mock server returning `segments` for every recognition
    pub async fn start(segments: &[&[&str]]) -> anyhow::Result<Self> {
        Self::start_inner(segments, false).await
    }

    /// Start a mock server that fails every request with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(&[], true).await
    }

    async fn start_inner(segments: &[&[&str]], failing: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockGoogleState {
            recognize_count: AtomicU32::new(0),
            translate_count: AtomicU32::new(0),
            failing: AtomicBool::new(failing),
            segments: segments
                .iter()
                .map(|alternatives| alternatives.iter().map(|a| (*a).to_owned()).collect())
                .collect(),
            recognize_bodies: Mutex::new(Vec::new()),
            translate_bodies: Mutex::new(Vec::new()),
            api_keys: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/speech:recognize", routing::post(handle_recognize))
            .route("/language/translate/v2", routing::post(handle_translate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for the speech recognizer
    pub fn speech_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Full URL for the translation endpoint
    pub fn translate_url(&self) -> String {
        format!("http://{}/language/translate/v2", self.addr)
    }

    /// Number of recognition requests received
    pub fn recognize_count(&self) -> u32 {
        self.state.recognize_count.load(Ordering::Relaxed)
    }

    /// Number of translation requests received
    pub fn translate_count(&self) -> u32 {
        self.state.translate_count.load(Ordering::Relaxed)
    }

    /// Recognition request bodies in arrival order
    pub fn recognize_bodies(&self) -> Vec<Value> {
        self.state.recognize_bodies.lock().unwrap().clone()
    }

    /// Translation request bodies in arrival order
    pub fn translate_bodies(&self) -> Vec<Value> {
        self.state.translate_bodies.lock().unwrap().clone()
    }

    /// `x-goog-api-key` values seen on any endpoint
    pub fn api_keys(&self) -> Vec<String> {
        self.state.api_keys.lock().unwrap().clone()
    }
}

impl Drop for MockGoogle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn record_key(state: &MockGoogleState, headers: &HeaderMap) {
    if let Some(key) = headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) {
        state.api_keys.lock().unwrap().push(key.to_owned());
    }
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": { "code": 500, "message": "backend unavailable", "status": "INTERNAL" } })),
    )
        .into_response()
}

async fn handle_recognize(
    State(state): State<Arc<MockGoogleState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.recognize_count.fetch_add(1, Ordering::Relaxed);
    record_key(&state, &headers);
    state.recognize_bodies.lock().unwrap().push(body);

    if state.failing.load(Ordering::Relaxed) {
        return failure();
    }

    let results: Vec<Value> = state
        .segments
        .iter()
        .map(|alternatives| {
            json!({
                "alternatives": alternatives
                    .iter()
                    .map(|t| json!({ "transcript": t, "confidence": 0.9 }))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    Json(json!({ "results": results, "totalBilledTime": "1s" })).into_response()
}

async fn handle_translate(
    State(state): State<Arc<MockGoogleState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.translate_count.fetch_add(1, Ordering::Relaxed);
    record_key(&state, &headers);

    let text = body["q"].as_str().unwrap_or_default().to_owned();
    let target = body["target"].as_str().unwrap_or_default().to_owned();
    state.translate_bodies.lock().unwrap().push(body);

    if state.failing.load(Ordering::Relaxed) {
        return failure();
    }

    Json(json!({
        "data": {
            "translations": [
                { "translatedText": format!("[{target}] {text}"), "detectedSourceLanguage": "en" }
            ]
        }
    }))
    .into_response()
}
