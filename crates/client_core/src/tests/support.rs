//! In-process HTTP endpoints for exercising the submission flow end to end.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};
use url::Url;

use shared::domain::Document;

#[derive(Clone)]
struct MockEndpoint {
    status: StatusCode,
    body: Value,
    delay: Duration,
    hits: Arc<AtomicUsize>,
}

async fn handle_submission(State(endpoint): State<MockEndpoint>) -> (StatusCode, Json<Value>) {
    endpoint.hits.fetch_add(1, Ordering::SeqCst);
    if !endpoint.delay.is_zero() {
        tokio::time::sleep(endpoint.delay).await;
    }
    (endpoint.status, Json(endpoint.body.clone()))
}

/// Serves a fixed status and body on an ephemeral port. The returned counter
/// records how many requests actually arrived.
pub async fn spawn_endpoint(status: StatusCode, body: Value) -> (Url, Arc<AtomicUsize>) {
    spawn_endpoint_with_delay(status, body, Duration::ZERO).await
}

/// Same as [`spawn_endpoint`] but holds each response back for `delay`, long
/// enough for a test to observe the in-flight state.
pub async fn spawn_endpoint_with_delay(
    status: StatusCode,
    body: Value,
    delay: Duration,
) -> (Url, Arc<AtomicUsize>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let hits = Arc::new(AtomicUsize::new(0));
    let state = MockEndpoint {
        status,
        body,
        delay,
        hits: Arc::clone(&hits),
    };
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new()
        .route("/", post(handle_submission))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let url = Url::parse(&format!("http://{addr}/")).expect("endpoint url");
    (url, hits)
}

#[derive(Clone)]
struct CaptureEndpoint {
    tx: Arc<Mutex<Option<oneshot::Sender<Value>>>>,
    reply: Value,
}

async fn handle_capture(
    State(state): State<CaptureEndpoint>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(payload);
    }
    Json(state.reply.clone())
}

/// Replies 200 with a minimal valid answer body and hands the first request
/// payload back through the receiver.
pub async fn spawn_capture_endpoint() -> (Url, oneshot::Receiver<Value>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let (tx, rx) = oneshot::channel();
    let state = CaptureEndpoint {
        tx: Arc::new(Mutex::new(Some(tx))),
        reply: json!({"answer": "", "sources": []}),
    };
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new()
        .route("/", post(handle_capture))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let url = Url::parse(&format!("http://{addr}/")).expect("endpoint url");
    (url, rx)
}

pub fn sample_batch() -> Vec<Document> {
    vec![Document::new("doc1", "Intro", "Hello world")]
}
