use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde_json::{Value, json};

use scroblcli::lastfm::client::{ApiError, LastfmClient};
use scroblcli::utils;

// Stub API transport that serves a scripted list of responses, repeating
// the last one, and counts how often it was hit.
#[derive(Clone)]
struct StubState {
    hits: Arc<AtomicUsize>,
    responses: Arc<Vec<Value>>,
}

async fn scripted(State(state): State<StubState>) -> Json<Value> {
    let hit = state.hits.fetch_add(1, Ordering::SeqCst);
    let idx = hit.min(state.responses.len() - 1);
    Json(state.responses[idx].clone())
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn start_stub(responses: Vec<Value>) -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = StubState {
        hits: Arc::clone(&hits),
        responses: Arc::new(responses),
    };
    let app = Router::new()
        .route("/", get(scripted).post(scripted))
        .with_state(state);

    (serve(app).await, hits)
}

fn stub_client(addr: SocketAddr) -> LastfmClient {
    LastfmClient::with_api_url(
        format!("http://{}/", addr),
        "key".to_string(),
        "secret".to_string(),
    )
}

fn scrobble_like_params() -> BTreeMap<&'static str, String> {
    let mut params = BTreeMap::new();
    params.insert("method", "track.scrobble".to_string());
    params.insert("sk", "sessionkey".to_string());
    params.insert("artist", "Autechre".to_string());
    params.insert("track", "Silverside".to_string());
    params.insert("timestamp", "1700000000".to_string());
    params
}

#[tokio::test]
async fn test_transient_error_triggers_retry_then_succeeds() {
    let (addr, hits) = start_stub(vec![
        json!({"error": 16, "message": "Service temporarily unavailable"}),
        json!({"scrobbles": {"@attr": {"accepted": 1, "ignored": 0}}}),
    ])
    .await;

    let client = stub_client(addr);
    let result = client.post(scrobble_like_params()).await.unwrap();

    // One failed attempt, one retry of the same request
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert!(result.get("scrobbles").is_some());
}

#[tokio::test]
async fn test_fatal_error_code_aborts_immediately() {
    let (addr, hits) = start_stub(vec![
        json!({"error": 9, "message": "Invalid session key - Please re-authenticate"}),
        json!({"scrobbles": {"@attr": {"accepted": 1, "ignored": 0}}}),
    ])
    .await;

    let client = stub_client(addr);
    let result = client.post(scrobble_like_params()).await;

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    match result {
        Err(ApiError::Api { code, message }) => {
            assert_eq!(code, 9);
            assert!(message.contains("re-authenticate"));
        }
        other => panic!("expected fatal API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_surfaces_status_and_body() {
    let app = Router::new().route("/", post(|| async { "status=ok" }));
    let addr = serve(app).await;

    let client = stub_client(addr);
    let result = client.post(scrobble_like_params()).await;

    match result {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 200);
            assert_eq!(body, "status=ok");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_is_signed_and_requests_json() {
    let seen: Arc<Mutex<Option<BTreeMap<String, String>>>> = Arc::new(Mutex::new(None));

    async fn record_query(
        State(seen): State<Arc<Mutex<Option<BTreeMap<String, String>>>>>,
        Query(params): Query<BTreeMap<String, String>>,
    ) -> Json<Value> {
        *seen.lock().unwrap() = Some(params);
        Json(json!({"token": "tok123"}))
    }

    let app = Router::new()
        .route("/", get(record_query))
        .with_state(Arc::clone(&seen));
    let addr = serve(app).await;

    let client = stub_client(addr);
    let mut params = BTreeMap::new();
    params.insert("method", "auth.getToken".to_string());

    let json = client.get(params).await.unwrap();
    assert_eq!(json["token"], "tok123");

    let seen = seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen["method"], "auth.getToken");
    assert_eq!(seen["api_key"], "key");
    assert_eq!(seen["format"], "json");

    // The signature covers the params and the key, but never format or itself
    let mut signed = BTreeMap::new();
    signed.insert("api_key", "key".to_string());
    signed.insert("method", "auth.getToken".to_string());
    assert_eq!(seen["api_sig"], utils::api_sig(&signed, "secret"));
}
