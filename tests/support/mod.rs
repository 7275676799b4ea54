#![allow(dead_code)]

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};

/// What the mock backend has seen so far.
#[derive(Debug, Default)]
pub struct Recorded {
    pub json_bodies: Vec<(&'static str, Value)>,
    pub content_types: Vec<String>,
    pub uploads: Vec<Upload>,
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    recorded: Arc<Mutex<Recorded>>,
    release: Arc<Notify>,
}

pub struct MockBackend {
    pub base_url: String,
    pub recorded: Arc<Mutex<Recorded>>,
    /// Lets a chatbox message of `"slow"` complete.
    pub release: Arc<Notify>,
}

impl MockBackend {
    pub async fn json_count(&self, path: &str) -> usize {
        let recorded = self.recorded.lock().await;
        recorded.json_bodies.iter().filter(|(p, _)| *p == path).count()
    }

    pub async fn wait_for_json(&self, path: &str, count: usize) {
        for _ in 0..100 {
            if self.json_count(path).await >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("backend never received {count} request(s) on {path}");
    }
}

/// Starts an in-process stand-in for the wellness backend on a random port.
pub async fn spawn_backend() -> MockBackend {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let release = Arc::new(Notify::new());
    let state = MockState {
        recorded: Arc::clone(&recorded),
        release: Arc::clone(&release),
    };

    let app = Router::new()
        .route("/", get(status))
        .route("/chat/mood", post(mood))
        .route("/fitness/plan", post(fitness))
        .route("/chatbox", post(chatbox))
        .route("/health/report", post(report))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        recorded,
        release,
    }
}

/// A base URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

async fn record(state: &MockState, path: &'static str, headers: &HeaderMap, body: &Value) {
    let mut recorded = state.recorded.lock().await;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    recorded.content_types.push(content_type);
    recorded.json_bodies.push((path, body.clone()));
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "AI Well-Being backend running" }))
}

async fn mood(State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, "/chat/mood", &headers, &body).await;
    let mood = body["mood"].as_str().unwrap_or_default();
    let message = body["message"].as_str().unwrap_or_default();
    if message == "fail" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mood backend exploded").into_response();
    }
    Json(json!({ "reply": format!("[{mood}] {message}") })).into_response()
}

async fn fitness(State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, "/fitness/plan", &headers, &body).await;
    if body["goal"] == "Flexibility & Mobility" {
        return (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response();
    }
    if body["age_group"] == "46+" {
        return Json(json!({ "plan": ["Gentle walk"] })).into_response();
    }
    Json(json!({
        "plan": ["Day 1: Walk 20 min"],
        "tips": ["Stay hydrated"],
    }))
    .into_response()
}

async fn chatbox(State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, "/chatbox", &headers, &body).await;
    let message = body["message"].as_str().unwrap_or_default().to_string();
    match message.as_str() {
        "fail" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "garbled" => (StatusCode::OK, "this is not json").into_response(),
        "slow" => {
            state.release.notified().await;
            Json(json!({ "reply": "finally" })).into_response()
        }
        _ => Json(json!({ "reply": format!("You said: {message}") })).into_response(),
    }
}

async fn report(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    let mut file_name = String::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let upload = Upload {
            field: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().unwrap_or_default().to_string(),
            bytes: Vec::new(),
        };
        let bytes = field.bytes().await.unwrap_or_default().to_vec();
        file_name = upload.file_name.clone();
        state.recorded.lock().await.uploads.push(Upload { bytes, ..upload });
    }

    if file_name == "broken.pdf" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "could not read report").into_response();
    }
    Json(json!({
        "file_name": file_name,
        "summary": "All values normal.",
        "general_advice": ["Stay active", "Eat balanced meals"],
    }))
    .into_response()
}
