//! In-process stand-in for the admin API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

pub const VALID_OTP: &str = "123456";
pub const ISSUED_TOKEN: &str = "tok-abc";
/// Phone number the fake WhatsApp sender refuses
pub const UNDELIVERABLE_PHONE: &str = "10000000000";
/// Phone number answered with a non-JSON body
pub const GARBLED_PHONE: &str = "19999999999";

/// One request as seen by the server.
#[derive(Debug, Clone, Default)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub query: HashMap<String, String>,
    pub json: Option<Value>,
    pub form: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct MockAdmin {
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl MockAdmin {
    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn hits_to(&self, path: &str) -> Vec<Hit> {
        self.hits().into_iter().filter(|h| h.path == path).collect()
    }

    fn record(&self, hit: Hit) {
        self.hits.lock().unwrap().push(hit);
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    header_value(headers, header::AUTHORIZATION).as_deref() == Some("Bearer tok-abc")
}

async fn post_otp(State(mock): State<MockAdmin>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    mock.record(Hit {
        method: "POST".to_string(),
        path: "/api/admin/otp".to_string(),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        json: Some(body.clone()),
        ..Default::default()
    });

    match body["phone_number"].as_str() {
        Some(UNDELIVERABLE_PHONE) => detail(StatusCode::BAD_REQUEST, "Recipient phone number not in allowed list"),
        Some(GARBLED_PHONE) => (StatusCode::OK, "<html>gateway</html>").into_response(),
        _ => (StatusCode::CREATED, Json(json!(""))).into_response(),
    }
}

async fn post_token(State(mock): State<MockAdmin>, headers: HeaderMap, mut multipart: Multipart) -> Response {
    let mut form = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap();
        form.insert(name, value);
    }

    let valid = form.get("password").map(String::as_str) == Some(VALID_OTP);
    mock.record(Hit {
        method: "POST".to_string(),
        path: "/api/admin/token".to_string(),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        form,
        ..Default::default()
    });

    if valid {
        Json(json!({ "access_token": ISSUED_TOKEN, "token_type": "bearer" })).into_response()
    } else {
        detail(StatusCode::UNAUTHORIZED, "Invalid OTP or mobile number")
    }
}

#[derive(Deserialize)]
struct RunsQuery {
    page_size: Option<usize>,
}

fn sample_runs() -> Vec<Value> {
    vec![
        json!({
            "job_id": "job-001",
            "sender_id": "Super Admin",
            "status": "SUCCESS",
            "started_at": "2025-06-01T08:00:00+00:00",
            "doc_filename": "menu.pdf"
        }),
        json!({
            "job_id": "job-002",
            "sender_id": "Super Admin",
            "status": "IN-PROGRESS",
            "started_at": "2025-06-02T09:15:30.500000",
            "doc_filename": "prices.txt"
        }),
    ]
}

async fn get_runs(
    State(mock): State<MockAdmin>,
    headers: HeaderMap,
    Query(query): Query<RunsQuery>,
) -> Response {
    let mut recorded = HashMap::new();
    if let Some(size) = query.page_size {
        recorded.insert("page_size".to_string(), size.to_string());
    }
    mock.record(Hit {
        method: "GET".to_string(),
        path: "/api/admin/runs".to_string(),
        authorization: header_value(&headers, header::AUTHORIZATION),
        query: recorded,
        ..Default::default()
    });

    if !authorized(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "Could not validate credentials");
    }

    // Server default page size is 1
    let limit = query.page_size.unwrap_or(1);
    let runs: Vec<Value> = sample_runs().into_iter().take(limit).collect();
    Json(Value::Array(runs)).into_response()
}

async fn get_me(State(mock): State<MockAdmin>, headers: HeaderMap) -> Response {
    mock.record(Hit {
        method: "GET".to_string(),
        path: "/api/admin/me".to_string(),
        authorization: header_value(&headers, header::AUTHORIZATION),
        ..Default::default()
    });

    if !authorized(&headers) {
        return detail(StatusCode::UNAUTHORIZED, "Could not validate credentials");
    }
    Json(json!({ "name": "Super Admin", "role": "admin" })).into_response()
}

/// Start the mock on an ephemeral port; returns its origin and hit log.
pub async fn spawn_mock_admin() -> (String, MockAdmin) {
    let mock = MockAdmin::default();
    let app = Router::new()
        .route("/api/admin/otp", post(post_otp))
        .route("/api/admin/token", post(post_token))
        .route("/api/admin/runs", get(get_runs))
        .route("/api/admin/me", get(get_me))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), mock)
}
