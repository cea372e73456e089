//! In-memory recommendations service for end-to-end client tests.
//!
//! Mirrors the real service's routes and its error shapes: bad bodies get
//! `{"status", "error", "message"}`, misses get only `{"error"}`. Every request
//! is recorded so tests can assert on exactly what went over the wire.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use axum::{
    Json, Router,
    body::{Body, Bytes, to_bytes},
    extract::{Path, RawQuery, Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, put},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use recommend_domain::id::RecommendationId;
use recommend_domain::recommendation::{Recommendation, RecommendationPayload};
use recommend_domain::search::SearchFilter;

/// One request as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Parsed JSON body, `None` when empty or not JSON.
    pub body: Option<Value>,
}

#[derive(Default)]
struct Store {
    records: Vec<Recommendation>,
    last_id: u32,
    requests: Vec<RecordedRequest>,
    failure: Option<(StatusCode, Value)>,
}

/// Shared handle to the mock's data, request log and injected failures.
#[derive(Clone, Default)]
pub struct MockState {
    inner: Arc<Mutex<Store>>,
}

impl MockState {
    fn store(&self) -> MutexGuard<'_, Store> {
        // Poisoning is ignored; the store holds plain data.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Insert a record directly, bypassing HTTP. Returns it with its new id.
    pub fn insert(&self, payload: RecommendationPayload) -> Recommendation {
        let mut store = self.store();
        store.last_id += 1;
        let record = Recommendation {
            id: RecommendationId(store.last_id),
            product_id: payload.product_id,
            recommended_product_id: payload.recommended_product_id,
            recommendation_type: payload.recommendation_type,
            likes: payload.likes.unwrap_or(0),
            available: None,
        };
        store.records.push(record.clone());
        record
    }

    pub fn records(&self) -> Vec<Recommendation> {
        self.store().records.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.store().requests.last().cloned()
    }

    /// Answer the next request with `status` and `body` instead of routing it.
    pub fn fail_next(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.store().failure = Some((status, body));
    }

    fn find(&self, id: u32) -> Option<Recommendation> {
        self.store()
            .records
            .iter()
            .find(|r| r.id.0 == id)
            .cloned()
    }
}

fn not_found(id: u32) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Recommendation with id: {id} was not found") })),
    )
        .into_response()
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "status": 400, "error": "Bad Request", "message": message })),
    )
        .into_response()
}

fn parse_payload(body: &Bytes) -> Result<RecommendationPayload, Response> {
    serde_json::from_slice(body).map_err(|e| bad_request(format!("Invalid recommend: {e}")))
}

// ── Middleware ───────────────────────────────────────────────────────────────

async fn record_request(State(state): State<MockState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let failure = {
        let mut store = state.store();
        store.requests.push(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            body: serde_json::from_slice(&bytes).ok(),
        });
        store.failure.take()
    };
    if let Some((status, body)) = failure {
        return (status, Json(body)).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn list_recommendations(
    State(state): State<MockState>,
    RawQuery(raw_query): RawQuery,
) -> Response {
    let filter: SearchFilter = match raw_query.as_deref().map(serde_qs::from_str).transpose() {
        Ok(filter) => filter.unwrap_or_default(),
        Err(e) => return bad_request(format!("Invalid query: {e}")),
    };
    let rows: Vec<Recommendation> = state
        .records()
        .into_iter()
        .filter(|r| filter.matches(r))
        .collect();
    Json(rows).into_response()
}

async fn get_recommendation(State(state): State<MockState>, Path(id): Path<u32>) -> Response {
    match state.find(id) {
        Some(record) => Json(record).into_response(),
        None => not_found(id),
    }
}

async fn create_recommendation(State(state): State<MockState>, body: Bytes) -> Response {
    let payload = match parse_payload(&body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let record = state.insert(payload);
    let location = format!("/recommendations/{}", record.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(record),
    )
        .into_response()
}

async fn update_recommendation(
    State(state): State<MockState>,
    Path(id): Path<u32>,
    body: Bytes,
) -> Response {
    let payload = match parse_payload(&body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let mut store = state.store();
    let Some(record) = store.records.iter_mut().find(|r| r.id.0 == id) else {
        return not_found(id);
    };
    record.product_id = payload.product_id;
    record.recommended_product_id = payload.recommended_product_id;
    record.recommendation_type = payload.recommendation_type;
    if let Some(likes) = payload.likes {
        record.likes = likes;
    }
    Json(record.clone()).into_response()
}

async fn delete_recommendation(State(state): State<MockState>, Path(id): Path<u32>) -> StatusCode {
    state.store().records.retain(|r| r.id.0 != id);
    StatusCode::NO_CONTENT
}

async fn like_recommendation(State(state): State<MockState>, Path(id): Path<u32>) -> Response {
    let mut store = state.store();
    let Some(record) = store.records.iter_mut().find(|r| r.id.0 == id) else {
        return not_found(id);
    };
    record.likes += 1;
    Json(record.clone()).into_response()
}

async fn reset_recommendations(State(state): State<MockState>) -> StatusCode {
    let mut store = state.store();
    store.records.clear();
    store.last_id = 0;
    StatusCode::NO_CONTENT
}

pub fn build_router(state: MockState) -> Router {
    Router::new()
        .route(
            "/recommendations",
            get(list_recommendations).post(create_recommendation),
        )
        .route("/recommendations/reset", delete(reset_recommendations))
        .route(
            "/recommendations/{id}",
            get(get_recommendation)
                .put(update_recommendation)
                .delete(delete_recommendation),
        )
        .route("/recommendations/{id}/likes", put(like_recommendation))
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The mock service bound to a random local port. Stops when dropped.
pub struct MockServer {
    pub base_url: String,
    pub state: MockState,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn spawn() -> Result<Self> {
        let state = MockState::default();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let base_url = format!("http://127.0.0.1:{port}");

        let router = build_router(state.clone());
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!(error = %e, "mock recommendations service stopped");
            }
        });

        Ok(Self {
            base_url,
            state,
            handle,
        })
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
