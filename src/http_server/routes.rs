//! HTTP route handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::sse::{KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;

use crate::http_server::subscriber::SubscriberStream;
use crate::http_server::AppState;
use crate::hub::Envelope;
use crate::search::clamp_count;

/// Manual trigger request body
#[derive(Debug, Deserialize)]
pub struct TriggerRequest {
    pub query: String,
    #[serde(default)]
    pub count: Option<i64>,
}

/// `GET /sse` — open a persistent event stream.
///
/// The connected frame is written into the channel before registration, so
/// it reaches this subscriber only and always precedes any broadcast.
pub async fn subscribe(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (tx, rx) = mpsc::unbounded_channel();
    let _ = tx.send(Envelope::Connected.to_frame());
    let id = state.registry.add(tx);
    tracing::info!("Subscriber {} connected to event stream", id);

    let stream = SubscriberStream::new(id, Arc::clone(&state.registry), rx);
    (
        [(header::CACHE_CONTROL, "no-cache")],
        Sse::new(stream).keep_alive(KeepAlive::default()),
    )
}

/// `POST /messages` — run a search outside the MCP channel.
///
/// Returns the provider document verbatim on success. Unlike the tool path
/// this endpoint never broadcasts; subscribers only observe tool-driven
/// searches.
pub async fn trigger(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TriggerRequest>,
) -> Response {
    if request.query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "query must not be empty" })),
        )
            .into_response();
    }

    let count = clamp_count(request.count);
    match state.search.web_search(&request.query, count).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!("Manual trigger search failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
