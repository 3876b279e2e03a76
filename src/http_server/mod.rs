//! HTTP transport
//!
//! Serves the two HTTP-facing entry points of the relay:
//!
//! - `GET /sse` — persistent event stream; the client receives a private
//!   `{"type":"connected"}` frame, then every envelope broadcast while it
//!   stays connected.
//! - `POST /messages` — manual search trigger for callers outside the MCP
//!   channel; returns the provider document directly and does not broadcast.

pub mod routes;
pub mod subscriber;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::hub::ConnectionRegistry;
use crate::search::SearchClient;

pub use routes::TriggerRequest;
pub use subscriber::SubscriberStream;

/// Shared state handed to the HTTP handlers
pub struct AppState {
    pub registry: Arc<ConnectionRegistry>,
    pub search: Arc<SearchClient>,
}

/// Build the HTTP router for both endpoints
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sse", get(routes::subscribe))
        .route("/messages", post(routes::trigger))
        .with_state(state)
}
