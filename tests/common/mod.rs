//! Common test utilities for brave-search-relay integration tests
//!
//! Provides a stub upstream endpoint (fixed status + body on an ephemeral
//! port) and a frame reader for consuming SSE responses.

#![allow(dead_code)]

use std::time::Duration;

use axum::http::StatusCode;
use axum::Json;

/// Spawn a stub upstream search endpoint and return its URL.
///
/// The stub answers every request with the given status and body, standing in
/// for the Brave API.
pub async fn spawn_stub_upstream(status: u16, body: serde_json::Value) -> String {
    let status = StatusCode::from_u16(status).expect("valid status code");
    let app = axum::Router::new().route(
        "/search",
        axum::routing::get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream serve");
    });
    format!("http://{}/search", addr)
}

/// Read SSE `data:` frames from a streaming response until `n` have arrived.
///
/// Keep-alive comment lines are skipped. Panics if the stream ends or stalls
/// for more than five seconds first.
pub async fn read_frames(response: &mut reqwest::Response, n: usize) -> Vec<serde_json::Value> {
    let mut buffer = String::new();
    let mut frames = Vec::new();
    while frames.len() < n {
        let chunk = tokio::time::timeout(Duration::from_secs(5), response.chunk())
            .await
            .expect("timed out waiting for SSE frame")
            .expect("SSE stream errored")
            .expect("SSE stream ended early");
        buffer.push_str(std::str::from_utf8(&chunk).expect("SSE frames are UTF-8"));

        while let Some(pos) = buffer.find("\n\n") {
            let raw: String = buffer.drain(..pos + 2).collect();
            for line in raw.lines() {
                if let Some(data) = line.strip_prefix("data: ") {
                    frames.push(serde_json::from_str(data).expect("SSE data frame is JSON"));
                }
            }
        }
    }
    frames
}
