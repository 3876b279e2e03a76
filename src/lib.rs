//! Brave Search Relay
//!
//! A bridge that exposes one web-search capability through two transports at
//! once: an MCP tool served to an automation agent over the stdio duplex
//! channel, and a live Server-Sent Events stream served to HTTP clients.
//!
//! Tool invocations run against the Brave Search API. Every outcome,
//! success or failure, is normalized into a tagged [`hub::Envelope`] and
//! fanned out to all connected subscribers with best-effort delivery; the
//! direct caller receives the same document (or fault) as its response.
//!
//! # Components
//!
//! - [`hub`] — subscriber registry and broadcast fan-out
//! - [`mcp_server`] — the `brave_web_search` tool over the MCP channel
//! - [`http_server`] — `GET /sse` subscriptions and the `POST /messages`
//!   manual trigger
//! - [`search`] — the upstream Brave Search API client
//! - [`config`] — startup configuration (credential, listen address)

pub mod config;
pub mod error;
pub mod http_server;
pub mod hub;
pub mod mcp_server;
pub mod search;

// Re-export commonly used types
pub use config::Settings;
pub use error::{RelayError, Result};
pub use http_server::{router, AppState};
pub use hub::{ConnectionRegistry, Envelope, EventHub, SubscriberId};
pub use mcp_server::{SearchRelayServer, WebSearchRequest};
pub use search::{clamp_count, SearchClient, DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};
