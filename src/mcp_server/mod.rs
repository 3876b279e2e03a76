//! MCP Server for brave-search-relay
//!
//! Exposes the relay's single web-search capability as an MCP tool that can
//! be called by AI assistants over the stdio duplex channel. Every invocation
//! that reaches the upstream provider also publishes exactly one envelope to
//! the event-stream subscribers, success or failure.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Deserialize;

use crate::hub::{Envelope, EventHub};
use crate::search::{clamp_count, SearchClient};

// ============================================================================
// Request Types
// ============================================================================

/// Request for a web search
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WebSearchRequest {
    /// The search query
    #[schemars(description = "Search query (max 400 chars, 50 words)")]
    pub query: String,

    /// Number of results to return
    #[schemars(description = "Number of results (1-20, default 10)")]
    pub count: Option<i64>,
}

// ============================================================================
// MCP Server Implementation
// ============================================================================

/// MCP server bridging tool calls to the upstream search API and the
/// subscriber hub
#[derive(Clone)]
pub struct SearchRelayServer {
    /// Upstream search client
    search: Arc<SearchClient>,
    /// Fan-out to event-stream subscribers
    hub: Arc<EventHub>,
    /// Tool router for MCP
    tool_router: ToolRouter<SearchRelayServer>,
}

#[tool_router]
impl SearchRelayServer {
    /// Create a new MCP server instance
    pub fn new(search: Arc<SearchClient>, hub: Arc<EventHub>) -> Self {
        Self {
            search,
            hub,
            tool_router: Self::tool_router(),
        }
    }

    /// Run a web search and publish the outcome to subscribers
    #[tool(
        description = "Performs a web search using the Brave Search API. Returns the raw JSON result document. General queries, news, articles; supports result count control."
    )]
    async fn brave_web_search(
        &self,
        Parameters(request): Parameters<WebSearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.query.trim().is_empty() {
            return Err(McpError::invalid_params("query must not be empty", None));
        }

        let count = clamp_count(request.count);
        match self.search.web_search(&request.query, count).await {
            Ok(result) => {
                self.hub.broadcast(&Envelope::Result {
                    payload: result.clone(),
                });
                let text = serde_json::to_string_pretty(&result)
                    .unwrap_or_else(|_| "{}".to_string());
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                let message = e.to_string();
                self.hub.broadcast(&Envelope::Error {
                    error: message.clone(),
                });
                Err(McpError::internal_error(message, None))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for SearchRelayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "brave-search-relay".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Brave Search Relay".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(MCP_INSTRUCTIONS.to_string()),
        }
    }
}

/// Instructions for AI agents using the relay
const MCP_INSTRUCTIONS: &str = r#"Brave Search Relay - Web Search with Live Event Fan-out

## Purpose
Runs web searches against the Brave Search API and mirrors every outcome to
connected event-stream subscribers.

## Tools
- brave_web_search: Run a web search. Returns the provider's JSON document.
  Every call also publishes a result or error event to all live subscribers.

## Notes
- count is clamped to 1-20; omitted count defaults to 10.
- The result document is forwarded verbatim; its structure is owned by the
  Brave Search API."#;
