//! brave-search-relay entry point
//!
//! Dual-transport server: binds the HTTP listener (SSE subscribers and the
//! manual trigger route) first, then serves the MCP tool over stdio. Both
//! transports must be live before the relay is considered ready.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use brave_search_relay::config::Settings;
use brave_search_relay::http_server::{self, AppState};
use brave_search_relay::hub::{ConnectionRegistry, EventHub};
use brave_search_relay::mcp_server::SearchRelayServer;
use brave_search_relay::search::SearchClient;

/// Brave Search Relay
#[derive(Parser, Debug)]
#[command(name = "brave-search-relay")]
#[command(about = "Brave Search bridge: MCP web-search tool with live SSE event fan-out")]
struct Args {
    /// Port for the HTTP transport
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Host the HTTP transport binds to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr - stdout must stay pure JSON-RPC for the MCP channel
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("brave_search_relay=info".parse()?)
                .add_directive("rmcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // A missing credential is fatal before either transport starts
    let settings = Settings::resolve(args.host, args.port)?;

    tracing::info!(
        "Starting brave-search-relay v{}",
        env!("CARGO_PKG_VERSION")
    );

    let registry = Arc::new(ConnectionRegistry::new());
    let hub = Arc::new(EventHub::new(Arc::clone(&registry)));
    let search = Arc::new(SearchClient::new(settings.api_key.clone()));

    // HTTP transport comes up first
    let listener = TcpListener::bind(settings.listen_addr()).await?;
    tracing::info!(
        "HTTP transport listening on http://{}",
        listener.local_addr()?
    );

    let app = http_server::router(Arc::new(AppState {
        registry: Arc::clone(&registry),
        search: Arc::clone(&search),
    }));
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    // Then the duplex channel; both transports are live from here on
    let service = SearchRelayServer::new(search, hub).serve(stdio()).await?;
    tracing::info!("MCP server initialized, waiting for requests...");

    tokio::select! {
        result = service.waiting() => {
            result?;
            tracing::info!("MCP client closed the session");
        }
        _ = tokio::signal::ctrl_c() => {
            // Dropping the running service tears the duplex channel down
            // before the process exits; in-flight HTTP connections are not
            // drained.
            tracing::info!("Interrupt received, closing MCP transport");
        }
    }

    Ok(())
}
