//! Error types for brave-search-relay

use thiserror::Error;

/// Main error type for relay operations
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("BRAVE_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("Brave API error: {status}")]
    UpstreamStatus { status: u16 },

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;
