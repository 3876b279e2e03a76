//! Runtime configuration
//!
//! The relay consumes two pieces of process-wide configuration: the Brave
//! API credential and the HTTP listen address. The credential is read from
//! the environment only, never from argv, and its absence is fatal before
//! either transport starts.

use crate::error::{RelayError, Result};

/// Environment variable holding the Brave Search API subscription token
pub const API_KEY_ENV: &str = "BRAVE_API_KEY";

/// Resolved startup configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// Brave Search API subscription token
    pub api_key: String,
    /// Host the HTTP transport binds to
    pub host: String,
    /// Port the HTTP transport binds to
    pub port: u16,
}

impl Settings {
    /// Resolve settings from the environment and the given listen address.
    ///
    /// Fails with [`RelayError::MissingApiKey`] when the credential is unset
    /// or blank.
    pub fn resolve(host: String, port: u16) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| RelayError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(RelayError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            host,
            port,
        })
    }

    /// Listen address for the HTTP transport
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_formatting() {
        let settings = Settings {
            api_key: "token".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(settings.listen_addr(), "127.0.0.1:8080");
    }
}
