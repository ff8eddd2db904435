/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration
 * from environment variables, with sensible defaults for local
 * development.
 *
 * # Configuration Sources
 *
 * - `SERVER_PORT` - Listen port (default 3000)
 * - `TRADEBOARD_OWNER_TOKEN` - Optional owner credential; when unset,
 *   no caller resolves to the owner who-key
 * - `TRADEBOARD_SNAPSHOT` - Optional path to the JSON snapshot file;
 *   when unset, the store is memory-only
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent server startup.
 * Features whose configuration is missing are simply disabled.
 */

use std::path::PathBuf;

use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Owner bearer token; `None` disables owner resolution
    pub owner_token: Option<String>,
    /// JSON snapshot path; `None` disables persistence
    pub snapshot_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let owner_token = std::env::var("TRADEBOARD_OWNER_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        if owner_token.is_none() {
            tracing::warn!("TRADEBOARD_OWNER_TOKEN not set. Owner resolution disabled.");
        }

        let snapshot_path = std::env::var("TRADEBOARD_SNAPSHOT")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        match &snapshot_path {
            Some(path) => tracing::info!("Snapshot persistence enabled: {}", path.display()),
            None => tracing::warn!("TRADEBOARD_SNAPSHOT not set. Running memory-only."),
        }

        Self {
            port,
            owner_token,
            snapshot_path,
        }
    }

    /// Whether the request carries the owner credential
    ///
    /// Constant comparison of the bearer token against the configured
    /// owner token. Token infrastructure beyond this single compare is
    /// an external collaborator's concern.
    pub fn is_owner(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = &self.owner_token else {
            return false;
        };
        headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|token| constant_eq(token.as_bytes(), expected.as_bytes()))
            .unwrap_or(false)
    }
}

/// Constant-time byte comparison
fn constant_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token(token: &str) -> ServerConfig {
        ServerConfig {
            port: 3000,
            owner_token: Some(token.to_string()),
            snapshot_path: None,
        }
    }

    #[test]
    fn test_is_owner_with_valid_token() {
        let config = config_with_token("secret");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer secret".parse().unwrap());
        assert!(config.is_owner(&headers));
    }

    #[test]
    fn test_is_owner_with_wrong_token() {
        let config = config_with_token("secret");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer nope".parse().unwrap());
        assert!(!config.is_owner(&headers));
    }

    #[test]
    fn test_is_owner_without_header() {
        let config = config_with_token("secret");
        assert!(!config.is_owner(&HeaderMap::new()));
    }

    #[test]
    fn test_is_owner_disabled_when_unconfigured() {
        let config = ServerConfig::default();
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer anything".parse().unwrap());
        assert!(!config.is_owner(&headers));
    }

    #[test]
    fn test_constant_eq() {
        assert!(constant_eq(b"abc", b"abc"));
        assert!(!constant_eq(b"abc", b"abd"));
        assert!(!constant_eq(b"abc", b"abcd"));
    }
}
