//! Endpoint configuration for the client.
//!
//! # Design
//! One value, resolved once: the base URL every `/api/...` path is joined
//! under. The primary constructor takes the endpoint explicitly so tests
//! can point a client at arbitrary servers; `from_env` covers the
//! deployment case where the endpoint comes from the environment. There is
//! no runtime reconfiguration — a client keeps the endpoint it was built
//! with.

use std::env;

/// Environment variable holding the base endpoint URL.
pub const ENDPOINT_VAR: &str = "BOARD_API_ENDPOINT";

/// Fallback when `BOARD_API_ENDPOINT` is unset: the development server
/// address.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

/// Base-endpoint configuration, fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
}

impl ApiConfig {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    /// Resolve the endpoint from `BOARD_API_ENDPOINT`, falling back to
    /// `http://localhost:3000`. The variable is read once here; later
    /// changes to the environment do not affect an existing client.
    pub fn from_env() -> Self {
        let endpoint = env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self { endpoint }
    }
}
