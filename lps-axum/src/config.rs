//! Configuration types for the Axum HTTP server.
//!
//! This module provides configuration options for the REST API server,
//! including network binding, CORS and request timeouts.

use serde::{Deserialize, Serialize};
use std::{
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use lps_axum::config::AxumConfig;
/// use std::time::Duration;
///
/// // Use default configuration
/// let config = AxumConfig::default();
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     allowed_origins: vec!["https://pricing.example.com".into()],
///     request_timeout: Duration::from_secs(2),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Origins allowed to make cross-origin requests (empty admits any origin)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// How long a request may take before it is answered with 408
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            allowed_origins: Vec::new(),
            request_timeout: default_request_timeout(),
        }
    }
}
