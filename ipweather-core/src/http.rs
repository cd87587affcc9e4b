//! Shared HTTP client construction.

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::config::Config;
use crate::errors::{CliError, Result};

/// User agent sent on every outbound call.
pub const USER_AGENT: &str = concat!("ipweather/", env!("CARGO_PKG_VERSION"));

/// Build the client used by both upstream calls: connect and read timeouts
/// from config, JSON accept header, versioned user agent.
///
/// The client is internally reference-counted; clones share one connection
/// pool and are safe to use from concurrent invocations.
pub fn build_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .connect_timeout(config.network.connect_timeout())
        .timeout(config.network.read_timeout())
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .map_err(|e| {
            let message = format!("failed to build HTTP client: {e}");
            CliError::runtime_with_source(message, e)
        })?;

    debug!(
        connect_timeout_ms = config.network.connect_timeout_ms,
        read_timeout_ms = config.network.read_timeout_ms,
        user_agent = USER_AGENT,
        "HTTP client configured"
    );

    Ok(client)
}
