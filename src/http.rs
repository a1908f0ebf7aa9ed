//! Blocking HTTP transport for the lookup call.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("postcode-nl-rs/", env!("CARGO_PKG_VERSION"));

/// Raw outcome of one HTTP exchange, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body, verbatim.
    pub body: String,
}

/// Create a configured HTTP client.
///
/// # Errors
/// Returns [`Error::Client`] when the underlying client cannot be built.
pub fn create_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs()))
        .timeout(Duration::from_secs(config.total_timeout_secs()))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Client(format!("Failed to create HTTP client: {e}")))
}

/// Perform one GET with basic authentication.
///
/// Only transport-level failures (connect, timeout, TLS) error here; any
/// HTTP status comes back as a [`RawResponse`] for the caller to classify.
///
/// # Errors
/// Returns [`Error::Client`] carrying the transport error detail.
pub fn get(client: &Client, url: &str, key: &str, secret: &str) -> Result<RawResponse> {
    let response = client
        .get(url)
        .basic_auth(key, Some(secret))
        .header("Accept", "application/json")
        .send()
        .map_err(|e| Error::Client(format!("Connection error: {e}")))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|e| Error::Client(format!("Failed to read response body: {e}")))?;

    tracing::debug!(status, bytes = body.len(), "Received response");

    Ok(RawResponse { status, body })
}
