//! Client configuration and endpoint URL construction.

use crate::error::{Error, Result};

/// Base URL of the Postcode.nl REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.postcode.nl/rest";

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Default total request timeout in seconds.
pub const DEFAULT_TOTAL_TIMEOUT_SECS: u64 = 10;

/// Immutable configuration for a [`PostcodeClient`](crate::client::PostcodeClient).
///
/// Credentials are checked at construction; everything else carries a
/// default that can be overridden with the `with_*` builders.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    key: String,
    secret: String,
    base_url: String,
    connect_timeout_secs: u64,
    total_timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration from an application key and secret.
    ///
    /// # Errors
    /// Returns [`Error::Client`] when either credential is empty; a missing
    /// credential is a configuration fault, not caller input.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let secret = secret.into();

        if key.is_empty() {
            return Err(Error::Client("Application key is required".to_string()));
        }
        if secret.is_empty() {
            return Err(Error::Client("Application secret is required".to_string()));
        }

        Ok(Self {
            key,
            secret,
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            total_timeout_secs: DEFAULT_TOTAL_TIMEOUT_SECS,
        })
    }

    /// Override the service base URL (without trailing slash).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the connect and total timeouts, in seconds.
    #[must_use]
    pub fn with_timeouts(mut self, connect_secs: u64, total_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.total_timeout_secs = total_secs;
        self
    }

    /// Application key, used as the basic-auth username.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Application secret, used as the basic-auth password.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Connect timeout in seconds.
    #[must_use]
    pub fn connect_timeout_secs(&self) -> u64 {
        self.connect_timeout_secs
    }

    /// Total request timeout in seconds.
    #[must_use]
    pub fn total_timeout_secs(&self) -> u64 {
        self.total_timeout_secs
    }
}

/// Build the address endpoint URL from validated components.
///
/// Each path segment is percent-encoded independently. The addition
/// segment is present even when empty, matching the service's route shape
/// (`.../addresses/2012ES/30/`).
///
/// # Panics
/// Debug builds panic if the postcode or house number was not validated
/// before calling.
#[must_use]
pub fn address_url(base_url: &str, postcode: &str, house_number: &str, addition: &str) -> String {
    debug_assert!(
        crate::postcode::is_valid_format(postcode),
        "postcode should be validated before calling address_url"
    );
    debug_assert!(
        crate::house_number::is_all_digits(house_number),
        "house number should be validated before calling address_url"
    );
    format!(
        "{}/addresses/{}/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(postcode),
        urlencoding::encode(house_number),
        urlencoding::encode(addition),
    )
}
