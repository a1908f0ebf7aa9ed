//! The lookup client that ties all components together.

use std::sync::Arc;

use chrono::Utc;
use reqwest::blocking::Client as HttpClient;

use crate::classify::classify_response;
use crate::config::{address_url, ClientConfig};
use crate::debug::{DebugSink, Exchange};
use crate::error::{Error, Result};
use crate::http::{self, RawResponse};
use crate::types::{AddressRecord, LookupRequest};

/// Synchronous client for the Postcode.nl address lookup service.
///
/// Holds only immutable configuration and the underlying HTTP client, so
/// one instance can serve lookups from multiple threads; each call is a
/// single independent round trip.
pub struct PostcodeClient {
    config: ClientConfig,
    http: HttpClient,
    debug_sink: Option<Arc<dyn DebugSink>>,
}

impl PostcodeClient {
    /// Create a client from a configuration.
    ///
    /// # Errors
    /// Returns [`Error::Client`] when the underlying HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = http::create_client(&config)?;
        Ok(Self {
            config,
            http,
            debug_sink: None,
        })
    }

    /// Attach a sink that receives a raw snapshot of every exchange,
    /// successful or not.
    #[must_use]
    pub fn with_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.debug_sink = Some(sink);
        self
    }

    /// Look up the address for a postcode and house number.
    ///
    /// The postcode is normalized (surrounding whitespace stripped,
    /// internal spaces removed) and the house number and addition are
    /// trimmed. When `house_number_addition` is empty, the addition is
    /// derived by splitting `house_number`, so `"30a"` and `("30", "a")`
    /// are equivalent inputs. All validation happens before any network
    /// traffic.
    ///
    /// With `strict_addition_validation` set, a response that does not
    /// carry an exactly-matching addition fails with
    /// [`Error::InputInvalid`] listing the additions known for that house
    /// number.
    ///
    /// # Errors
    /// Every failure resolves to exactly one [`ErrorKind`]: rejected
    /// input, address not found, rejected credentials, a local
    /// transport/decoding fault, or an unclassified service fault.
    ///
    /// [`ErrorKind`]: crate::error::ErrorKind
    pub fn lookup(
        &self,
        postcode: &str,
        house_number: &str,
        house_number_addition: &str,
        strict_addition_validation: bool,
    ) -> Result<AddressRecord> {
        let request = LookupRequest::new(
            postcode,
            house_number,
            house_number_addition,
            strict_addition_validation,
        )?;

        let url = address_url(
            self.config.base_url(),
            request.postcode(),
            request.house_number(),
            request.house_number_addition(),
        );

        tracing::debug!(%url, "Looking up address");

        let outcome = http::get(&self.http, &url, self.config.key(), self.config.secret());
        self.record_exchange(&url, &outcome);

        let response = outcome?;

        if !(200..300).contains(&response.status) {
            let error = classify_response(response.status, &response.body);
            tracing::warn!(
                status = response.status,
                kind = ?error.kind(),
                "Lookup failed"
            );
            return Err(error);
        }

        let record = decode_address(&response.body)?;

        if request.strict_addition_validation() && record.house_number_addition.is_none() {
            return Err(invalid_addition_error(&record));
        }

        Ok(record)
    }

    /// Write one exchange snapshot to the debug sink, if attached.
    fn record_exchange(&self, url: &str, outcome: &Result<RawResponse>) {
        let Some(sink) = &self.debug_sink else {
            return;
        };

        let (status, body) = match outcome {
            Ok(response) => (Some(response.status), Some(response.body.clone())),
            Err(_) => (None, None),
        };

        sink.record(Exchange {
            url: url.to_string(),
            status,
            body,
            captured_at: Utc::now(),
        });
    }
}

/// Decode a 2xx body into an address record.
///
/// The body must be a structured object carrying at least the `postcode`
/// field; anything else means the service answered in a shape this client
/// does not understand, and the raw body is preserved for diagnosis.
fn decode_address(body: &str) -> Result<AddressRecord> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| response_not_understood(body))?;

    if value.get("postcode").is_none() {
        return Err(response_not_understood(body));
    }

    serde_json::from_value(value).map_err(|_| response_not_understood(body))
}

fn response_not_understood(body: &str) -> Error {
    Error::Client(format!("Response not understood: {body}"))
}

/// Strict-addition failure, listing the additions the service knows.
fn invalid_addition_error(record: &AddressRecord) -> Error {
    let known: Vec<String> = record
        .house_number_additions
        .iter()
        .map(|a| format!("'{a}'"))
        .collect();

    let message = if known.is_empty() {
        "House number addition is not known for this address, and no additions are known"
            .to_string()
    } else {
        format!(
            "House number addition is not known for this address. Known additions: {}",
            known.join(", ")
        )
    };

    Error::InputInvalid(message)
}
