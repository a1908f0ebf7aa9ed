//! Classification of remote error responses.
//!
//! The service names its failures with exception identifiers such as
//! `PostcodeNl_Service_PostcodeAddress_AddressNotFoundException`. The
//! tables below map those identifiers onto the local [`Error`] taxonomy;
//! identifiers that are not listed degrade to [`Error::Service`] so new
//! remote error classes never go unclassified.

use serde::Deserialize;

use crate::error::Error;

/// Error body shape returned by the service on non-2xx statuses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Exception identifier, e.g.
    /// `PostcodeNl_Controller_Address_InvalidPostcodeException`.
    pub exception_id: String,

    /// Human-readable message accompanying the exception.
    #[serde(default)]
    pub exception: String,
}

/// Identifiers raised by the service's basic-authentication plugin.
const AUTHENTICATION_TOKENS: &[&str] = &[
    "PostcodeNl_Controller_Plugin_HttpBasicAuthentication_NotAuthorizedException",
    "PostcodeNl_Controller_Plugin_HttpBasicAuthentication_PasswordNotCorrectException",
];

/// Identifiers for rejected postcode, house-number, or parameter input.
const INPUT_TOKENS: &[&str] = &[
    "PostcodeNl_Controller_Address_InvalidPostcodeException",
    "PostcodeNl_Controller_Address_InvalidHouseNumberException",
    "PostcodeNl_Controller_Address_NoPostcodeSpecifiedException",
    "PostcodeNl_Controller_Address_NoHouseNumberSpecifiedException",
    "React_Controller_Action_InvalidParameterException",
];

/// Identifier for a well-formed lookup that matched no address.
const ADDRESS_NOT_FOUND_TOKEN: &str = "PostcodeNl_Service_PostcodeAddress_AddressNotFoundException";

/// Map a service exception identifier onto the local error taxonomy.
#[must_use]
pub fn classify_exception(exception_id: &str, message: &str) -> Error {
    // Fall back to the identifier itself when the service sent no message,
    // so the diagnostic detail is never lost.
    let message = if message.is_empty() {
        exception_id.to_string()
    } else {
        message.to_string()
    };

    if AUTHENTICATION_TOKENS.contains(&exception_id) {
        Error::Authentication(message)
    } else if INPUT_TOKENS.contains(&exception_id) {
        Error::InputInvalid(message)
    } else if exception_id == ADDRESS_NOT_FOUND_TOKEN {
        Error::AddressNotFound(message)
    } else {
        Error::Service(message)
    }
}

/// Classify a non-2xx response from its status code and raw body.
///
/// A body that is not a structured object carrying an exception identifier
/// yields [`Error::Client`] naming the raw status code; such a response is
/// the service misbehaving in a way the caller cannot act on.
#[must_use]
pub fn classify_response(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => classify_exception(&response.exception_id, &response.exception),
        Err(_) => Error::Client(format!(
            "Unexpected server response, HTTP status code {status}"
        )),
    }
}
