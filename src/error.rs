//! Error types for the client.
//!
//! The remote service reports failures through a wide vocabulary of
//! exception identifiers. Every failure, remote or local, resolves to
//! exactly one variant of [`Error`] before it reaches the caller, so
//! callers never need to know the service's internal exception names.

use thiserror::Error;

/// Main error type for address lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller-supplied postcode or house number failed validation,
    /// either locally or at the remote service.
    #[error("Invalid input: {0}")]
    InputInvalid(String),

    /// The input was valid but no matching address exists.
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// The application key/secret pair was rejected.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Local fault: bad configuration, transport failure, or a response
    /// this client could not make sense of.
    #[error("Client error: {0}")]
    Client(String),

    /// Remote-side fault not otherwise classified.
    #[error("Service error: {0}")]
    Service(String),
}

/// The five failure categories, as a plain discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input rejected; recoverable by correcting the input.
    InputInvalid,
    /// Valid input, no matching address; an expected outcome.
    AddressNotFound,
    /// Credentials rejected; a configuration fault.
    Authentication,
    /// Local transport or parsing fault.
    Client,
    /// Unclassified remote fault; possibly transient.
    Service,
}

impl Error {
    /// The failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputInvalid(_) => ErrorKind::InputInvalid,
            Self::AddressNotFound(_) => ErrorKind::AddressNotFound,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Client(_) => ErrorKind::Client,
            Self::Service(_) => ErrorKind::Service,
        }
    }

    /// The human-readable detail, without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InputInvalid(m)
            | Self::AddressNotFound(m)
            | Self::Authentication(m)
            | Self::Client(m)
            | Self::Service(m) => m,
        }
    }
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, Error>;
