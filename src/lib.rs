//! Client for the Postcode.nl address lookup API.
//!
//! Resolves a Dutch postcode and house number to a normalized address
//! record (street, city, geocoordinates, BAG identifiers) over a single
//! synchronous HTTPS round trip with basic authentication.
//!
//! Free-form house numbers such as `"30a"`, `"30 rood"` or `"30-II"` are
//! split into a numeric part and an addition before the request is built,
//! and the service's error vocabulary is mapped onto the five-kind
//! [`ErrorKind`] taxonomy so callers never see remote exception names.
//!
//! # Example
//!
//! ```no_run
//! use postcode_nl::{ClientConfig, PostcodeClient};
//!
//! # fn main() -> postcode_nl::Result<()> {
//! let config = ClientConfig::new("<application key>", "<application secret>")?;
//! let client = PostcodeClient::new(config)?;
//!
//! let address = client.lookup("2012 ES", "30", "", false)?;
//! println!("{} {}, {}", address.street, address.house_number, address.city);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Client configuration and endpoint URL construction
//! - [`error`]: Error taxonomy and Result alias
//! - [`postcode`]: Postcode normalization and format validation
//! - [`house_number`]: House-number splitting
//! - [`classify`]: Mapping of remote error responses onto the local taxonomy
//! - [`http`]: Blocking HTTP transport
//! - [`types`]: Request and address record types
//! - [`debug`]: Optional raw request/response capture
//! - [`client`]: The lookup client

pub mod classify;
pub mod client;
pub mod config;
pub mod debug;
pub mod error;
pub mod house_number;
pub mod http;
pub mod postcode;
pub mod types;

// Re-export the main entry points
pub use client::PostcodeClient;
pub use config::ClientConfig;
pub use debug::{DebugSink, Exchange, MemorySink};
pub use error::{Error, ErrorKind, Result};
pub use types::{AddressRecord, LookupRequest};
