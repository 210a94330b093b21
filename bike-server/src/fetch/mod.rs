//! Outbound fetching of upstream documents.

mod client;
mod error;
pub mod mock;

pub use client::{CLIENT_IDENTIFIER, HttpClient, HttpClientConfig, Transport, decode, fetch};
pub use error::{FetchError, redact_url};
pub use mock::MockTransport;
