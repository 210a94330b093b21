//! Per-vendor transforms from upstream payloads to normalized GBFS feeds.
//!
//! Adapters never do I/O and never read the clock. They take already
//! decoded native types plus a [`Stamp`](crate::gbfs::Stamp) and return
//! normalized envelopes, with every station id remapped through
//! [`Operator::station_id`].

pub mod jcdecaux;
pub mod kolumbus;
pub mod pricing;
pub mod smartbike;
pub mod urban_sharing;

use crate::fetch::redact_url;
use crate::gbfs::FeedKind;
use crate::operators::Operator;

/// Upstream payload decoded fine but cannot be turned into a feed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot build {kind} for {operator}: {reason}")]
pub struct ParseError {
    pub operator: Operator,
    pub kind: FeedKind,
    /// Upstream the payload came from, when known.
    pub url: Option<String>,
    pub reason: String,
}

impl ParseError {
    pub fn new(operator: Operator, kind: FeedKind, reason: impl Into<String>) -> Self {
        Self {
            operator,
            kind,
            url: None,
            reason: reason.into(),
        }
    }

    /// Attach the upstream URL the payload was fetched from, minus its query.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(redact_url(url));
        self
    }
}

/// Vendors send ids as either JSON strings or numbers.
pub(crate) mod native_id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    impl From<Raw> for String {
        fn from(raw: Raw) -> Self {
            match raw {
                Raw::Str(s) => s,
                Raw::Int(n) => n.to_string(),
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Raw::deserialize(deserializer).map(String::from)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Option::<Raw>::deserialize(deserializer).map(|raw| raw.map(String::from))
    }
}
