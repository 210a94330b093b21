//! Response bodies that are not GBFS feeds.

use serde::Serialize;

use crate::gbfs::{Discovery, DiscoveryFeed, DiscoveryLanguage, FeedKind, FeedResponse, Stamp};
use crate::operators::Operator;

/// `GET /` body.
#[derive(Debug, Serialize)]
pub struct OperatorDirectory {
    pub operators: Vec<OperatorLink>,
}

#[derive(Debug, Serialize)]
pub struct OperatorLink {
    pub name: String,
    /// Discovery document URL
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn feed_url(base_url: &str, operator: Operator, kind: FeedKind) -> String {
    format!("{base_url}/{operator}/{kind}.json")
}

pub fn operator_directory(base_url: &str) -> OperatorDirectory {
    OperatorDirectory {
        operators: Operator::ALL
            .iter()
            .map(|&op| OperatorLink {
                name: op.name().to_string(),
                url: feed_url(base_url, op, FeedKind::Gbfs),
            })
            .collect(),
    }
}

/// Discovery document listing the feeds served for `operator`.
pub fn discovery(base_url: &str, operator: Operator, stamp: Stamp) -> FeedResponse<Discovery> {
    let feeds = FeedKind::SERVED
        .iter()
        .map(|&kind| DiscoveryFeed {
            name: kind.to_string(),
            url: feed_url(base_url, operator, kind),
        })
        .collect();
    stamp.wrap(Discovery {
        nb: DiscoveryLanguage { feeds },
    })
}
