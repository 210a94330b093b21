//! Prometheus metrics.
//!
//! Each [`Metrics`] owns its own registry, so tests and multiple services in
//! one process never collide on metric names.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::gbfs::FeedKind;
use crate::operators::Operator;

/// Content type of the Prometheus text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub struct Metrics {
    registry: Registry,
    /// Feed refreshes - labels: operator, feed, outcome
    refreshes_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let refreshes_total = IntCounterVec::new(
            Opts::new("bike_feed_refreshes_total", "Upstream feed refreshes by outcome"),
            &["operator", "feed", "outcome"],
        )?;
        registry.register(Box::new(refreshes_total.clone()))?;

        Ok(Self {
            registry,
            refreshes_total,
        })
    }

    /// Record one refresh attempt.
    pub fn record_refresh(&self, operator: Operator, kind: FeedKind, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.refreshes_total
            .with_label_values(&[operator.name(), kind.as_str(), outcome])
            .inc();
    }

    pub fn refreshes(&self, operator: Operator, kind: FeedKind, success: bool) -> u64 {
        let outcome = if success { "success" } else { "failure" };
        self.refreshes_total
            .with_label_values(&[operator.name(), kind.as_str(), outcome])
            .get()
    }

    /// Render every metric in the text exposition format.
    pub fn encode(&self) -> Result<Vec<u8>, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(buffer)
    }
}
