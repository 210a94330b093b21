//! Background polling of every operator.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error};

use crate::fetch::Transport;
use crate::operators::Operator;
use crate::service::{FeedService, PollReport};

/// Refreshes all operators on a fixed interval.
///
/// Every operator runs its own loop with its own interval, so a slow upstream
/// only delays its own feeds. There are no retries within a tick.
pub struct Poller<T> {
    service: Arc<FeedService<T>>,
    interval: Duration,
}

impl<T: Transport> Poller<T> {
    pub fn new(service: Arc<FeedService<T>>, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Poll every operator once and wait for all of them.
    pub async fn poll_once(&self) -> Vec<PollReport> {
        let handles = Operator::ALL.map(|operator| {
            let service = Arc::clone(&self.service);
            tokio::spawn(async move { service.poll_operator(operator).await })
        });

        let mut reports = Vec::with_capacity(handles.len());
        for (operator, joined) in Operator::ALL.into_iter().zip(join_all(handles).await) {
            match joined {
                Ok(report) => reports.push(report),
                Err(e) => error!(operator = %operator, error = %e, "poll task panicked"),
            }
        }
        reports
    }

    /// Poll forever. The first tick of every operator is immediate.
    pub async fn run(self) {
        let loops = Operator::ALL.map(|operator| {
            tokio::spawn(poll_loop(Arc::clone(&self.service), operator, self.interval))
        });
        for (operator, joined) in Operator::ALL.into_iter().zip(join_all(loops).await) {
            if let Err(e) = joined {
                error!(operator = %operator, error = %e, "poll loop stopped");
            }
        }
    }
}

async fn poll_loop<T: Transport>(service: Arc<FeedService<T>>, operator: Operator, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let service = Arc::clone(&service);
        // A panicking poll must not end the loop.
        match tokio::spawn(async move { service.poll_operator(operator).await }).await {
            Ok(report) => debug!(operator = %operator, failed = report.failed.len(), "poll tick complete"),
            Err(e) => error!(operator = %operator, error = %e, "poll task panicked"),
        }
    }
}
