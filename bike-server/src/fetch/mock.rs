//! In-memory transport for tests and local development.
//!
//! Serves canned bodies by URL, can be told to fail a URL, and counts
//! every call it receives.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use super::client::Transport;
use super::error::{FetchError, redact_url};

#[derive(Clone, Default)]
pub struct MockTransport {
    bodies: Arc<RwLock<HashMap<String, String>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    hits: Arc<RwLock<HashMap<String, usize>>>,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`, replacing any previous body.
    pub async fn set_body(&self, url: impl Into<String>, body: impl Into<String>) {
        self.bodies.write().await.insert(url.into(), body.into());
    }

    /// Make requests to `url` fail with a transport error.
    pub async fn fail(&self, url: impl Into<String>) {
        self.failing.write().await.insert(url.into());
    }

    /// Hold every response for `url` back by `delay`.
    pub async fn delay(&self, url: impl Into<String>, delay: Duration) {
        self.delays.write().await.insert(url.into(), delay);
    }

    /// Stop failing requests to `url`.
    pub async fn recover(&self, url: &str) {
        self.failing.write().await.remove(url);
    }

    /// Total calls across all URLs, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn calls_to(&self, url: &str) -> usize {
        self.hits.read().await.get(url).copied().unwrap_or(0)
    }
}

impl Transport for MockTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.hits.write().await.entry(url.to_string()).or_default() += 1;

        let delay = self.delays.read().await.get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.read().await.contains(url) {
            return Err(FetchError::Transport {
                url: redact_url(url),
                message: "connection refused".to_string(),
            });
        }

        self.bodies
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: redact_url(url),
                status: 404,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_bodies_and_counts() {
        let mock = MockTransport::new();
        mock.set_body("http://a", "{}").await;

        assert_eq!(mock.get_text("http://a").await.unwrap(), "{}");
        assert_eq!(mock.get_text("http://a").await.unwrap(), "{}");
        assert_eq!(mock.calls(), 2);
        assert_eq!(mock.calls_to("http://a").await, 2);
        assert_eq!(mock.calls_to("http://b").await, 0);
    }

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let mock = MockTransport::new();
        let err = mock.get_text("http://missing").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn failure_injection() {
        let mock = MockTransport::new();
        mock.set_body("http://a", "{}").await;
        mock.fail("http://a").await;
        assert!(matches!(
            mock.get_text("http://a").await,
            Err(FetchError::Transport { .. })
        ));

        mock.recover("http://a").await;
        assert!(mock.get_text("http://a").await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_responses_wait() {
        let mock = MockTransport::new();
        mock.set_body("http://slow", "{}").await;
        mock.delay("http://slow", Duration::from_secs(30)).await;

        let start = tokio::time::Instant::now();
        assert!(mock.get_text("http://slow").await.is_ok());
        assert!(start.elapsed() >= Duration::from_secs(30));
    }

    #[tokio::test]
    async fn errors_do_not_carry_query_secrets() {
        let mock = MockTransport::new();
        let url = "https://example.test/stations?apiKey=TOPSECRETKEY";

        let err = mock.get_text(url).await.unwrap_err();
        assert!(!err.to_string().contains("TOPSECRETKEY"));
        assert_eq!(err.url(), Some("https://example.test/stations"));

        mock.fail(url).await;
        let err = mock.get_text(url).await.unwrap_err();
        assert!(!err.to_string().contains("TOPSECRETKEY"));
    }
}
