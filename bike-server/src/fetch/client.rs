//! Upstream HTTP client.
//!
//! Every request carries a fixed `Client-Identifier` header. Concurrency is
//! capped with a semaphore and each request is bounded by a timeout.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use super::error::{FetchError, redact_url};

/// Value sent in the `Client-Identifier` header.
pub const CLIENT_IDENTIFIER: &str = "entur-bikeservice";

const DEFAULT_MAX_CONCURRENT: usize = 16;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Longest body excerpt kept on decode errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Something that can GET a URL and hand back the body.
///
/// Implemented by [`HttpClient`] for real upstreams and by
/// [`MockTransport`](super::mock::MockTransport) in tests.
pub trait Transport: Send + Sync + 'static {
    fn get_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// GET `url` and decode the JSON body as `T`.
pub async fn fetch<T, C>(transport: &C, url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    C: Transport,
{
    let body = transport.get_text(url).await?;
    decode(url, &body)
}

/// Decode a JSON body fetched from `url`.
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        url: redact_url(url),
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
    })
}

/// Configuration for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }
}

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    semaphore: Arc<Semaphore>,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert("Client-Identifier", HeaderValue::from_static(CLIENT_IDENTIFIER));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }
}

impl Transport for HttpClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FetchError::Transport {
                url: redact_url(url),
                message: "client is shutting down".to_string(),
            })?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: redact_url(url),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| request_error(url, e))
    }
}

/// reqwest embeds the full request URL in its messages, so it is dropped here.
fn request_error(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: redact_url(url),
        }
    } else {
        FetchError::Transport {
            url: redact_url(url),
            message: err.without_url().to_string(),
        }
    }
}
