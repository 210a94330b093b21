//! Application state for the web layer.

use std::sync::Arc;

use crate::service::FeedService;

/// Shared application state.
pub struct AppState<T> {
    /// Feed refresh and cache access
    pub service: Arc<FeedService<T>>,

    /// Base URL written into discovery documents, without a trailing slash
    pub public_base_url: Arc<str>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            public_base_url: Arc::clone(&self.public_base_url),
        }
    }
}

impl<T> AppState<T> {
    pub fn new(service: Arc<FeedService<T>>, public_base_url: &str) -> Self {
        Self {
            service,
            public_base_url: Arc::from(public_base_url.trim_end_matches('/')),
        }
    }
}
