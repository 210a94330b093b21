//! Feed cache keyed by `(operator, feed kind)`.
//!
//! Entries are never evicted by age: a stale entry is still served when a
//! refresh fails. Freshness is a separate query against the configured TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::time::Instant;

use crate::gbfs::{Feed, FeedKind};
use crate::operators::Operator;

type FeedKey = (Operator, FeedKind);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Age below which an entry counts as fresh.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(61),
            max_capacity: 64,
        }
    }
}

/// A stored feed and when it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub feed: Arc<Feed>,
    pub stored_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

/// Latest normalized feed per operator and feed kind.
pub struct FeedCache {
    entries: MokaCache<FeedKey, CacheEntry>,
    ttl: Duration,
}

impl FeedCache {
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder().max_capacity(config.max_capacity).build();

        Self {
            entries,
            ttl: config.ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Latest feed for the key, fresh or not.
    pub async fn get(&self, operator: Operator, kind: FeedKind) -> Option<Arc<Feed>> {
        self.entries.get(&(operator, kind)).await.map(|e| e.feed)
    }

    pub async fn entry(&self, operator: Operator, kind: FeedKind) -> Option<CacheEntry> {
        self.entries.get(&(operator, kind)).await
    }

    /// Store a feed under its own kind, replacing any previous entry.
    pub async fn put(&self, operator: Operator, feed: Feed) -> Arc<Feed> {
        let feed = Arc::new(feed);
        let entry = CacheEntry {
            feed: Arc::clone(&feed),
            stored_at: Instant::now(),
        };
        self.entries.insert((operator, feed.kind()), entry).await;
        feed
    }

    /// True iff an entry exists and is younger than the TTL.
    ///
    /// A derived feed (see [`AdapterKind::input_of`]) is only fresh while its
    /// input feed is fresh too.
    ///
    /// [`AdapterKind::input_of`]: crate::operators::AdapterKind::input_of
    pub async fn is_fresh(&self, operator: Operator, kind: FeedKind) -> bool {
        if !self.is_entry_fresh(operator, kind).await {
            return false;
        }
        match operator.adapter_kind().input_of(kind) {
            Some(input) => self.is_entry_fresh(operator, input).await,
            None => true,
        }
    }

    async fn is_entry_fresh(&self, operator: Operator, kind: FeedKind) -> bool {
        self.entries
            .get(&(operator, kind))
            .await
            .is_some_and(|e| e.is_fresh(self.ttl))
    }
}
