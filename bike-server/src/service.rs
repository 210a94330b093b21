//! Fetch, normalize and store feeds.
//!
//! [`FeedService::refresh`] is the single refresh path shared by the poller
//! and by requests that find a stale cache entry.

use std::sync::Arc;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::adapters::{ParseError, jcdecaux, kolumbus, pricing, smartbike, urban_sharing};
use crate::cache::FeedCache;
use crate::fetch::{FetchError, Transport, fetch};
use crate::gbfs::{Feed, FeedKind, Stamp};
use crate::metrics::Metrics;
use crate::operators::{AdapterKind, Operator, Registry};
use crate::token::{TokenError, TokenManager};

/// Errors from refreshing one feed.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// The operator never produces this feed
    #[error("{operator} has no {kind} feed")]
    Unsupported { operator: Operator, kind: FeedKind },

    /// An API key or client secret is not configured
    #[error("{operator} is missing credentials for {kind}")]
    MissingCredentials { operator: Operator, kind: FeedKind },

    #[error("fetching {kind} for {operator}: {source}")]
    Fetch {
        operator: Operator,
        kind: FeedKind,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("access token for {operator}: {source}")]
    Token {
        operator: Operator,
        #[source]
        source: TokenError,
    },
}

/// No data has ever been stored for a feed and a refresh just failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no {kind} available for {operator}")]
pub struct FeedNotFound {
    pub operator: Operator,
    pub kind: FeedKind,
}

/// Outcome of one poll of an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    pub operator: Operator,
    pub refreshed: Vec<FeedKind>,
    pub failed: Vec<FeedKind>,
}

pub struct FeedService<T> {
    transport: Arc<T>,
    registry: Arc<Registry>,
    cache: Arc<FeedCache>,
    tokens: TokenManager<T>,
    metrics: Arc<Metrics>,
}

impl<T: Transport> FeedService<T> {
    pub fn new(
        transport: Arc<T>,
        registry: Arc<Registry>,
        cache: Arc<FeedCache>,
        tokens: TokenManager<T>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            transport,
            registry,
            cache,
            tokens,
            metrics,
        }
    }

    pub fn cache(&self) -> &FeedCache {
        &self.cache
    }

    pub fn tokens(&self) -> &TokenManager<T> {
        &self.tokens
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Cached feed if fresh, otherwise refresh it now.
    ///
    /// A failed refresh falls back to the stale entry when there is one.
    pub async fn get_or_refresh(
        &self,
        operator: Operator,
        kind: FeedKind,
    ) -> Result<Arc<Feed>, FeedNotFound> {
        if self.cache.is_fresh(operator, kind).await {
            if let Some(feed) = self.cache.get(operator, kind).await {
                return Ok(feed);
            }
        }

        match self.refresh(operator, kind).await {
            Ok(feed) => Ok(feed),
            Err(e) => {
                if !matches!(e, RefreshError::Unsupported { .. }) {
                    warn!(operator = %operator, feed = %kind, error = %e, "refresh failed, serving cached data if any");
                }
                self.cache
                    .get(operator, kind)
                    .await
                    .ok_or(FeedNotFound { operator, kind })
            }
        }
    }

    /// Fetch, normalize and store one feed, returning what was stored.
    ///
    /// Single-call upstreams store both station feeds from one fetch. For
    /// Smartbike, station information first refreshes station status.
    /// Nothing is stored for `kind` unless the whole refresh succeeds. Every
    /// attempt on a feed the operator has is counted in [`Metrics`].
    pub async fn refresh(&self, operator: Operator, kind: FeedKind) -> Result<Arc<Feed>, RefreshError> {
        let result = self.refresh_feed(operator, kind).await;
        if !matches!(result, Err(RefreshError::Unsupported { .. })) {
            self.metrics.record_refresh(operator, kind, result.is_ok());
        }
        result
    }

    async fn refresh_feed(&self, operator: Operator, kind: FeedKind) -> Result<Arc<Feed>, RefreshError> {
        let stamp = Stamp::now(self.cache.ttl());

        if kind == FeedKind::SystemPricingPlans {
            return Ok(self.cache.put(operator, pricing::pricing_plans(operator).into()).await);
        }
        if matches!(kind, FeedKind::Gbfs | FeedKind::FreeBikeStatus) {
            return Err(RefreshError::Unsupported { operator, kind });
        }

        match operator.adapter_kind() {
            AdapterKind::UrbanSharing => self.refresh_urban_sharing(operator, kind, stamp).await,
            AdapterKind::Kolumbus => self.refresh_kolumbus(operator, kind, stamp).await,
            AdapterKind::JcDecaux => self.refresh_jcdecaux(operator, kind, stamp).await,
            AdapterKind::SmartBike => self.refresh_smartbike(operator, kind, stamp).await,
        }
    }

    /// Refresh every poll unit of an operator concurrently.
    ///
    /// Failures are logged and reported; they never stop the other units.
    pub async fn poll_operator(&self, operator: Operator) -> PollReport {
        let units = operator.adapter_kind().poll_units();
        let results = join_all(units.iter().map(|&kind| async move {
            (kind, self.refresh(operator, kind).await)
        }))
        .await;

        let mut report = PollReport {
            operator,
            refreshed: Vec::new(),
            failed: Vec::new(),
        };
        for (kind, result) in results {
            match result {
                Ok(_) => report.refreshed.push(kind),
                Err(e) => {
                    warn!(operator = %operator, feed = %kind, error = %e, "poll failed");
                    report.failed.push(kind);
                }
            }
        }
        debug!(
            operator = %operator,
            refreshed = report.refreshed.len(),
            failed = report.failed.len(),
            "polled operator"
        );
        report
    }

    async fn refresh_urban_sharing(
        &self,
        operator: Operator,
        kind: FeedKind,
        stamp: Stamp,
    ) -> Result<Arc<Feed>, RefreshError> {
        let url = self.url(operator, kind, None)?;
        let feed: Feed = match kind {
            FeedKind::SystemInformation => {
                urban_sharing::to_system_information(self.get(operator, kind, &url).await?, stamp).into()
            }
            FeedKind::StationInformation => urban_sharing::to_station_information(
                operator,
                self.get(operator, kind, &url).await?,
                stamp,
            )
            .into(),
            FeedKind::StationStatus => urban_sharing::to_station_status(
                operator,
                self.get(operator, kind, &url).await?,
                stamp,
            )
            .into(),
            _ => return Err(RefreshError::Unsupported { operator, kind }),
        };
        Ok(self.cache.put(operator, feed).await)
    }

    async fn refresh_kolumbus(
        &self,
        operator: Operator,
        kind: FeedKind,
        stamp: Stamp,
    ) -> Result<Arc<Feed>, RefreshError> {
        if kind == FeedKind::SystemInformation {
            return Ok(self.cache.put(operator, kolumbus::system_information(stamp).into()).await);
        }

        let url = self.url(operator, kind, None)?;
        let parkings: Vec<kolumbus::Parking> = self.get(operator, kind, &url).await?;
        let information = kolumbus::to_station_information(&parkings, stamp);
        let status = kolumbus::to_station_status(&parkings, stamp);
        self.store_station_pair(operator, kind, information.into(), status.into())
            .await
    }

    async fn refresh_jcdecaux(
        &self,
        operator: Operator,
        kind: FeedKind,
        stamp: Stamp,
    ) -> Result<Arc<Feed>, RefreshError> {
        if kind == FeedKind::SystemInformation {
            return Ok(self.cache.put(operator, jcdecaux::system_information(stamp).into()).await);
        }

        let url = self.url(operator, kind, None)?;
        let stations: Vec<jcdecaux::Station> = self.get(operator, kind, &url).await?;
        let information = jcdecaux::to_station_information(operator, &stations, stamp);
        let status = jcdecaux::to_station_status(operator, &stations, stamp);
        self.store_station_pair(operator, kind, information.into(), status.into())
            .await
    }

    async fn refresh_smartbike(
        &self,
        operator: Operator,
        kind: FeedKind,
        stamp: Stamp,
    ) -> Result<Arc<Feed>, RefreshError> {
        if kind == FeedKind::SystemInformation {
            return Ok(self.cache.put(operator, smartbike::system_information(stamp).into()).await);
        }

        let token = self
            .tokens
            .ensure_token(operator)
            .await
            .map_err(|source| RefreshError::Token { operator, source })?;

        // Station information is derived from status, so status is always
        // fetched first. It is stored right away so a failing stations
        // endpoint cannot hold back a good status feed.
        let status_url = self.url(operator, FeedKind::StationStatus, Some(&token))?;
        let native: smartbike::StatusResponse = self
            .get(operator, FeedKind::StationStatus, &status_url)
            .await?;
        let status = self
            .cache
            .put(operator, smartbike::to_station_status(operator, &native, stamp).into())
            .await;

        if kind == FeedKind::StationStatus {
            return Ok(status);
        }
        let statuses = status.as_station_status().ok_or(RefreshError::Unsupported {
            operator,
            kind: FeedKind::StationStatus,
        })?;

        let stations_url = self.url(operator, FeedKind::StationInformation, Some(&token))?;
        let stations: smartbike::StationsResponse = self
            .get(operator, FeedKind::StationInformation, &stations_url)
            .await?;
        let information =
            smartbike::to_station_information(operator, &stations, &statuses.data, stamp)
                .map_err(|e| e.with_url(&stations_url))?;

        Ok(self.cache.put(operator, information.into()).await)
    }

    /// Store both station feeds and return the one that was asked for.
    async fn store_station_pair(
        &self,
        operator: Operator,
        kind: FeedKind,
        information: Feed,
        status: Feed,
    ) -> Result<Arc<Feed>, RefreshError> {
        let status = self.cache.put(operator, status).await;
        let information = self.cache.put(operator, information).await;
        match kind {
            FeedKind::StationInformation => Ok(information),
            FeedKind::StationStatus => Ok(status),
            _ => Err(RefreshError::Unsupported { operator, kind }),
        }
    }

    fn url(&self, operator: Operator, kind: FeedKind, token: Option<&str>) -> Result<String, RefreshError> {
        self.registry
            .url_for(operator, kind, token)
            .ok_or(RefreshError::MissingCredentials { operator, kind })
    }

    async fn get<N: DeserializeOwned>(
        &self,
        operator: Operator,
        kind: FeedKind,
        url: &str,
    ) -> Result<N, RefreshError> {
        fetch(self.transport.as_ref(), url)
            .await
            .map_err(|source| RefreshError::Fetch {
                operator,
                kind,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::adapters::fixtures;
    use crate::cache::CacheConfig;
    use crate::fetch::MockTransport;
    use crate::operators::Credentials;
    use serde_json::Value;

    struct Harness {
        mock: Arc<MockTransport>,
        registry: Arc<Registry>,
        service: FeedService<MockTransport>,
    }

    fn harness(ttl: Duration) -> Harness {
        let mock = Arc::new(MockTransport::new());
        let registry = Arc::new(Registry::new(Credentials {
            lillestrom_api_key: Some("key".into()),
            drammen_public_id: Some("pub".into()),
            drammen_secret: Some("sec".into()),
        }));
        let cache = Arc::new(FeedCache::new(&CacheConfig {
            ttl,
            ..Default::default()
        }));
        let tokens = TokenManager::new(Arc::clone(&mock), Arc::clone(&registry));
        let service = FeedService::new(
            Arc::clone(&mock),
            Arc::clone(&registry),
            cache,
            tokens,
            Arc::new(Metrics::new().unwrap()),
        );
        Harness {
            mock,
            registry,
            service,
        }
    }

    impl Harness {
        fn url(&self, operator: Operator, kind: FeedKind) -> String {
            self.registry.url_for(operator, kind, None).unwrap()
        }

        fn drammen_url(&self, kind: FeedKind) -> String {
            self.registry
                .url_for(Operator::Drammen, kind, Some("ZTc4YjU0NWQ5MTNlNGI2ZjYw"))
                .unwrap()
        }

        async fn serve_oslo(&self) {
            let op = Operator::Oslo;
            self.mock
                .set_body(self.url(op, FeedKind::SystemInformation), fixtures::OSLO_SYSTEM_INFORMATION)
                .await;
            self.mock
                .set_body(self.url(op, FeedKind::StationInformation), fixtures::OSLO_STATION_INFORMATION)
                .await;
            self.mock
                .set_body(self.url(op, FeedKind::StationStatus), fixtures::OSLO_STATION_STATUS)
                .await;
        }

        async fn serve_drammen(&self) {
            let token_url = self.registry.token_url(Operator::Drammen).unwrap();
            self.mock.set_body(token_url, fixtures::SMARTBIKE_TOKEN).await;
            self.mock
                .set_body(self.drammen_url(FeedKind::StationStatus), fixtures::SMARTBIKE_STATUS)
                .await;
            self.mock
                .set_body(self.drammen_url(FeedKind::StationInformation), fixtures::SMARTBIKE_STATIONS)
                .await;
        }
    }

    fn ttl() -> Duration {
        Duration::from_secs(61)
    }

    #[tokio::test]
    async fn oslo_system_information_is_upstream_data_restamped() {
        let h = harness(ttl());
        h.serve_oslo().await;
        let before = chrono::Utc::now().timestamp();

        let feed = h
            .service
            .get_or_refresh(Operator::Oslo, FeedKind::SystemInformation)
            .await
            .unwrap();

        let upstream: Value = serde_json::from_str(fixtures::OSLO_SYSTEM_INFORMATION).unwrap();
        let out = serde_json::to_value(feed.as_ref()).unwrap();
        assert_eq!(out["data"], upstream["data"]);
        assert_eq!(out["ttl"], 61);
        assert!(feed.last_updated() >= before);
    }

    #[tokio::test]
    async fn second_request_within_ttl_is_served_from_cache() {
        let h = harness(ttl());
        h.serve_oslo().await;

        let first = h
            .service
            .get_or_refresh(Operator::Oslo, FeedKind::StationStatus)
            .await
            .unwrap();
        let second = h
            .service
            .get_or_refresh(Operator::Oslo, FeedKind::StationStatus)
            .await
            .unwrap();

        assert_eq!(h.mock.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn stale_entry_triggers_refetch() {
        let h = harness(Duration::ZERO);
        h.serve_oslo().await;

        for _ in 0..2 {
            h.service
                .get_or_refresh(Operator::Oslo, FeedKind::StationStatus)
                .await
                .unwrap();
        }
        assert_eq!(h.mock.calls(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_serves_stale_entry() {
        let h = harness(Duration::ZERO);
        h.serve_oslo().await;
        let url = h.url(Operator::Oslo, FeedKind::StationStatus);

        let first = h
            .service
            .get_or_refresh(Operator::Oslo, FeedKind::StationStatus)
            .await
            .unwrap();
        h.mock.fail(&url).await;
        let second = h
            .service
            .get_or_refresh(Operator::Oslo, FeedKind::StationStatus)
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn failed_refresh_without_data_is_not_found() {
        let h = harness(ttl());
        let result = h
            .service
            .get_or_refresh(Operator::Bergen, FeedKind::StationStatus)
            .await;
        assert_eq!(
            result.unwrap_err(),
            FeedNotFound {
                operator: Operator::Bergen,
                kind: FeedKind::StationStatus
            }
        );
    }

    #[tokio::test]
    async fn failure_is_isolated_to_its_key() {
        let h = harness(ttl());
        h.serve_oslo().await;
        h.mock
            .set_body(h.url(Operator::Kolumbus, FeedKind::StationStatus), fixtures::KOLUMBUS_PARKINGS)
            .await;

        h.service.refresh(Operator::Oslo, FeedKind::SystemInformation).await.unwrap();
        h.service.refresh(Operator::Kolumbus, FeedKind::StationStatus).await.unwrap();
        let oslo_info = h.service.cache().get(Operator::Oslo, FeedKind::SystemInformation).await;
        let kolumbus_status = h.service.cache().get(Operator::Kolumbus, FeedKind::StationStatus).await;

        h.mock.fail(h.url(Operator::Oslo, FeedKind::StationStatus)).await;
        let err = h
            .service
            .refresh(Operator::Oslo, FeedKind::StationStatus)
            .await
            .unwrap_err();
        assert!(matches!(err, RefreshError::Fetch { operator: Operator::Oslo, .. }));

        let cache = h.service.cache();
        assert!(cache.get(Operator::Oslo, FeedKind::StationStatus).await.is_none());
        assert_eq!(cache.get(Operator::Oslo, FeedKind::SystemInformation).await, oslo_info);
        assert_eq!(cache.get(Operator::Kolumbus, FeedKind::StationStatus).await, kolumbus_status);
    }

    #[tokio::test]
    async fn single_call_upstream_stores_both_station_feeds() {
        let h = harness(ttl());
        h.mock
            .set_body(h.url(Operator::Kolumbus, FeedKind::StationStatus), fixtures::KOLUMBUS_PARKINGS)
            .await;

        h.service.refresh(Operator::Kolumbus, FeedKind::StationStatus).await.unwrap();
        let info = h
            .service
            .get_or_refresh(Operator::Kolumbus, FeedKind::StationInformation)
            .await
            .unwrap();

        assert_eq!(h.mock.calls(), 1);
        let info = info.as_station_information().unwrap();
        assert_eq!(info.data.stations[0].station_id.as_str(), "YKO:VehicleSharingParkingArea:66");
    }

    #[tokio::test]
    async fn smartbike_station_information_fetches_status_first() {
        let h = harness(ttl());
        h.serve_drammen().await;

        let feed = h
            .service
            .get_or_refresh(Operator::Drammen, FeedKind::StationInformation)
            .await
            .unwrap();

        assert_eq!(h.mock.calls_to(&h.drammen_url(FeedKind::StationStatus)).await, 1);
        assert_eq!(h.mock.calls_to(&h.drammen_url(FeedKind::StationInformation)).await, 1);

        let status = h
            .service
            .cache()
            .get(Operator::Drammen, FeedKind::StationStatus)
            .await
            .unwrap();
        let status = status.as_station_status().unwrap();
        let info = feed.as_station_information().unwrap();
        for station in &info.data.stations {
            let expected = status
                .data
                .stations
                .iter()
                .find(|s| s.station_id == station.station_id)
                .map(|s| s.num_bikes_available + s.num_docks_available)
                .unwrap_or(0);
            assert_eq!(station.capacity, expected);
        }
        assert!(
            h.service
                .cache()
                .is_fresh(Operator::Drammen, FeedKind::StationInformation)
                .await
        );
    }

    #[tokio::test]
    async fn smartbike_without_token_does_not_fetch_feeds() {
        let h = harness(ttl());
        let token_url = h.registry.token_url(Operator::Drammen).unwrap();
        h.mock.fail(&token_url).await;

        let err = h
            .service
            .refresh(Operator::Drammen, FeedKind::StationStatus)
            .await
            .unwrap_err();

        assert!(matches!(err, RefreshError::Token { .. }));
        assert_eq!(h.mock.calls(), 1);
        assert_eq!(h.mock.calls_to(&token_url).await, 1);
    }

    #[tokio::test]
    async fn static_feeds_need_no_upstream() {
        let h = harness(ttl());
        for op in [Operator::Kolumbus, Operator::Lillestrom, Operator::Drammen] {
            h.service.get_or_refresh(op, FeedKind::SystemInformation).await.unwrap();
        }
        for op in Operator::ALL {
            h.service.get_or_refresh(op, FeedKind::SystemPricingPlans).await.unwrap();
        }
        assert_eq!(h.mock.calls(), 0);
    }

    #[tokio::test]
    async fn discovery_and_free_bikes_are_not_found() {
        let h = harness(ttl());
        for kind in [FeedKind::Gbfs, FeedKind::FreeBikeStatus] {
            assert!(h.service.get_or_refresh(Operator::Oslo, kind).await.is_err());
        }
        assert_eq!(h.mock.calls(), 0);
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_fetching() {
        let mock = Arc::new(MockTransport::new());
        let registry = Arc::new(Registry::new(Credentials::default()));
        let cache = Arc::new(FeedCache::new(&CacheConfig::default()));
        let tokens = TokenManager::new(Arc::clone(&mock), Arc::clone(&registry));
        let service = FeedService::new(
            Arc::clone(&mock),
            registry,
            cache,
            tokens,
            Arc::new(Metrics::new().unwrap()),
        );

        let err = service
            .refresh(Operator::Lillestrom, FeedKind::StationStatus)
            .await
            .unwrap_err();

        assert!(matches!(err, RefreshError::MissingCredentials { .. }));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn non_numeric_coordinates_surface_parse_error() {
        let h = harness(ttl());
        h.serve_drammen().await;
        h.mock
            .set_body(
                h.drammen_url(FeedKind::StationInformation),
                r#"{"stations":[{"id":"1","name":"x","address":"y","location":{"lat":"n/a","lon":"10"}}]}"#,
            )
            .await;

        let err = h
            .service
            .refresh(Operator::Drammen, FeedKind::StationInformation)
            .await
            .unwrap_err();

        match err {
            RefreshError::Parse(e) => {
                let url = e.url.unwrap();
                assert!(url.ends_with("/api/en/v3/stations.json"));
                assert!(!url.contains("access_token"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(
            h.service
                .cache()
                .get(Operator::Drammen, FeedKind::StationInformation)
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let h = harness(ttl());
        h.mock
            .set_body(h.url(Operator::Oslo, FeedKind::StationStatus), "<html>")
            .await;

        let err = h
            .service
            .refresh(Operator::Oslo, FeedKind::StationStatus)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RefreshError::Fetch {
                source: FetchError::Decode { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn poll_reports_each_unit() {
        let h = harness(ttl());
        h.serve_oslo().await;
        h.mock.fail(h.url(Operator::Oslo, FeedKind::StationInformation)).await;

        let report = h.service.poll_operator(Operator::Oslo).await;

        assert_eq!(report.failed, vec![FeedKind::StationInformation]);
        assert_eq!(report.refreshed.len(), 3);
        assert!(report.refreshed.contains(&FeedKind::SystemPricingPlans));
    }

    #[tokio::test]
    async fn smartbike_status_survives_failing_stations_endpoint() {
        let h = harness(ttl());
        h.serve_drammen().await;
        h.mock.fail(h.drammen_url(FeedKind::StationInformation)).await;

        let report = h.service.poll_operator(Operator::Drammen).await;

        assert_eq!(report.failed, vec![FeedKind::StationInformation]);
        assert_eq!(h.mock.calls_to(&h.drammen_url(FeedKind::StationStatus)).await, 1);
        let cache = h.service.cache();
        assert!(cache.is_fresh(Operator::Drammen, FeedKind::StationStatus).await);
        let status = cache.get(Operator::Drammen, FeedKind::StationStatus).await.unwrap();
        assert_eq!(status.as_station_status().unwrap().data.stations.len(), 2);
        assert!(cache.get(Operator::Drammen, FeedKind::StationInformation).await.is_none());
    }

    #[tokio::test]
    async fn refresh_outcomes_are_counted() {
        let h = harness(ttl());
        h.serve_oslo().await;
        h.mock.fail(h.url(Operator::Oslo, FeedKind::StationInformation)).await;

        h.service.poll_operator(Operator::Oslo).await;
        h.service.refresh(Operator::Oslo, FeedKind::Gbfs).await.unwrap_err();

        let metrics = h.service.metrics();
        assert_eq!(metrics.refreshes(Operator::Oslo, FeedKind::StationStatus, true), 1);
        assert_eq!(metrics.refreshes(Operator::Oslo, FeedKind::StationInformation, false), 1);
        assert_eq!(metrics.refreshes(Operator::Oslo, FeedKind::StationInformation, true), 0);
        assert_eq!(metrics.refreshes(Operator::Oslo, FeedKind::Gbfs, false), 0);
    }
}
