use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bike_server::cache::{CacheConfig, FeedCache};
use bike_server::config::ServerConfig;
use bike_server::fetch::{HttpClient, HttpClientConfig};
use bike_server::metrics::Metrics;
use bike_server::operators::Registry;
use bike_server::scheduler::Poller;
use bike_server::service::FeedService;
use bike_server::token::TokenManager;
use bike_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "bike_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    if config.credentials.lillestrom_api_key.is_none() {
        info!("LILLESTROM_API_KEY not set, lillestrombysykkel station feeds will be unavailable");
    }
    if config.credentials.drammen_public_id.is_none() || config.credentials.drammen_secret.is_none() {
        info!("DRAMMEN_PUBLIC_ID or DRAMMEN_SECRET not set, drammenbysykkel station feeds will be unavailable");
    }

    let http = match HttpClient::new(HttpClientConfig::new().with_timeout(config.fetch_timeout.as_secs())) {
        Ok(http) => Arc::new(http),
        Err(e) => {
            error!(error = %e, "failed to create HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let metrics = match Metrics::new() {
        Ok(metrics) => Arc::new(metrics),
        Err(e) => {
            error!(error = %e, "failed to register metrics");
            return ExitCode::FAILURE;
        }
    };

    let registry = Arc::new(Registry::new(config.credentials.clone()));
    let cache = Arc::new(FeedCache::new(&CacheConfig {
        ttl: config.feed_ttl,
        ..Default::default()
    }));
    let tokens = TokenManager::new(Arc::clone(&http), Arc::clone(&registry));
    let service = Arc::new(FeedService::new(http, registry, cache, tokens.clone(), metrics));

    tokio::spawn(tokens.run(config.token_refresh));
    tokio::spawn(Poller::new(Arc::clone(&service), config.poll_interval).run());

    let app = create_router(AppState::new(service, &config.public_base_url));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(
        addr = %config.bind_addr,
        poll_secs = config.poll_interval.as_secs(),
        ttl_secs = config.feed_ttl.as_secs(),
        "bike-server listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
