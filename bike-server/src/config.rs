//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use crate::operators::Credentials;

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
const PROD_POLL_SECS: u64 = 60;
const DEV_POLL_SECS: u64 = 600;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TOKEN_REFRESH_SECS: u64 = 600;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Base URL written into discovery documents
    pub public_base_url: String,
    pub poll_interval: Duration,
    /// Cache freshness window and envelope `ttl`
    pub feed_ttl: Duration,
    pub fetch_timeout: Duration,
    pub token_refresh: Duration,
    pub credentials: Credentials,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEV_POLL_SECS))
    }
}

impl ServerConfig {
    /// Config with the given poll interval and a TTL one second longer.
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            poll_interval,
            feed_ttl: poll_interval + Duration::from_secs(1),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            token_refresh: Duration::from_secs(DEFAULT_TOKEN_REFRESH_SECS),
            credentials: Credentials::default(),
        }
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_feed_ttl(mut self, ttl: Duration) -> Self {
        self.feed_ttl = ttl;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let default_poll = if get("ENV").as_deref() == Some("prod") {
            PROD_POLL_SECS
        } else {
            DEV_POLL_SECS
        };
        let poll_interval = Duration::from_secs(match get("POLL_INTERVAL_SECS") {
            Some(v) => parse_secs("POLL_INTERVAL_SECS", &v)?,
            None => default_poll,
        });

        let mut config = Self::new(poll_interval);

        if let Some(v) = get("BIND_ADDR") {
            config.bind_addr = v.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError {
                var: "BIND_ADDR",
                value: v.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(v) = get("PUBLIC_BASE_URL") {
            config = config.with_public_base_url(v.trim());
        }
        if let Some(v) = get("FEED_TTL_SECS") {
            config.feed_ttl = Duration::from_secs(parse_secs("FEED_TTL_SECS", &v)?);
        }
        if let Some(v) = get("FETCH_TIMEOUT_SECS") {
            config.fetch_timeout = Duration::from_secs(parse_secs("FETCH_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = get("TOKEN_REFRESH_SECS") {
            config.token_refresh = Duration::from_secs(parse_secs("TOKEN_REFRESH_SECS", &v)?);
        }

        config.credentials = Credentials {
            lillestrom_api_key: get("LILLESTROM_API_KEY"),
            drammen_public_id: get("DRAMMEN_PUBLIC_ID"),
            drammen_secret: get("DRAMMEN_SECRET"),
        };

        Ok(config)
    }
}

fn parse_secs(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    let secs: u64 = value.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if secs == 0 && var != "FEED_TTL_SECS" {
        return Err(ConfigError {
            var,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.public_base_url, "http://localhost:8080");
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.feed_ttl, Duration::from_secs(601));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.token_refresh, Duration::from_secs(600));
        assert!(config.credentials.lillestrom_api_key.is_none());
    }

    #[test]
    fn prod_polls_every_minute() {
        let config = from_vars(&[("ENV", "prod")]).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.feed_ttl, Duration::from_secs(61));
    }

    #[test]
    fn explicit_values_win() {
        let config = from_vars(&[
            ("ENV", "prod"),
            ("POLL_INTERVAL_SECS", "30"),
            ("FEED_TTL_SECS", "45"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("PUBLIC_BASE_URL", "https://bikes.example.test/"),
            ("DRAMMEN_SECRET", "s3cret"),
        ])
        .unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert_eq!(config.feed_ttl, Duration::from_secs(45));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.public_base_url, "https://bikes.example.test");
        assert_eq!(config.credentials.drammen_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn empty_credentials_are_unset() {
        let config = from_vars(&[("LILLESTROM_API_KEY", "")]).unwrap();
        assert!(config.credentials.lillestrom_api_key.is_none());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = from_vars(&[("POLL_INTERVAL_SECS", "soon")]).unwrap_err();
        assert_eq!(err.var, "POLL_INTERVAL_SECS");

        let err = from_vars(&[("FETCH_TIMEOUT_SECS", "0")]).unwrap_err();
        assert_eq!(err.reason, "must be greater than zero");

        assert!(from_vars(&[("BIND_ADDR", "nowhere")]).is_err());
    }
}
