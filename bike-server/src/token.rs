//! Access tokens for token-gated operators.
//!
//! One bearer token is held per operator. A failed refresh keeps the last
//! good token. Until a first token has been fetched, callers must wait for
//! one via [`TokenManager::ensure_token`] rather than call upstream without it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::adapters::smartbike::AccessToken;
use crate::fetch::{FetchError, Transport, fetch};
use crate::operators::{Operator, Registry};

/// Errors from obtaining an access token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("{0} does not use access tokens")]
    NotTokenGated(Operator),

    #[error("no client credentials configured for {0}")]
    MissingCredentials(Operator),

    #[error("token request failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Holds the current access token for each token-gated operator.
pub struct TokenManager<T> {
    transport: Arc<T>,
    registry: Arc<Registry>,
    tokens: Arc<RwLock<HashMap<Operator, String>>>,
}

impl<T> Clone for TokenManager<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            registry: Arc::clone(&self.registry),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<T: Transport> TokenManager<T> {
    pub fn new(transport: Arc<T>, registry: Arc<Registry>) -> Self {
        Self {
            transport,
            registry,
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Last successfully fetched token, if any.
    pub async fn current_token(&self, operator: Operator) -> Option<String> {
        self.tokens.read().await.get(&operator).cloned()
    }

    /// Fetch a new token and store it.
    ///
    /// On failure the previous token, if any, is left in place.
    pub async fn refresh(&self, operator: Operator) -> Result<String, TokenError> {
        if !operator.adapter_kind().is_token_gated() {
            return Err(TokenError::NotTokenGated(operator));
        }
        let url = self
            .registry
            .token_url(operator)
            .ok_or(TokenError::MissingCredentials(operator))?;

        info!(operator = %operator, "fetching access token");
        let grant: AccessToken = fetch(self.transport.as_ref(), &url).await?;

        self.tokens
            .write()
            .await
            .insert(operator, grant.access_token.clone());
        info!(operator = %operator, expires_in = grant.expires_in, "access token refreshed");
        Ok(grant.access_token)
    }

    /// Current token, fetching one first if none has been obtained yet.
    pub async fn ensure_token(&self, operator: Operator) -> Result<String, TokenError> {
        match self.current_token(operator).await {
            Some(token) => Ok(token),
            None => self.refresh(operator).await,
        }
    }

    /// Refresh every token-gated operator, logging failures.
    pub async fn refresh_all(&self) {
        for operator in Operator::ALL {
            if !operator.adapter_kind().is_token_gated() {
                continue;
            }
            if let Err(e) = self.refresh(operator).await {
                error!(operator = %operator, error = %e, "failed to refresh access token");
            }
        }
    }

    /// Refresh all tokens every `period`, forever. The first refresh is immediate.
    pub async fn run(self, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.refresh_all().await;
        }
    }
}
