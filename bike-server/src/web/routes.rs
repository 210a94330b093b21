//! HTTP route handlers.

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, error};

use crate::fetch::Transport;
use crate::gbfs::{FeedKind, InvalidFeedKind, Stamp};
use crate::metrics;
use crate::operators::{InvalidOperator, Operator};
use crate::service::FeedNotFound;

use super::correlation::correlation_id;
use super::dto::{ErrorResponse, discovery, operator_directory};
use super::state::AppState;

/// Create the application router.
///
/// Every route is also served under `/bikes`.
pub fn create_router<T: Transport>(state: AppState<T>) -> Router {
    let routes = Router::new()
        .route("/", get(directory::<T>))
        .route("/health", get(health))
        .route("/actuator/prometheus", get(prometheus_metrics::<T>))
        .route("/:operator/:file", get(feed::<T>));

    Router::new()
        .nest("/bikes", routes.clone())
        .merge(routes)
        .layer(middleware::from_fn(correlation_id))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn prometheus_metrics<T: Transport>(State(state): State<AppState<T>>) -> Response {
    match state.service.metrics().encode() {
        Ok(body) => ([(header::CONTENT_TYPE, metrics::CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn directory<T: Transport>(State(state): State<AppState<T>>) -> Response {
    Json(operator_directory(&state.public_base_url)).into_response()
}

/// `/{operator}/{feed}.json`, including the `gbfs.json` discovery document.
async fn feed<T: Transport>(
    State(state): State<AppState<T>>,
    Path((operator, file)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let operator = Operator::parse(&operator)?;
    let name = file.strip_suffix(".json").ok_or_else(|| AppError::NotFound {
        message: format!("unknown feed: {file}"),
    })?;
    let kind = FeedKind::parse(name)?;

    if kind == FeedKind::Gbfs {
        let stamp = Stamp::now(state.service.cache().ttl());
        return Ok(Json(discovery(&state.public_base_url, operator, stamp)).into_response());
    }
    if !FeedKind::SERVED.contains(&kind) {
        return Err(AppError::NotFound {
            message: format!("{operator} has no {kind} feed"),
        });
    }

    let feed = state.service.get_or_refresh(operator, kind).await?;
    Ok(Json(feed.as_ref()).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
}

impl From<InvalidOperator> for AppError {
    fn from(e: InvalidOperator) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl From<InvalidFeedKind> for AppError {
    fn from(e: InvalidFeedKind) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl From<FeedNotFound> for AppError {
    fn from(e: FeedNotFound) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        debug!(status = %status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
