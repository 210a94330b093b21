//! HTTP layer serving normalized GBFS feeds.
//!
//! Translates `/{operator}/{feed}.json` paths into cache lookups and
//! adds discovery documents and a service directory on top.

mod correlation;
mod dto;
mod routes;
mod state;

pub use correlation::{CORRELATION_ID_HEADER, REQUEST_ID_HEADER};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
