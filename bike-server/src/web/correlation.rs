//! Correlation id propagation.
//!
//! A well-formed `x-correlation-id` from the caller is echoed back, anything
//! else is replaced with a fresh UUID. Every response also gets a new
//! `x-request-id`. Both ids are recorded on the request span.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, info_span};
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_LEN: usize = 128;

pub async fn correlation_id(req: Request, next: Next) -> Response {
    let correlation_id = req
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| is_well_formed(v))
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let request_id = Uuid::new_v4().to_string();

    let span = info_span!(
        "request",
        correlation_id = %correlation_id,
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    let mut response = next.run(req).instrument(span).await;

    let headers = response.headers_mut();
    // Both ids are restricted to header-safe characters.
    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        headers.insert(CORRELATION_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Lowercase letters, digits and dashes only.
fn is_well_formed(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_simple_ids() {
        assert!(is_well_formed("abc-123"));
        assert!(is_well_formed(&Uuid::new_v4().to_string()));
    }

    #[test]
    fn rejects_unsafe_ids() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("ABC"));
        assert!(!is_well_formed("a b"));
        assert!(!is_well_formed("a\r\nset-cookie: x"));
        assert!(!is_well_formed(&"a".repeat(MAX_LEN + 1)));
    }

    proptest! {
        #[test]
        fn well_formed_ids_are_valid_header_values(id in "[a-z0-9-]{1,64}") {
            prop_assert!(is_well_formed(&id));
            prop_assert!(HeaderValue::from_str(&id).is_ok());
        }
    }
}
