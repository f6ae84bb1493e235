//! Request span construction for `TraceLayer`.
//!
//! Spans record method, path, request id, and the query string. Values of
//! configured sensitive query parameters are replaced with `REDACTED` so
//! search terms like names and addresses stay out of the logs.

use std::sync::Arc;

use axum::http::Request;
use tower_http::trace::MakeSpan;
use tracing::Span;

/// Replacement text for redacted values.
pub const REDACTED: &str = "REDACTED";

/// Rewrite `query` replacing the value of every parameter in `redacted`.
///
/// Keys are percent-decoded the same way the `Query` extractor decodes them,
/// then compared case-insensitively. Pair order and the encoding of untouched
/// pairs are preserved.
pub fn redact_query(query: &str, redacted: &[String]) -> String {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let sensitive = form_urlencoded::parse(pair.as_bytes())
                .next()
                .is_some_and(|(key, _)| redacted.iter().any(|r| r.eq_ignore_ascii_case(&key)));
            match pair.split_once('=') {
                Some((raw_key, _)) if sensitive => format!("{raw_key}={REDACTED}"),
                _ => pair.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// [`MakeSpan`] that records a redacted query string.
#[derive(Debug, Clone)]
pub struct RedactingMakeSpan {
    redacted: Arc<[String]>,
}

impl RedactingMakeSpan {
    pub fn new(redacted: &[String]) -> Self {
        Self {
            redacted: redacted.into(),
        }
    }
}

impl<B> MakeSpan<B> for RedactingMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let query = request
            .uri()
            .query()
            .map(|q| redact_query(q, &self.redacted))
            .unwrap_or_default();
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            query = %query,
            request_id = %request_id,
        )
    }
}
