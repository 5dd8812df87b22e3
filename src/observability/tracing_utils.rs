//! Tracing utilities for API dispatch.

use std::time::{Duration, Instant};
use tracing::{span, Level, Span};

/// Create a request span with common attributes
pub fn create_request_span(http_method: &str, endpoint: &str, request_id: &str) -> Span {
    span!(
        Level::INFO,
        "slack_request",
        http.method = %http_method,
        endpoint = %endpoint,
        request_id = %request_id,
        otel.kind = "client",
        otel.status_code = tracing::field::Empty,
        slack.error = tracing::field::Empty,
    )
}

/// Record success on a span
pub fn record_success(span: &Span) {
    span.record("otel.status_code", "OK");
}

/// Record error on a span
pub fn record_error(span: &Span, error: &str) {
    span.record("otel.status_code", "ERROR");
    span.record("slack.error", error);
}

/// Request-scoped trace info
#[derive(Debug, Clone)]
pub struct RequestTrace {
    /// Start time
    pub start_time: Instant,
    /// Request ID
    pub request_id: String,
    /// Endpoint
    pub endpoint: String,
}

impl RequestTrace {
    /// Start tracing a request to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            request_id: uuid::Uuid::new_v4().to_string(),
            endpoint: endpoint.into(),
        }
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get elapsed milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}
