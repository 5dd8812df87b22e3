//! Observability helpers for the Slack client.
//!
//! Tracing spans for API dispatch and redaction helpers for anything that may
//! end up in a log line.

pub mod logging;
pub mod tracing_utils;

pub use logging::*;
pub use tracing_utils::*;
