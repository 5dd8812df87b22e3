//! Slack Bot Kit
//!
//! Typed Slack Web API bindings with:
//! - Usergroups, Views, Dialog, Chat and Auth endpoint groups
//! - Block Kit, view and legacy dialog models
//! - Events API intake with request signature verification
//! - A small bot layer: reply helpers and reply-while-typing
//! - Structured tracing with token redaction
//!
//! Every endpoint method builds a parameter map from a typed request, sends it
//! to `{base_url}/{method}`, decodes the `{"ok": ...}` envelope and returns the
//! endpoint's payload field.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slack_bot_kit::services::messages::{MessagesServiceTrait, PostMessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = slack_bot_kit::create_client_from_env()?;
//!
//!     // Post a message
//!     let response = client
//!         .messages()
//!         .post(PostMessageRequest::new("C0123456789", "Hello, Slack!"))
//!         .await?;
//!
//!     println!("Message posted: {}", response.ts);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod args;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Schema models
pub mod blocks;

// Inbound events and bots
pub mod bot;
pub mod events;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::SlackClient;
pub use config::{SlackConfig, SlackConfigBuilder};
pub use errors::{SlackError, SlackResult};

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<SlackClient> {
    SlackClient::new(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_BOT_TOKEN` - Bot token (xoxb-*)
/// - `SLACK_USER_TOKEN` - User token (xoxp-*)
/// - `SLACK_SIGNING_SECRET` - Signing secret for request verification
/// - `SLACK_BASE_URL` - API base URL override
/// - `SLACK_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> SlackResult<SlackClient> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
