//! Events API intake.
//!
//! Payloads delivered to the app's request URL, plus signature verification
//! for the HTTP requests that carry them.

mod signature;

pub use signature::*;

use crate::blocks::Block;
use crate::errors::{SlackResult, WebhookError};
use crate::types::{ChannelId, TeamId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Outer envelope of an Events API request
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackEvent {
    /// URL verification challenge sent when the request URL is configured
    UrlVerification {
        /// Challenge token to return
        challenge: String,
    },

    /// Event callback
    EventCallback(EventCallback),

    /// Event delivery for the app was throttled
    AppRateLimited {
        /// Team ID
        team_id: TeamId,
        /// Minute (Unix time) the limit applied to
        minute_rate_limited: i64,
        /// API app ID
        api_app_id: String,
    },
}

/// Event callback wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct EventCallback {
    /// Team ID
    pub team_id: TeamId,
    /// API app ID
    pub api_app_id: String,
    /// The actual event
    pub event: InnerEvent,
    /// Event ID
    pub event_id: String,
    /// Event time (Unix timestamp)
    pub event_time: i64,
    /// Installations the event is visible to
    #[serde(default)]
    pub authorizations: Vec<Authorization>,
}

/// Authorization info
#[derive(Debug, Clone, Deserialize)]
pub struct Authorization {
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// User ID
    pub user_id: UserId,
    /// Is bot
    #[serde(default)]
    pub is_bot: bool,
}

/// Inner event types handled by the bot layer
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InnerEvent {
    /// The app was mentioned
    AppMention(AppMentionEvent),

    /// A message was posted in a conversation the app is in
    Message(MessageEvent),

    /// Any other event type
    #[serde(other)]
    Unknown,
}

/// `app_mention` event
#[derive(Debug, Clone, Deserialize)]
pub struct AppMentionEvent {
    /// User who mentioned the app
    pub user: UserId,
    /// Text content
    pub text: String,
    /// Timestamp
    pub ts: Timestamp,
    /// Channel
    pub channel: ChannelId,
    /// Thread timestamp
    #[serde(default)]
    pub thread_ts: Option<Timestamp>,
    /// Blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// `message` event
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    /// Subtype (if any)
    #[serde(default)]
    pub subtype: Option<String>,
    /// User who sent
    #[serde(default)]
    pub user: Option<UserId>,
    /// Bot ID (if bot)
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
    /// Timestamp
    pub ts: Timestamp,
    /// Channel
    pub channel: ChannelId,
    /// Thread timestamp
    #[serde(default)]
    pub thread_ts: Option<Timestamp>,
    /// Channel type (`channel`, `group`, `im`, `mpim`)
    #[serde(default)]
    pub channel_type: Option<String>,
    /// Blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl MessageEvent {
    /// Check if this is a message from a bot
    pub fn is_bot_message(&self) -> bool {
        self.bot_id.is_some() || self.subtype.as_deref() == Some("bot_message")
    }

    /// Check if this is a thread reply
    pub fn is_thread_reply(&self) -> bool {
        self.thread_ts.is_some() && self.thread_ts.as_ref() != Some(&self.ts)
    }

    /// Check if this is a message edit
    pub fn is_edit(&self) -> bool {
        self.subtype.as_deref() == Some("message_changed")
    }

    /// Check if this is a message deletion
    pub fn is_deletion(&self) -> bool {
        self.subtype.as_deref() == Some("message_deleted")
    }

    /// Check if the event arrived in a direct message
    pub fn is_direct_message(&self) -> bool {
        self.channel_type.as_deref() == Some("im") || self.channel.is_dm()
    }
}

/// URL verification response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlVerificationResponse {
    /// Challenge token to echo back
    pub challenge: String,
}

impl UrlVerificationResponse {
    /// Create a new response
    pub fn new(challenge: impl Into<String>) -> Self {
        Self {
            challenge: challenge.into(),
        }
    }
}

/// Decode a raw Events API request body
pub fn parse_event(body: &[u8]) -> SlackResult<SlackEvent> {
    serde_json::from_slice(body).map_err(|e| {
        WebhookError::InvalidPayload {
            message: e.to_string(),
        }
        .into()
    })
}
