//! Response types for messages service.

use crate::types::{Message, Timestamp};
use serde::Deserialize;

/// Payload of chat.postMessage
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Channel where message was posted
    pub channel: String,
    /// Message timestamp
    pub ts: Timestamp,
    /// Posted message
    #[serde(default)]
    pub message: Option<Message>,
}

/// Payload of chat.update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessageResponse {
    /// Channel containing message
    pub channel: String,
    /// Updated message timestamp
    pub ts: Timestamp,
    /// Updated message text
    #[serde(default)]
    pub text: Option<String>,
    /// Updated message
    #[serde(default)]
    pub message: Option<Message>,
}

/// Payload of chat.postEphemeral
#[derive(Debug, Clone, Deserialize)]
pub struct PostEphemeralResponse {
    /// Ephemeral message timestamp
    pub message_ts: Timestamp,
}

/// Payload of chat.meMessage
#[derive(Debug, Clone, Deserialize)]
pub struct MeMessageResponse {
    /// Channel
    pub channel: String,
    /// Message timestamp
    pub ts: Timestamp,
}

/// Payload of chat.getPermalink
#[derive(Debug, Clone, Deserialize)]
pub struct GetPermalinkResponse {
    /// Permalink URL
    pub permalink: String,
}

/// Payload of chat.scheduleMessage
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMessageResponse {
    /// Channel where message will be posted
    pub channel: String,
    /// Scheduled message ID
    pub scheduled_message_id: String,
    /// Timestamp when message will be posted
    pub post_at: i64,
    /// Scheduled message
    #[serde(default)]
    pub message: Option<Message>,
}
