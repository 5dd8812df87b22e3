//! Message records returned by the chat endpoints.

use super::{ChannelId, Timestamp, UserId};
use crate::blocks::Block;
use serde::{Deserialize, Serialize};

/// Slack message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message type
    #[serde(rename = "type", default)]
    pub message_type: Option<String>,
    /// Message subtype
    #[serde(default)]
    pub subtype: Option<String>,
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
    /// User who sent the message
    #[serde(default)]
    pub user: Option<UserId>,
    /// Bot ID if sent by a bot
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Message timestamp (unique ID)
    #[serde(default)]
    pub ts: Option<Timestamp>,
    /// Thread timestamp (if in a thread)
    #[serde(default)]
    pub thread_ts: Option<Timestamp>,
    /// Block Kit blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Channel ID (included in some responses)
    #[serde(default)]
    pub channel: Option<ChannelId>,
    /// Team ID
    #[serde(default)]
    pub team: Option<String>,
    /// App ID if sent by an app
    #[serde(default)]
    pub app_id: Option<String>,
    /// Username (for bot messages)
    #[serde(default)]
    pub username: Option<String>,
}

impl Message {
    /// Check if this message is a thread reply
    pub fn is_thread_reply(&self) -> bool {
        self.thread_ts.is_some() && self.thread_ts != self.ts
    }

    /// Check if this message is from a bot
    pub fn is_bot_message(&self) -> bool {
        self.bot_id.is_some() || self.subtype.as_deref() == Some("bot_message")
    }

    /// Get the effective text content
    pub fn content(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
