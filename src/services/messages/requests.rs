//! Request types for messages service.

use crate::args::{Args, ToArgs};
use crate::blocks::Block;
use crate::errors::SlackResult;
use crate::types::{ChannelId, Timestamp, UserId};

/// Request to post a message
#[derive(Debug, Clone, PartialEq)]
pub struct PostMessageRequest {
    /// Channel, DM, or MPIM to send to
    pub channel: ChannelId,
    /// Message text (fallback text when blocks are set)
    pub text: Option<String>,
    /// Block Kit blocks
    pub blocks: Option<Vec<Block>>,
    /// Thread timestamp to reply to
    pub thread_ts: Option<Timestamp>,
    /// Broadcast a thread reply to the channel
    pub reply_broadcast: Option<bool>,
    /// Parse mode (`full`, `none`)
    pub parse: Option<String>,
    /// Linkify channel names and usernames
    pub link_names: Option<bool>,
    /// Enable link unfurling
    pub unfurl_links: Option<bool>,
    /// Enable media unfurling
    pub unfurl_media: Option<bool>,
    /// Custom username
    pub username: Option<String>,
    /// Bot icon emoji
    pub icon_emoji: Option<String>,
    /// Bot icon URL
    pub icon_url: Option<String>,
    /// Enable mrkdwn formatting
    pub mrkdwn: Option<bool>,
}

impl PostMessageRequest {
    /// Create a text message request
    pub fn new(channel: impl Into<ChannelId>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::empty(channel.into())
        }
    }

    /// Create a message with blocks
    pub fn with_blocks(channel: impl Into<ChannelId>, blocks: Vec<Block>) -> Self {
        Self {
            blocks: Some(blocks),
            ..Self::empty(channel.into())
        }
    }

    fn empty(channel: ChannelId) -> Self {
        Self {
            channel,
            text: None,
            blocks: None,
            thread_ts: None,
            reply_broadcast: None,
            parse: None,
            link_names: None,
            unfurl_links: None,
            unfurl_media: None,
            username: None,
            icon_emoji: None,
            icon_url: None,
            mrkdwn: None,
        }
    }

    /// Set the text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Reply in a thread
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    /// Broadcast reply to channel
    pub fn reply_broadcast(mut self, broadcast: bool) -> Self {
        self.reply_broadcast = Some(broadcast);
        self
    }

    /// Set parse mode
    pub fn parse(mut self, mode: impl Into<String>) -> Self {
        self.parse = Some(mode.into());
        self
    }

    /// Linkify names
    pub fn link_names(mut self, link: bool) -> Self {
        self.link_names = Some(link);
        self
    }

    /// Enable/disable link unfurling
    pub fn unfurl_links(mut self, unfurl: bool) -> Self {
        self.unfurl_links = Some(unfurl);
        self
    }

    /// Enable/disable media unfurling
    pub fn unfurl_media(mut self, unfurl: bool) -> Self {
        self.unfurl_media = Some(unfurl);
        self
    }

    /// Set custom username
    pub fn username(mut self, name: impl Into<String>) -> Self {
        self.username = Some(name.into());
        self
    }

    /// Set icon emoji
    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Set icon URL
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Enable/disable mrkdwn
    pub fn mrkdwn(mut self, enabled: bool) -> Self {
        self.mrkdwn = Some(enabled);
        self
    }
}

impl ToArgs for PostMessageRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with_opt("text", self.text.as_ref())
            .with_opt_json("blocks", self.blocks.as_ref())?
            .with_opt("thread_ts", self.thread_ts.as_ref().map(Timestamp::as_str))
            .with_opt("reply_broadcast", self.reply_broadcast)
            .with_opt("parse", self.parse.as_ref())
            .with_opt("link_names", self.link_names)
            .with_opt("unfurl_links", self.unfurl_links)
            .with_opt("unfurl_media", self.unfurl_media)
            .with_opt("username", self.username.as_ref())
            .with_opt("icon_emoji", self.icon_emoji.as_ref())
            .with_opt("icon_url", self.icon_url.as_ref())
            .with_opt("mrkdwn", self.mrkdwn))
    }
}

/// Request to update a message
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMessageRequest {
    /// Channel containing the message
    pub channel: ChannelId,
    /// Message timestamp
    pub ts: Timestamp,
    /// New text
    pub text: Option<String>,
    /// New blocks
    pub blocks: Option<Vec<Block>>,
    /// Parse mode
    pub parse: Option<String>,
    /// Linkify names
    pub link_names: Option<bool>,
    /// Broadcast an edited thread reply to the channel
    pub reply_broadcast: Option<bool>,
}

impl UpdateMessageRequest {
    /// Create a new update request
    pub fn new(channel: impl Into<ChannelId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
            text: None,
            blocks: None,
            parse: None,
            link_names: None,
            reply_broadcast: None,
        }
    }

    /// Set new text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set new blocks
    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Set parse mode
    pub fn parse(mut self, mode: impl Into<String>) -> Self {
        self.parse = Some(mode.into());
        self
    }

    /// Linkify names
    pub fn link_names(mut self, link: bool) -> Self {
        self.link_names = Some(link);
        self
    }

    /// Broadcast reply to channel
    pub fn reply_broadcast(mut self, broadcast: bool) -> Self {
        self.reply_broadcast = Some(broadcast);
        self
    }
}

impl ToArgs for UpdateMessageRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with("ts", self.ts.as_str())
            .with_opt("text", self.text.as_ref())
            .with_opt_json("blocks", self.blocks.as_ref())?
            .with_opt("parse", self.parse.as_ref())
            .with_opt("link_names", self.link_names)
            .with_opt("reply_broadcast", self.reply_broadcast))
    }
}

/// Request to delete a message
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteMessageRequest {
    /// Channel containing the message
    pub channel: ChannelId,
    /// Message timestamp
    pub ts: Timestamp,
    /// Delete as the authed user (user tokens only)
    pub as_user: Option<bool>,
}

impl DeleteMessageRequest {
    /// Create a new delete request
    pub fn new(channel: impl Into<ChannelId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
            as_user: None,
        }
    }

    /// Delete as the authed user
    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }
}

impl ToArgs for DeleteMessageRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with("ts", self.ts.as_str())
            .with_opt("as_user", self.as_user))
    }
}

/// Request to post an ephemeral message
#[derive(Debug, Clone, PartialEq)]
pub struct PostEphemeralRequest {
    /// Channel to post in
    pub channel: ChannelId,
    /// User who will see the message
    pub user: UserId,
    /// Message text
    pub text: Option<String>,
    /// Blocks
    pub blocks: Option<Vec<Block>>,
    /// Thread timestamp
    pub thread_ts: Option<Timestamp>,
    /// Parse mode
    pub parse: Option<String>,
    /// Linkify names
    pub link_names: Option<bool>,
}

impl PostEphemeralRequest {
    /// Create a new ephemeral message request
    pub fn new(
        channel: impl Into<ChannelId>,
        user: impl Into<UserId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            user: user.into(),
            text: Some(text.into()),
            blocks: None,
            thread_ts: None,
            parse: None,
            link_names: None,
        }
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Reply in thread
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }
}

impl ToArgs for PostEphemeralRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with("user", self.user.as_str())
            .with_opt("text", self.text.as_ref())
            .with_opt_json("blocks", self.blocks.as_ref())?
            .with_opt("thread_ts", self.thread_ts.as_ref().map(Timestamp::as_str))
            .with_opt("parse", self.parse.as_ref())
            .with_opt("link_names", self.link_names))
    }
}

/// Request to post a `/me` message
#[derive(Debug, Clone, PartialEq)]
pub struct MeMessageRequest {
    /// Channel to post in
    pub channel: ChannelId,
    /// Message text
    pub text: String,
}

impl MeMessageRequest {
    /// Create a new me message request
    pub fn new(channel: impl Into<ChannelId>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
        }
    }
}

impl ToArgs for MeMessageRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with("text", &self.text))
    }
}

/// Request to get a message permalink
#[derive(Debug, Clone, PartialEq)]
pub struct GetPermalinkRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Message timestamp
    pub message_ts: Timestamp,
}

impl GetPermalinkRequest {
    /// Create a new permalink request
    pub fn new(channel: impl Into<ChannelId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: channel.into(),
            message_ts: ts.into(),
        }
    }
}

impl ToArgs for GetPermalinkRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with("message_ts", self.message_ts.as_str()))
    }
}

/// Request to schedule a message
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMessageRequest {
    /// Channel to post to
    pub channel: ChannelId,
    /// Unix timestamp to post at
    pub post_at: i64,
    /// Message text
    pub text: Option<String>,
    /// Blocks
    pub blocks: Option<Vec<Block>>,
    /// Thread timestamp
    pub thread_ts: Option<Timestamp>,
    /// Broadcast reply to channel
    pub reply_broadcast: Option<bool>,
}

impl ScheduleMessageRequest {
    /// Create a new schedule request
    pub fn new(channel: impl Into<ChannelId>, post_at: i64, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            post_at,
            text: Some(text.into()),
            blocks: None,
            thread_ts: None,
            reply_broadcast: None,
        }
    }

    /// Schedule for a point in time
    pub fn at(
        channel: impl Into<ChannelId>,
        post_at: chrono::DateTime<chrono::Utc>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(channel, post_at.timestamp(), text)
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Reply in thread
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    /// Broadcast reply to channel
    pub fn reply_broadcast(mut self, broadcast: bool) -> Self {
        self.reply_broadcast = Some(broadcast);
        self
    }
}

impl ToArgs for ScheduleMessageRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with("post_at", self.post_at)
            .with_opt("text", self.text.as_ref())
            .with_opt_json("blocks", self.blocks.as_ref())?
            .with_opt("thread_ts", self.thread_ts.as_ref().map(Timestamp::as_str))
            .with_opt("reply_broadcast", self.reply_broadcast))
    }
}

/// Request to delete a scheduled message
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteScheduledMessageRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Scheduled message ID
    pub scheduled_message_id: String,
    /// Delete as the authed user (user tokens only)
    pub as_user: Option<bool>,
}

impl DeleteScheduledMessageRequest {
    /// Create a new delete scheduled request
    pub fn new(channel: impl Into<ChannelId>, scheduled_message_id: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            scheduled_message_id: scheduled_message_id.into(),
            as_user: None,
        }
    }

    /// Delete as the authed user
    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }
}

impl ToArgs for DeleteScheduledMessageRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("channel", self.channel.as_str())
            .with("scheduled_message_id", &self.scheduled_message_id)
            .with_opt("as_user", self.as_user))
    }
}
