//! Outgoing and incoming bot messages.

use super::sender::{MessageSender, ReplyResult};
use crate::blocks::Block;
use crate::errors::SlackResult;
use crate::observability::Redacted;
use crate::types::{ChannelId, Timestamp, UserId};
use std::future::Future;
use std::sync::Arc;

/// Position of a message a reply is anchored to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    /// Timestamp of the message
    pub ts: Timestamp,
    /// Parent thread, when the message was itself a thread reply
    pub thread_ts: Option<Timestamp>,
}

/// A message the bot wants to send
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BotMessage {
    /// Message text (fallback text when blocks are set)
    pub text: Option<String>,
    /// Block Kit blocks
    pub blocks: Option<Vec<Block>>,
    /// Conversation to post into
    pub conversation: Option<ChannelId>,
    /// Message being replied to
    pub reply_to: Option<MessageRef>,
    /// Start a thread under `reply_to` instead of answering in the channel
    pub create_thread: bool,
    /// Also show a thread reply in the channel
    pub reply_broadcast: bool,
    /// Enable link unfurling
    pub unfurl_links: Option<bool>,
    /// Enable media unfurling
    pub unfurl_media: Option<bool>,
}

impl BotMessage {
    /// Create a text message
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a block message
    pub fn blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks: Some(blocks),
            ..Self::default()
        }
    }

    /// Set fallback text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the target conversation
    pub fn to(mut self, conversation: impl Into<ChannelId>) -> Self {
        self.conversation = Some(conversation.into());
        self
    }

    /// Answer in a thread
    pub fn in_thread(mut self, create_thread: bool) -> Self {
        self.create_thread = create_thread;
        self
    }

    /// Broadcast a thread reply to the channel
    pub fn broadcast(mut self, broadcast: bool) -> Self {
        self.reply_broadcast = broadcast;
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

    /// Thread the message lands in, if any.
    ///
    /// A reply to a threaded message stays in that thread; otherwise a thread
    /// is started under the original only when `create_thread` is set.
    pub fn thread_ts(&self) -> Option<&Timestamp> {
        let reply_to = self.reply_to.as_ref()?;
        match &reply_to.thread_ts {
            Some(thread_ts) => Some(thread_ts),
            None if self.create_thread => Some(&reply_to.ts),
            None => None,
        }
    }
}

/// A message received by the bot
#[derive(Clone)]
pub struct SlackMessage {
    /// Message timestamp
    pub ts: Timestamp,
    /// Parent thread timestamp
    pub thread_ts: Option<Timestamp>,
    /// Message text
    pub text: String,
    /// Author
    pub user: Option<UserId>,
    /// Conversation the message was posted in
    pub conversation: ChannelId,
    /// Block Kit blocks
    pub blocks: Vec<Block>,
    /// Whether the bot was @-mentioned
    pub mentions_bot: bool,
    sender: Arc<dyn MessageSender>,
}

impl SlackMessage {
    /// Create an inbound message bound to `sender`
    pub fn new(
        ts: impl Into<Timestamp>,
        conversation: impl Into<ChannelId>,
        text: impl Into<String>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        Self {
            ts: ts.into(),
            thread_ts: None,
            text: text.into(),
            user: None,
            conversation: conversation.into(),
            blocks: Vec::new(),
            mentions_bot: false,
            sender,
        }
    }

    /// Set the parent thread
    pub fn with_thread_ts(mut self, thread_ts: Option<Timestamp>) -> Self {
        self.thread_ts = thread_ts;
        self
    }

    /// Set the author
    pub fn with_user(mut self, user: Option<UserId>) -> Self {
        self.user = user;
        self
    }

    /// Set the blocks
    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Mark whether the bot was mentioned
    pub fn with_mentions_bot(mut self, mentions_bot: bool) -> Self {
        self.mentions_bot = mentions_bot;
        self
    }

    /// Reference to this message for anchoring replies
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            ts: self.ts.clone(),
            thread_ts: self.thread_ts.clone(),
        }
    }

    /// Send `message` as a reply to this message
    pub async fn reply_with(&self, mut message: BotMessage) -> SlackResult<Timestamp> {
        message.reply_to = Some(self.message_ref());
        message.conversation = Some(self.conversation.clone());
        self.sender.send(message).await
    }

    /// Reply with plain text
    pub async fn reply_with_text(
        &self,
        text: impl Into<String>,
        create_thread: bool,
    ) -> SlackResult<Timestamp> {
        self.reply_with(BotMessage::text(text).in_thread(create_thread))
            .await
    }

    /// Produce a reply while showing the typing indicator, then send it.
    ///
    /// Returns `None` when `create_reply` decides not to answer.
    pub async fn reply_while_typing<'a, F, Fut>(
        &'a self,
        create_reply: F,
    ) -> SlackResult<Option<Timestamp>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ReplyResult> + Send + 'a,
    {
        let reply = self
            .sender
            .while_typing(&self.conversation, Box::pin(create_reply()))
            .await?;

        match reply {
            Some(message) => self.reply_with(message).await.map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for SlackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackMessage")
            .field("ts", &self.ts)
            .field("thread_ts", &self.thread_ts)
            .field("conversation", &self.conversation)
            .field("user", &self.user)
            .field("mentions_bot", &self.mentions_bot)
            .field("text", &Redacted::new(&self.text))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reply_to(ts: &str, thread_ts: Option<&str>) -> Option<MessageRef> {
        Some(MessageRef {
            ts: Timestamp::new(ts),
            thread_ts: thread_ts.map(Timestamp::new),
        })
    }

    #[test]
    fn test_thread_ts_without_reply_to() {
        let message = BotMessage::text("hi").to("C1").in_thread(true);
        assert_eq!(message.thread_ts(), None);
    }

    #[test]
    fn test_thread_ts_follows_existing_thread() {
        let mut message = BotMessage::text("hi");
        message.reply_to = reply_to("2.0", Some("1.0"));
        assert_eq!(message.thread_ts(), Some(&Timestamp::new("1.0")));

        // create_thread does not move a reply out of its thread
        message.create_thread = true;
        assert_eq!(message.thread_ts(), Some(&Timestamp::new("1.0")));
    }

    #[test]
    fn test_thread_ts_creates_thread_on_request() {
        let mut message = BotMessage::text("hi").in_thread(true);
        message.reply_to = reply_to("2.0", None);
        assert_eq!(message.thread_ts(), Some(&Timestamp::new("2.0")));

        message.create_thread = false;
        assert_eq!(message.thread_ts(), None);
    }

    #[test]
    fn test_builders() {
        let message = BotMessage::blocks(vec![Block::divider()])
            .with_text("fallback")
            .to("C42")
            .broadcast(true)
            .unfurl_links(false);

        assert_eq!(message.text.as_deref(), Some("fallback"));
        assert_eq!(message.blocks.as_ref().map(Vec::len), Some(1));
        assert_eq!(message.conversation, Some(ChannelId::new("C42")));
        assert!(message.reply_broadcast);
        assert_eq!(message.unfurl_links, Some(false));
        assert_eq!(message.unfurl_media, None);
    }
}
