//! Sending bot messages through the Web API.

use super::handler::MessageHandler;
use super::message::{BotMessage, SlackMessage};
use super::typing::{self, NoopTypingIndicator, TypingIndicator, DEFAULT_TYPING_INTERVAL};
use crate::client::SlackClient;
use crate::errors::{RequestError, SlackError, SlackResult};
use crate::events::{AppMentionEvent, EventCallback, InnerEvent, MessageEvent};
use crate::services::auth_service::{AuthServiceTrait, AuthTestResponse};
use crate::services::messages::{MessagesServiceTrait, PostMessageRequest};
use crate::types::{ChannelId, TeamId, Timestamp, UserId};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

/// Outcome of a reply producer: the reply to send, or `None` for no reply
pub type ReplyResult = SlackResult<Option<BotMessage>>;

/// Delivery seam used by [`SlackMessage`]
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send a message and return its timestamp
    async fn send(&self, message: BotMessage) -> SlackResult<Timestamp>;

    /// Run `work` while showing the typing indicator in `channel`
    async fn while_typing(
        &self,
        channel: &ChannelId,
        work: BoxFuture<'_, ReplyResult>,
    ) -> ReplyResult;
}

/// Identity of the bot user, as reported by `auth.test`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    /// Bot user ID
    pub user_id: UserId,
    /// Bot ID
    pub bot_id: Option<String>,
    /// Bot user name
    pub name: String,
    /// Workspace ID
    pub team_id: TeamId,
}

impl BotIdentity {
    /// Mention markup for this bot, e.g. `<@U123>`
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }

    /// Whether `text` mentions this bot, as `<@U123>` or `<@U123|name>`
    pub fn is_mentioned_in(&self, text: &str) -> bool {
        let prefix = format!("<@{}", self.user_id);
        text.match_indices(&prefix).any(|(at, _)| {
            matches!(text[at + prefix.len()..].chars().next(), Some('>') | Some('|'))
        })
    }
}

impl From<AuthTestResponse> for BotIdentity {
    fn from(response: AuthTestResponse) -> Self {
        Self {
            user_id: response.user_id,
            bot_id: response.bot_id,
            name: response.user,
            team_id: response.team_id,
        }
    }
}

/// Bot bound to a [`SlackClient`]
#[derive(Clone)]
pub struct SlackBot {
    client: SlackClient,
    typing: Arc<dyn TypingIndicator>,
    typing_interval: Duration,
    identity: Arc<OnceCell<BotIdentity>>,
    handlers: Vec<Arc<dyn MessageHandler>>,
}

impl SlackBot {
    /// Create a bot without typing indication
    pub fn new(client: SlackClient) -> Self {
        Self {
            client,
            typing: Arc::new(NoopTypingIndicator),
            typing_interval: DEFAULT_TYPING_INTERVAL,
            identity: Arc::new(OnceCell::new()),
            handlers: Vec::new(),
        }
    }

    /// Use `indicator` for typing indication
    pub fn with_typing_indicator(mut self, indicator: Arc<dyn TypingIndicator>) -> Self {
        self.typing = indicator;
        self
    }

    /// Set how often the typing indicator is pinged
    pub fn with_typing_interval(mut self, interval: Duration) -> Self {
        self.typing_interval = interval;
        self
    }

    /// Register a message handler
    pub fn with_handler(mut self, handler: Arc<dyn MessageHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Underlying client
    pub fn client(&self) -> &SlackClient {
        &self.client
    }

    /// Bot identity, once [`connect`](Self::connect) has succeeded
    pub fn identity(&self) -> Option<&BotIdentity> {
        self.identity.get()
    }

    /// Resolve the bot identity with `auth.test`.
    ///
    /// The call is made once; later calls return the cached identity.
    pub async fn connect(&self) -> SlackResult<&BotIdentity> {
        self.identity
            .get_or_try_init(|| async {
                let response = self.client.auth_service().test().await?;
                info!(
                    user_id = %response.user_id,
                    team_id = %response.team_id,
                    "Bot connected"
                );
                Ok::<_, SlackError>(BotIdentity::from(response))
            })
            .await
    }

    /// Turn an inbound event into a message for the handlers.
    ///
    /// Returns `None` for the bot's own messages, edits, deletions and any
    /// other event kind. A channel message mentioning the bot is also
    /// delivered as `app_mention` with the same `ts`, so only the
    /// `app_mention` copy is kept; direct messages have no such copy.
    pub fn message_from_event(
        &self,
        identity: &BotIdentity,
        event: InnerEvent,
    ) -> Option<SlackMessage> {
        let sender: Arc<dyn MessageSender> = Arc::new(self.clone());

        match event {
            InnerEvent::AppMention(AppMentionEvent {
                user,
                text,
                ts,
                channel,
                thread_ts,
                blocks,
            }) => Some(
                SlackMessage::new(ts, channel, text, sender)
                    .with_thread_ts(thread_ts)
                    .with_user(Some(user))
                    .with_blocks(blocks)
                    .with_mentions_bot(true),
            ),
            InnerEvent::Message(event) => {
                if event.subtype.is_some()
                    || event.is_bot_message()
                    || event.user.as_ref() == Some(&identity.user_id)
                {
                    debug!(ts = %event.ts, subtype = ?event.subtype, "Skipping message event");
                    return None;
                }

                let direct = event.is_direct_message();
                let MessageEvent {
                    user,
                    text,
                    ts,
                    channel,
                    thread_ts,
                    blocks,
                    ..
                } = event;
                let text = text.unwrap_or_default();
                let mentions_bot = identity.is_mentioned_in(&text);
                if mentions_bot && !direct {
                    debug!(ts = %ts, "Mention left to app_mention event");
                    return None;
                }

                Some(
                    SlackMessage::new(ts, channel, text, sender)
                        .with_thread_ts(thread_ts)
                        .with_user(user)
                        .with_blocks(blocks)
                        .with_mentions_bot(mentions_bot),
                )
            }
            InnerEvent::Unknown => None,
        }
    }

    /// Dispatch an Events API callback to the registered handlers.
    ///
    /// Handler failures are logged and do not stop the remaining handlers.
    /// Returns whether the event produced a message.
    #[instrument(skip(self, callback), fields(event_id = %callback.event_id))]
    pub async fn handle_event(&self, callback: EventCallback) -> SlackResult<bool> {
        let identity = self.connect().await?.clone();

        let Some(message) = self.message_from_event(&identity, callback.event) else {
            return Ok(false);
        };

        for handler in &self.handlers {
            if let Err(e) = handler.handle(&message).await {
                warn!(handler = handler.name(), error = %e, "Message handler failed");
            }
        }

        Ok(true)
    }
}

/// Build the `chat.postMessage` request for `message`
pub fn post_request(message: BotMessage) -> SlackResult<PostMessageRequest> {
    let channel = message
        .conversation
        .clone()
        .ok_or(SlackError::Request(RequestError::MissingConversation))?;

    if message.text.is_none() && message.blocks.is_none() {
        return Err(RequestError::InvalidArgument {
            name: "text".to_string(),
            message: "a message needs text or blocks".to_string(),
        }
        .into());
    }

    let thread_ts = message.thread_ts().cloned();
    let mut request = match message.blocks {
        Some(blocks) => PostMessageRequest::with_blocks(channel, blocks),
        None => PostMessageRequest::new(channel, String::new()),
    };
    request.text = message.text;
    request.unfurl_links = message.unfurl_links;
    request.unfurl_media = message.unfurl_media;

    if let Some(thread_ts) = thread_ts {
        request = request.thread_ts(thread_ts);
        if message.reply_broadcast {
            request = request.reply_broadcast(true);
        }
    }

    Ok(request)
}

#[async_trait]
impl MessageSender for SlackBot {
    #[instrument(skip(self, message), fields(channel = ?message.conversation))]
    async fn send(&self, message: BotMessage) -> SlackResult<Timestamp> {
        let request = post_request(message)?;
        let response = self.client.messages().post(request).await?;
        Ok(response.ts)
    }

    async fn while_typing(
        &self,
        channel: &ChannelId,
        work: BoxFuture<'_, ReplyResult>,
    ) -> ReplyResult {
        typing::while_typing(self.typing.as_ref(), channel, self.typing_interval, work).await
    }
}

impl std::fmt::Debug for SlackBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackBot")
            .field("client", &self.client)
            .field("typing_interval", &self.typing_interval)
            .field("identity", &self.identity.get())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
