//! Small bot layer on top of [`SlackClient`](crate::SlackClient).
//!
//! Inbound events become [`SlackMessage`]s that can answer themselves with
//! [`SlackMessage::reply_with`] or [`SlackMessage::reply_while_typing`].
//!
//! ```rust,no_run
//! use slack_bot_kit::bot::{BotMessage, MessageHandler, SlackBot, SlackMessage};
//! use slack_bot_kit::SlackResult;
//! use std::sync::Arc;
//!
//! struct Echo;
//!
//! #[async_trait::async_trait]
//! impl MessageHandler for Echo {
//!     async fn handle(&self, message: &SlackMessage) -> SlackResult<()> {
//!         if message.mentions_bot {
//!             message.reply_with(BotMessage::text(message.text.clone()).in_thread(true)).await?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> SlackResult<()> {
//! let bot = SlackBot::new(slack_bot_kit::create_client_from_env()?).with_handler(Arc::new(Echo));
//! bot.connect().await?;
//! # Ok(())
//! # }
//! ```

mod handler;
mod message;
mod sender;
pub mod typing;

pub use handler::MessageHandler;
pub use message::{BotMessage, MessageRef, SlackMessage};
pub use sender::{post_request, BotIdentity, MessageSender, ReplyResult, SlackBot};
pub use typing::{NoopTypingIndicator, TypingIndicator, DEFAULT_TYPING_INTERVAL};
