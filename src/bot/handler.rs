//! Message handlers registered with a bot.

use super::message::SlackMessage;
use crate::errors::SlackResult;
use async_trait::async_trait;

/// Reacts to messages addressed to the bot
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handle one inbound message
    async fn handle(&self, message: &SlackMessage) -> SlackResult<()>;
}
