//! Typing indication while a reply is being produced.

use crate::errors::SlackResult;
use crate::types::ChannelId;
use async_trait::async_trait;
use futures::future::{BoxFuture, Fuse, FusedFuture, FutureExt};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// How often the indicator is pinged while work is running
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_secs(3);

/// Shows a "bot is typing" state in a conversation.
///
/// The Web API has no typing endpoint, so this is provided by whatever
/// real-time connection the application runs.
#[async_trait]
pub trait TypingIndicator: Send + Sync {
    /// Signal typing once in `channel`
    async fn indicate_typing(&self, channel: &ChannelId) -> SlackResult<()>;
}

/// Indicator that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTypingIndicator;

#[async_trait]
impl TypingIndicator for NoopTypingIndicator {
    async fn indicate_typing(&self, _channel: &ChannelId) -> SlackResult<()> {
        Ok(())
    }
}

/// Drive `work` to completion, pinging `indicator` every `interval` meanwhile.
///
/// The first ping happens as soon as `work` is found pending. Pings run
/// alongside `work`, so a slow indicator never delays its output; one still
/// in flight when `work` finishes is dropped. Indicator failures are logged
/// and never abort the work.
pub async fn while_typing<F, T>(
    indicator: &dyn TypingIndicator,
    channel: &ChannelId,
    interval: Duration,
    work: F,
) -> T
where
    F: Future<Output = T>,
{
    tokio::pin!(work);
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ping: Fuse<BoxFuture<'_, SlackResult<()>>> = Fuse::terminated();

    loop {
        tokio::select! {
            biased;
            output = &mut work => return output,
            result = &mut ping, if !ping.is_terminated() => {
                if let Err(e) = result {
                    debug!(channel = %channel, error = %e, "Typing indication failed");
                }
            }
            _ = ticker.tick(), if ping.is_terminated() => {
                ping = indicator.indicate_typing(channel).fuse();
            }
        }
    }
}
