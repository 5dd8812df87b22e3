//! Messages service implementation.

use super::*;
use crate::args::ToArgs;
use crate::client::{Ack, ApiClient};
use crate::errors::SlackResult;
use crate::types::Timestamp;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for messages service operations
#[async_trait]
pub trait MessagesServiceTrait: Send + Sync {
    /// Post a message to a channel
    async fn post(&self, request: PostMessageRequest) -> SlackResult<PostMessageResponse>;

    /// Update an existing message
    async fn update(&self, request: UpdateMessageRequest) -> SlackResult<UpdateMessageResponse>;

    /// Delete a message
    async fn delete(&self, request: DeleteMessageRequest) -> SlackResult<()>;

    /// Post an ephemeral message (visible only to one user)
    async fn post_ephemeral(&self, request: PostEphemeralRequest) -> SlackResult<Timestamp>;

    /// Post a `/me` message
    async fn me_message(&self, request: MeMessageRequest) -> SlackResult<MeMessageResponse>;

    /// Get a message's permalink
    async fn get_permalink(&self, request: GetPermalinkRequest) -> SlackResult<String>;

    /// Schedule a message for later
    async fn schedule(
        &self,
        request: ScheduleMessageRequest,
    ) -> SlackResult<ScheduleMessageResponse>;

    /// Delete a scheduled message
    async fn delete_scheduled(&self, request: DeleteScheduledMessageRequest) -> SlackResult<()>;
}

/// Messages service implementation
#[derive(Debug, Clone)]
pub struct MessagesService {
    api: ApiClient,
}

impl MessagesService {
    /// Create a new messages service
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl MessagesServiceTrait for MessagesService {
    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn post(&self, request: PostMessageRequest) -> SlackResult<PostMessageResponse> {
        self.api
            .post_json("chat.postMessage", &request.to_args()?)
            .await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, ts = %request.ts))]
    async fn update(&self, request: UpdateMessageRequest) -> SlackResult<UpdateMessageResponse> {
        self.api.post_json("chat.update", &request.to_args()?).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, ts = %request.ts))]
    async fn delete(&self, request: DeleteMessageRequest) -> SlackResult<()> {
        let _: Ack = self.api.post("chat.delete", &request.to_args()?).await?;
        Ok(())
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, user = %request.user))]
    async fn post_ephemeral(&self, request: PostEphemeralRequest) -> SlackResult<Timestamp> {
        let response: PostEphemeralResponse = self
            .api
            .post_json("chat.postEphemeral", &request.to_args()?)
            .await?;
        Ok(response.message_ts)
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn me_message(&self, request: MeMessageRequest) -> SlackResult<MeMessageResponse> {
        self.api.post("chat.meMessage", &request.to_args()?).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, ts = %request.message_ts))]
    async fn get_permalink(&self, request: GetPermalinkRequest) -> SlackResult<String> {
        let response: GetPermalinkResponse = self
            .api
            .get("chat.getPermalink", &request.to_args()?)
            .await?;
        Ok(response.permalink)
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, post_at = request.post_at))]
    async fn schedule(
        &self,
        request: ScheduleMessageRequest,
    ) -> SlackResult<ScheduleMessageResponse> {
        self.api
            .post_json("chat.scheduleMessage", &request.to_args()?)
            .await
    }

    #[instrument(
        skip(self, request),
        fields(channel = %request.channel, id = %request.scheduled_message_id)
    )]
    async fn delete_scheduled(&self, request: DeleteScheduledMessageRequest) -> SlackResult<()> {
        let _: Ack = self
            .api
            .post("chat.deleteScheduledMessage", &request.to_args()?)
            .await?;
        Ok(())
    }
}
