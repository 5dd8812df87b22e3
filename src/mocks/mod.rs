//! Mock implementations for testing.
//!
//! Provides a scripted transport and a recording message sender so clients,
//! services and bots can be exercised without a network.

use crate::bot::{BotMessage, MessageSender, ReplyResult};
use crate::errors::{ResponseError, SlackError, SlackResult};
use crate::transport::{ApiRequest, HttpTransport};
use crate::types::{ChannelId, Timestamp};
use async_trait::async_trait;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Response body
    pub body: Value,
    /// Delay before response
    pub delay: Option<Duration>,
    /// Error to return instead
    pub error: Option<SlackError>,
}

impl MockResponse {
    /// Create a response with the given JSON body
    pub fn json(body: Value) -> Self {
        Self {
            body,
            delay: None,
            error: None,
        }
    }

    /// Create a bare `{"ok": true}` response
    pub fn ok() -> Self {
        Self::json(json!({"ok": true}))
    }

    /// Create a transport-level error
    pub fn error(error: SlackError) -> Self {
        Self {
            body: Value::Null,
            delay: None,
            error: Some(error),
        }
    }

    /// Create a Slack API error response
    pub fn slack_error(error_code: &str) -> Self {
        Self::json(json!({"ok": false, "error": error_code}))
    }

    /// Add delay to response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Mock HTTP transport for testing
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        self.responses.lock().extend(responses);
        self
    }

    /// Add a JSON response
    pub fn add_json_response(self, body: Value) -> Self {
        self.add_response(MockResponse::json(body))
    }

    /// Set default response when queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: ApiRequest) -> SlackResult<Value> {
        let endpoint = request.endpoint().to_string();
        self.requests.lock().push(request);

        let response = self.next_response().ok_or_else(|| {
            SlackError::Response(ResponseError::InvalidBody {
                message: format!("no mock response configured for {}", endpoint),
            })
        })?;

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }

        match response.error {
            Some(error) => Err(error),
            None => Ok(response.body),
        }
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

/// Message sender that records what it is asked to send
#[derive(Debug, Clone, Default)]
pub struct MockMessageSender {
    sent: Arc<Mutex<Vec<BotMessage>>>,
    typing: Arc<Mutex<Vec<ChannelId>>>,
}

impl MockMessageSender {
    /// Create a new sender
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far
    pub fn sent(&self) -> Vec<BotMessage> {
        self.sent.lock().clone()
    }

    /// Channels `while_typing` was entered for
    pub fn typing_channels(&self) -> Vec<ChannelId> {
        self.typing.lock().clone()
    }
}

#[async_trait]
impl MessageSender for MockMessageSender {
    async fn send(&self, message: BotMessage) -> SlackResult<Timestamp> {
        let mut sent = self.sent.lock();
        sent.push(message);
        Ok(Timestamp::new(format!("1700000000.{:06}", sent.len())))
    }

    async fn while_typing(
        &self,
        channel: &ChannelId,
        work: BoxFuture<'_, ReplyResult>,
    ) -> ReplyResult {
        self.typing.lock().push(channel.clone());
        work.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use http::HeaderMap;

    fn request() -> ApiRequest {
        ApiRequest::get("https://slack.com/api/auth.test", HeaderMap::new(), Vec::new())
    }

    #[tokio::test]
    async fn test_mock_transport_returns_queued_bodies_in_order() {
        let transport = MockHttpTransport::new()
            .add_json_response(json!({"ok": true, "n": 1}))
            .add_json_response(json!({"ok": true, "n": 2}));

        assert_eq!(transport.send(request()).await.unwrap()["n"], 1);
        assert_eq!(transport.send(request()).await.unwrap()["n"], 2);
        assert_eq!(transport.requests().len(), 2);
        assert_eq!(transport.remaining_responses(), 0);
    }

    #[tokio::test]
    async fn test_mock_transport_without_responses() {
        let transport = MockHttpTransport::new();
        let err = transport.send(request()).await.unwrap_err();
        assert!(err.to_string().contains("auth.test"));
    }

    #[tokio::test]
    async fn test_mock_transport_error() {
        let transport =
            MockHttpTransport::new().add_response(MockResponse::error(TransportError::Timeout.into()));
        let err = transport.send(request()).await.unwrap_err();
        assert!(matches!(err, SlackError::Transport(TransportError::Timeout)));
        assert_eq!(transport.last_request().unwrap().endpoint(), "auth.test");
    }
}
