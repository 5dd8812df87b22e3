//! Views service for Slack API.
//!
//! Opens, pushes and updates modals and publishes home tabs.

use crate::args::{Args, ToArgs};
use crate::blocks::{View, ViewInfo};
use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::UserId;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

/// Request to open a modal view
#[derive(Debug, Clone, PartialEq)]
pub struct OpenViewRequest {
    /// Trigger ID from interaction
    pub trigger_id: String,
    /// View definition
    pub view: View,
}

impl OpenViewRequest {
    /// Create a new request
    pub fn new(trigger_id: impl Into<String>, view: View) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            view,
        }
    }
}

impl ToArgs for OpenViewRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Args::new()
            .with("trigger_id", &self.trigger_id)
            .with_json("view", &self.view)
    }
}

/// Request to push a view onto the modal stack
#[derive(Debug, Clone, PartialEq)]
pub struct PushViewRequest {
    /// Trigger ID from interaction
    pub trigger_id: String,
    /// View definition
    pub view: View,
}

impl PushViewRequest {
    /// Create a new request
    pub fn new(trigger_id: impl Into<String>, view: View) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            view,
        }
    }
}

impl ToArgs for PushViewRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Args::new()
            .with("trigger_id", &self.trigger_id)
            .with_json("view", &self.view)
    }
}

/// Request to publish a home tab view
#[derive(Debug, Clone, PartialEq)]
pub struct PublishViewRequest {
    /// User the home tab belongs to
    pub user_id: UserId,
    /// View definition (home type)
    pub view: View,
    /// Hash for optimistic locking
    pub hash: Option<String>,
}

impl PublishViewRequest {
    /// Create a new request
    pub fn new(user_id: impl Into<UserId>, view: View) -> Self {
        Self {
            user_id: user_id.into(),
            view,
            hash: None,
        }
    }

    /// Set hash for optimistic locking
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

impl ToArgs for PublishViewRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("user_id", self.user_id.as_str())
            .with_json("view", &self.view)?
            .with_opt("hash", self.hash.as_ref()))
    }
}

/// Request to update an existing view, addressed by view ID or external ID
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateViewRequest {
    /// View definition
    pub view: View,
    /// External ID of the view
    pub external_id: Option<String>,
    /// Hash for optimistic locking
    pub hash: Option<String>,
    /// View ID to update
    pub view_id: Option<String>,
}

impl UpdateViewRequest {
    /// Update by view ID
    pub fn by_view_id(view_id: impl Into<String>, view: View) -> Self {
        Self {
            view,
            external_id: None,
            hash: None,
            view_id: Some(view_id.into()),
        }
    }

    /// Update by external ID
    pub fn by_external_id(external_id: impl Into<String>, view: View) -> Self {
        Self {
            view,
            external_id: Some(external_id.into()),
            hash: None,
            view_id: None,
        }
    }

    /// Set hash for optimistic locking
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

impl ToArgs for UpdateViewRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with_json("view", &self.view)?
            .with_opt("external_id", self.external_id.as_ref())
            .with_opt("hash", self.hash.as_ref())
            .with_opt("view_id", self.view_id.as_ref()))
    }
}

/// Payload of every `views.*` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ViewResponse {
    /// The view as stored by the platform
    pub view: ViewInfo,
}

/// Trait for views service operations
#[async_trait]
pub trait ViewsServiceTrait: Send + Sync {
    /// Open a modal view
    async fn open(&self, request: OpenViewRequest) -> SlackResult<ViewInfo>;

    /// Publish a home tab view
    async fn publish(&self, request: PublishViewRequest) -> SlackResult<ViewInfo>;

    /// Push a new view onto the view stack
    async fn push(&self, request: PushViewRequest) -> SlackResult<ViewInfo>;

    /// Update an existing view
    async fn update(&self, request: UpdateViewRequest) -> SlackResult<ViewInfo>;
}

/// Views service implementation
#[derive(Debug, Clone)]
pub struct ViewsService {
    api: ApiClient,
}

impl ViewsService {
    /// Create a new views service
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ViewsServiceTrait for ViewsService {
    #[instrument(skip(self, request), fields(trigger_id = %request.trigger_id))]
    async fn open(&self, request: OpenViewRequest) -> SlackResult<ViewInfo> {
        let response: ViewResponse = self.api.post("views.open", &request.to_args()?).await?;
        Ok(response.view)
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    async fn publish(&self, request: PublishViewRequest) -> SlackResult<ViewInfo> {
        let response: ViewResponse = self.api.post("views.publish", &request.to_args()?).await?;
        Ok(response.view)
    }

    #[instrument(skip(self, request), fields(trigger_id = %request.trigger_id))]
    async fn push(&self, request: PushViewRequest) -> SlackResult<ViewInfo> {
        let response: ViewResponse = self.api.post("views.push", &request.to_args()?).await?;
        Ok(response.view)
    }

    #[instrument(
        skip(self, request),
        fields(view_id = ?request.view_id, external_id = ?request.external_id)
    )]
    async fn update(&self, request: UpdateViewRequest) -> SlackResult<ViewInfo> {
        let response: ViewResponse = self.api.post("views.update", &request.to_args()?).await?;
        Ok(response.view)
    }
}
