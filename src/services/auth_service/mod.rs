//! Auth service for Slack API.
//!
//! Identity checks and token revocation.

use crate::args::{Args, ToArgs};
use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{TeamId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

/// Payload of auth.test
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthTestResponse {
    /// URL of the workspace
    pub url: String,
    /// Team name
    pub team: String,
    /// User name
    pub user: String,
    /// Team ID
    pub team_id: TeamId,
    /// User ID
    pub user_id: UserId,
    /// Bot ID (if bot token)
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Enterprise ID
    #[serde(default)]
    pub enterprise_id: Option<String>,
    /// Whether enterprise install
    #[serde(default)]
    pub is_enterprise_install: bool,
}

/// Payload of auth.revoke
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRevokeResponse {
    /// Whether token was revoked
    pub revoked: bool,
}

/// Request to revoke the calling token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevokeRequest {
    /// Check the token without revoking it
    pub test: Option<bool>,
}

impl RevokeRequest {
    /// Create a new revoke request
    pub fn new() -> Self {
        Self::default()
    }

    /// Only test whether the token would be revoked
    pub fn test(mut self, test: bool) -> Self {
        self.test = Some(test);
        self
    }
}

impl ToArgs for RevokeRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new().with_opt("test", self.test))
    }
}

/// Trait for auth service operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Test authentication and get identity
    async fn test(&self) -> SlackResult<AuthTestResponse>;

    /// Revoke the calling token
    async fn revoke(&self, request: RevokeRequest) -> SlackResult<bool>;
}

/// Auth service implementation
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    #[instrument(skip(self))]
    async fn test(&self) -> SlackResult<AuthTestResponse> {
        self.api.post("auth.test", &Args::new()).await
    }

    #[instrument(skip(self, request))]
    async fn revoke(&self, request: RevokeRequest) -> SlackResult<bool> {
        let response: AuthRevokeResponse = self.api.post("auth.revoke", &request.to_args()?).await?;
        Ok(response.revoked)
    }
}
