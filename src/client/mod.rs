//! Slack client implementation.
//!
//! Provides the main entry point for interacting with Slack APIs.

mod api_client;
pub mod envelope;

pub use api_client::ApiClient;
pub use envelope::Ack;

use crate::config::SlackConfig;
use crate::errors::SlackResult;
use crate::services::{AuthService, DialogService, MessagesService, UsergroupsService, ViewsService};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Main Slack client.
///
/// Cheap to clone; clones share the transport and configuration.
#[derive(Debug, Clone)]
pub struct SlackClient {
    config: Arc<SlackConfig>,
    api: ApiClient,
}

impl SlackClient {
    /// Create a new Slack client with the given configuration
    pub fn new(config: SlackConfig) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new Slack client with a custom transport
    pub fn with_transport(
        config: SlackConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SlackResult<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let api = ApiClient::new(transport, config.clone());
        Ok(Self { config, api })
    }

    /// Clone of this client whose calls return
    /// [`TransportError::Cancelled`](crate::errors::TransportError::Cancelled)
    /// once `token` is cancelled
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            config: self.config.clone(),
            api: self.api.with_cancellation(token),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Low-level access for endpoints without a typed wrapper
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Get the usergroups service
    pub fn usergroups(&self) -> UsergroupsService {
        UsergroupsService::new(self.api.clone())
    }

    /// Get the views service
    pub fn views(&self) -> ViewsService {
        ViewsService::new(self.api.clone())
    }

    /// Get the dialog service
    pub fn dialog(&self) -> DialogService {
        DialogService::new(self.api.clone())
    }

    /// Get the messages service
    pub fn messages(&self) -> MessagesService {
        MessagesService::new(self.api.clone())
    }

    /// Get the auth service
    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.api.clone())
    }
}
