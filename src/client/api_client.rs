//! Shared dispatch used by every endpoint method.

use super::envelope;
use crate::args::Args;
use crate::auth::AuthManager;
use crate::config::SlackConfig;
use crate::errors::{SlackResult, TransportError};
use crate::observability::{create_request_span, record_error, record_success, RequestTrace};
use crate::transport::{ApiRequest, HttpTransport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, Instrument};

/// Low-level Web API client: builds requests, sends them and unwraps envelopes
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<SlackConfig>,
    cancellation: Option<CancellationToken>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<SlackConfig>) -> Self {
        Self {
            transport,
            auth: AuthManager::new(config.clone()),
            config,
            cancellation: None,
        }
    }

    /// Clone of this client whose calls stop when `token` is cancelled
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..self.clone()
        }
    }

    /// Cancellation token attached to this client, if any
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Configuration in use
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// POST `args` form-encoded to `method` and decode the payload
    pub async fn post<T: DeserializeOwned>(&self, method: &str, args: &Args) -> SlackResult<T> {
        let headers = self.auth.get_primary_headers()?;
        let request =
            ApiRequest::post_form(self.config.build_url(method), headers, args.to_form_fields());
        self.dispatch(method, request).await
    }

    /// GET `method` with `args` as the query string and decode the payload
    pub async fn get<T: DeserializeOwned>(&self, method: &str, args: &Args) -> SlackResult<T> {
        let headers = self.auth.get_primary_headers()?;
        let request =
            ApiRequest::get(self.config.build_url(method), headers, args.to_form_fields());
        self.dispatch(method, request).await
    }

    /// POST `args` as a JSON object to `method` and decode the payload
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        method: &str,
        args: &Args,
    ) -> SlackResult<T> {
        let headers = self.auth.get_primary_headers()?;
        let request =
            ApiRequest::post_json(self.config.build_url(method), headers, args.to_json_object());
        self.dispatch(method, request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: &str,
        request: ApiRequest,
    ) -> SlackResult<T> {
        let trace = RequestTrace::new(method);
        let span = create_request_span(request.method.as_str(), method, &trace.request_id);
        let request = request.with_timeout(self.config.timeout);

        let result = async {
            let body = match &self.cancellation {
                Some(token) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => Err(TransportError::Cancelled.into()),
                        body = self.transport.send(request) => body,
                    }
                }
                None => self.transport.send(request).await,
            }?;
            envelope::decode::<T>(method, body)
        }
        .instrument(span.clone())
        .await;

        match &result {
            Ok(_) => record_success(&span),
            Err(e) => record_error(&span, &e.to_string()),
        }
        debug!(
            parent: &span,
            duration_ms = trace.elapsed_ms(),
            ok = result.is_ok(),
            "Request completed"
        );

        result
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("auth", &self.auth)
            .field("cancellable", &self.cancellation.is_some())
            .finish()
    }
}
