//! HTTP transport layer for the Slack client.
//!
//! The transport owns the wire: it sends one [`ApiRequest`] and hands back the
//! response body as JSON. Envelope handling happens one layer up, in
//! [`crate::client::ApiClient`].

use crate::errors::{ResponseError, SlackError, SlackResult, TransportError};
use crate::observability::redact_pairs;
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Longest response body kept in a [`TransportError::Status`]
const MAX_ERROR_BODY_LEN: usize = 512;

/// Fallback when a 429 carries no usable `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the decoded JSON body
    async fn send(&self, request: ApiRequest) -> SlackResult<Value>;
}

/// Request body encodings used by the Web API
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body (GET)
    Empty,
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// `application/json`
    Json(Value),
}

/// A single Web API request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    /// Create a GET request with a query string
    pub fn get(url: impl Into<String>, headers: HeaderMap, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
            query,
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    /// Create a form-encoded POST request
    pub fn post_form(
        url: impl Into<String>,
        headers: HeaderMap,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            query: Vec::new(),
            body: RequestBody::Form(fields),
            timeout: None,
        }
    }

    /// Create a JSON POST request
    pub fn post_json(url: impl Into<String>, headers: HeaderMap, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            query: Vec::new(),
            body: RequestBody::Json(body),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Endpoint name: the last path segment of the URL
    pub fn endpoint(&self) -> &str {
        let path = self.url.split('?').next().unwrap_or(&self.url);
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Parameter names carried by this request, whatever the encoding
    pub fn param_names(&self) -> Vec<String> {
        match &self.body {
            RequestBody::Empty => self.query.iter().map(|(k, _)| k.clone()).collect(),
            RequestBody::Form(fields) => fields.iter().map(|(k, _)| k.clone()).collect(),
            RequestBody::Json(Value::Object(map)) => map.keys().cloned().collect(),
            RequestBody::Json(_) => Vec::new(),
        }
    }

    /// Look up a parameter's wire value as text
    pub fn param(&self, name: &str) -> Option<String> {
        let find = |pairs: &[(String, String)]| {
            pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
        };
        match &self.body {
            RequestBody::Empty => find(&self.query),
            RequestBody::Form(fields) => find(fields),
            RequestBody::Json(Value::Object(map)) => map.get(name).map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            RequestBody::Json(_) => None,
        }
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SlackError::Transport(TransportError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    async fn parse_response(&self, response: Response) -> SlackResult<Value> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

            warn!(retry_after, "Rate limited by Slack");
            return Err(TransportError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Transport(TransportError::from(e)))?;

        if !status.is_success() {
            warn!(status = %status, "Request failed with non-success status");
            let mut body = body;
            if body.len() > MAX_ERROR_BODY_LEN {
                let mut cut = MAX_ERROR_BODY_LEN;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        debug!(response_len = body.len(), "Received response");

        serde_json::from_str(&body).map_err(|e| {
            SlackError::Response(ResponseError::InvalidBody {
                message: e.to_string(),
            })
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: ApiRequest) -> SlackResult<Value> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .timeout(timeout);

        if !request.query.is_empty() {
            debug!(query = %redact_pairs(&request.query), "Sending query");
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => {
                debug!(form = %redact_pairs(&fields), "Sending form");
                builder.form(&fields)
            }
            RequestBody::Json(body) => builder.json(&body),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| SlackError::Transport(TransportError::from(e)))?;

        self.parse_response(response).await
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
