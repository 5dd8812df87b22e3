//! Error types for the Slack client.
//!
//! Two failure families reach callers of an endpoint method: transport
//! failures (the request never produced a decodable envelope) and remote
//! rejections (the platform answered with `"ok": false`). The remaining
//! variants cover local configuration, argument and inbound-payload problems.

use std::time::Duration;
use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for the Slack client
#[derive(Error, Debug, Clone)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The request could not be completed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The platform rejected the request
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The response could not be decoded
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// The request could not be built
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Inbound webhook error
    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),
}

impl SlackError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SLACK_CONFIG",
            Self::Transport(_) => "SLACK_TRANSPORT",
            Self::Api(_) => "SLACK_API",
            Self::Response(_) => "SLACK_RESPONSE",
            Self::Request(_) => "SLACK_REQUEST",
            Self::Webhook(_) => "SLACK_WEBHOOK",
        }
    }

    /// The decoded rejection, if the platform returned one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the call was abandoned through its cancellation token
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }

    /// Retry-after hint reported by the platform, if any.
    ///
    /// The client never acts on this itself.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Transport(TransportError::RateLimited { retry_after }) => Some(*retry_after),
            _ => None,
        }
    }
}

/// Remote rejection decoded from an `"ok": false` envelope
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}{}", format_messages(.messages))]
pub struct ApiError {
    /// Error code as returned by the platform (e.g. `invalid_auth`)
    pub code: String,
    /// Warning string accompanying the failure
    pub warning: Option<String>,
    /// Detail lines from `response_metadata.messages`
    pub messages: Vec<String>,
}

fn format_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        String::new()
    } else {
        format!(" ({})", messages.join("; "))
    }
}

impl ApiError {
    /// Create an API error with just a code
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            warning: None,
            messages: Vec::new(),
        }
    }

    /// Classify the error code
    pub fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::from_code(&self.code)
    }

    /// Whether the error code equals `code`
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

/// Classification of well-known platform error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Token is invalid, revoked, expired or the account is inactive
    Authentication,
    /// No token, or the token lacks a scope
    Authorization,
    /// The referenced channel, user, user group or view does not exist
    NotFound,
    /// The arguments were rejected
    InvalidArguments,
    /// A trigger ID was used after it expired
    TriggerExpired,
    /// A view hash did not match the current view
    HashConflict,
    /// The platform failed internally
    Server,
    /// Any other code
    Other,
}

impl ApiErrorKind {
    /// Map a platform error code to its kind
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid_auth" | "account_inactive" | "token_revoked" | "token_expired" => {
                Self::Authentication
            }
            "not_authed" | "missing_scope" | "not_allowed_token_type" | "no_permission"
            | "permission_denied" | "not_in_channel" => Self::Authorization,
            "channel_not_found" | "user_not_found" | "users_not_found" | "no_such_subteam"
            | "not_found" | "message_not_found" => Self::NotFound,
            "invalid_arguments" | "invalid_arg_name" | "invalid_array_arg" | "invalid_json"
            | "json_not_object" | "invalid_blocks" | "validation_errors" | "msg_too_long"
            | "no_text" => Self::InvalidArguments,
            "trigger_expired" | "expired_trigger_id" | "invalid_trigger_id" => {
                Self::TriggerExpired
            }
            "hash_conflict" => Self::HashConflict,
            "internal_error" | "fatal_error" | "service_unavailable" | "request_timeout" => {
                Self::Server
            }
            _ => Self::Other,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    /// Missing token
    #[error("No bot or user token configured")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Transport failures, propagated unchanged to the caller
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// The call was cancelled before a response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// The platform answered HTTP 429
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Delay advertised in `Retry-After`
        retry_after: Duration,
    },

    /// Non-success HTTP status
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Other HTTP-level failure
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

/// Request construction errors
#[derive(Error, Debug, Clone)]
pub enum RequestError {
    /// A nested argument could not be serialized
    #[error("Argument `{name}` could not be serialized: {message}")]
    InvalidArgument {
        /// Wire name of the argument
        name: String,
        /// Serializer message
        message: String,
    },

    /// A bot message had neither a conversation nor a message to reply to
    #[error("Message has no conversation to be sent to")]
    MissingConversation,
}

/// Response parsing errors
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error for {method}: {message}")]
    Deserialization {
        /// Endpoint the payload came from
        method: String,
        /// Error message
        message: String,
    },

    /// Body is not JSON at all
    #[error("Invalid JSON body: {message}")]
    InvalidBody {
        /// Error message
        message: String,
    },

    /// Missing "ok" field
    #[error("Missing 'ok' field in response from {method}")]
    MissingOkField {
        /// Endpoint the envelope came from
        method: String,
    },
}

/// Webhook errors
#[derive(Error, Debug, Clone)]
pub enum WebhookError {
    /// Invalid signature
    #[error("Invalid signature")]
    InvalidSignature,

    /// Expired timestamp
    #[error("Timestamp is too old: {timestamp}")]
    ExpiredTimestamp {
        /// The expired timestamp
        timestamp: i64,
    },

    /// Invalid payload
    #[error("Invalid payload: {message}")]
    InvalidPayload {
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_kind() {
        assert_eq!(ApiError::new("invalid_auth").kind(), ApiErrorKind::Authentication);
        assert_eq!(ApiError::new("missing_scope").kind(), ApiErrorKind::Authorization);
        assert_eq!(ApiError::new("no_such_subteam").kind(), ApiErrorKind::NotFound);
        assert_eq!(ApiError::new("expired_trigger_id").kind(), ApiErrorKind::TriggerExpired);
        assert_eq!(ApiError::new("hash_conflict").kind(), ApiErrorKind::HashConflict);
        assert_eq!(ApiError::new("something_new").kind(), ApiErrorKind::Other);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            code: "invalid_arguments".to_string(),
            warning: None,
            messages: vec!["[ERROR] missing required field: name".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "invalid_arguments ([ERROR] missing required field: name)"
        );
        assert_eq!(ApiError::new("invalid_auth").to_string(), "invalid_auth");
    }

    #[test]
    fn test_cancelled_and_retry_after() {
        let cancelled = SlackError::Transport(TransportError::Cancelled);
        assert!(cancelled.is_cancelled());
        assert_eq!(cancelled.retry_after(), None);

        let limited = SlackError::Transport(TransportError::RateLimited {
            retry_after: Duration::from_secs(10),
        });
        assert!(!limited.is_cancelled());
        assert_eq!(limited.retry_after(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_api_error_accessor() {
        let err = SlackError::from(ApiError::new("channel_not_found"));
        assert_eq!(err.error_code(), "SLACK_API");
        assert!(err.api_error().unwrap().is("channel_not_found"));
        assert!(SlackError::from(TransportError::Timeout).api_error().is_none());
    }
}
