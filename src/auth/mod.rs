//! Authentication headers for Slack API requests.

use crate::config::{SlackConfig, SlackToken};
use crate::errors::{ConfigurationError, SlackError, SlackResult};
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::sync::Arc;

/// Token kind selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bot token (xoxb-*)
    Bot,
    /// User token (xoxp-*)
    User,
}

/// Authentication manager for Slack API requests
#[derive(Clone)]
pub struct AuthManager {
    config: Arc<SlackConfig>,
}

impl AuthManager {
    /// Create a new authentication manager
    pub fn new(config: Arc<SlackConfig>) -> Self {
        Self { config }
    }

    /// Headers authorized with the bot token
    pub fn get_bot_headers(&self) -> SlackResult<HeaderMap> {
        let token = self
            .config
            .bot_token()
            .ok_or(SlackError::Configuration(ConfigurationError::MissingToken))?;
        self.build_headers(token)
    }

    /// Headers authorized with the user token
    pub fn get_user_headers(&self) -> SlackResult<HeaderMap> {
        let token = self
            .config
            .user_token()
            .ok_or(SlackError::Configuration(ConfigurationError::MissingToken))?;
        self.build_headers(token)
    }

    /// Headers authorized with the primary token (bot preferred, then user)
    pub fn get_primary_headers(&self) -> SlackResult<HeaderMap> {
        let token = self
            .config
            .primary_token()
            .ok_or(SlackError::Configuration(ConfigurationError::MissingToken))?;
        self.build_headers(token)
    }

    fn build_headers(&self, token: &SlackToken) -> SlackResult<HeaderMap> {
        let mut headers = self.config.default_headers.clone();

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| {
                SlackError::Configuration(ConfigurationError::InvalidToken(
                    "token contains characters not allowed in a header".to_string(),
                ))
            })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Check if a specific token type is available
    pub fn has_token(&self, token_kind: TokenKind) -> bool {
        match token_kind {
            TokenKind::Bot => self.config.bot_token().is_some(),
            TokenKind::User => self.config.user_token().is_some(),
        }
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("has_bot_token", &self.has_token(TokenKind::Bot))
            .field("has_user_token", &self.has_token(TokenKind::User))
            .finish()
    }
}
