//! Request signature verification.

use crate::config::SlackConfig;
use crate::errors::{ConfigurationError, SlackResult, WebhookError};
use crate::observability::Redacted;
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::Duration;
use tracing::{debug, warn};

/// Default timestamp tolerance (5 minutes)
const DEFAULT_TIMESTAMP_TOLERANCE_SECS: u64 = 300;

/// Header carrying the request timestamp
pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";

/// Verifies `v0` HMAC-SHA256 request signatures
#[derive(Clone)]
pub struct SignatureVerifier {
    signing_secret: SecretString,
    timestamp_tolerance: Duration,
}

impl SignatureVerifier {
    /// Create a new verifier with the signing secret
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: SecretString::new(signing_secret.into()),
            timestamp_tolerance: Duration::from_secs(DEFAULT_TIMESTAMP_TOLERANCE_SECS),
        }
    }

    /// Create a verifier from the configured signing secret
    pub fn from_config(config: &SlackConfig) -> SlackResult<Self> {
        let secret = config.signing_secret().ok_or_else(|| {
            ConfigurationError::InvalidConfiguration {
                message: "no signing secret configured".to_string(),
            }
        })?;
        Ok(Self::new(secret.expose_secret().clone()))
    }

    /// Set custom timestamp tolerance
    pub fn with_timestamp_tolerance(mut self, tolerance: Duration) -> Self {
        self.timestamp_tolerance = tolerance;
        self
    }

    /// Verify a request against the current time
    ///
    /// # Arguments
    /// * `timestamp` - The `X-Slack-Request-Timestamp` header value
    /// * `signature` - The `X-Slack-Signature` header value
    /// * `body` - The raw request body
    pub fn verify(&self, timestamp: &str, signature: &str, body: &[u8]) -> SlackResult<()> {
        self.verify_at(timestamp, signature, body, chrono::Utc::now().timestamp())
    }

    /// Verify a request as of `now` (Unix seconds)
    pub fn verify_at(
        &self,
        timestamp: &str,
        signature: &str,
        body: &[u8],
        now: i64,
    ) -> SlackResult<()> {
        let ts: i64 = timestamp.parse().map_err(|_| {
            warn!(timestamp, "Invalid timestamp format");
            WebhookError::InvalidPayload {
                message: "Invalid timestamp format".to_string(),
            }
        })?;

        let age = (now - ts).abs();
        if age > self.timestamp_tolerance.as_secs() as i64 {
            warn!(
                timestamp = ts,
                now,
                age,
                tolerance = self.timestamp_tolerance.as_secs(),
                "Timestamp outside tolerance"
            );
            return Err(WebhookError::ExpiredTimestamp { timestamp: ts }.into());
        }

        let expected = self.compute_signature(timestamp, body)?;
        if !constant_time_eq(signature.as_bytes(), expected.as_bytes()) {
            warn!("Signature verification failed");
            return Err(WebhookError::InvalidSignature.into());
        }

        debug!("Request signature verified");
        Ok(())
    }

    /// Compute the `v0=<hex>` signature of `body` sent at `timestamp`
    pub fn compute_signature(&self, timestamp: &str, body: &[u8]) -> SlackResult<String> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.signing_secret.expose_secret().as_bytes())
            .map_err(|e| WebhookError::InvalidPayload {
                message: e.to_string(),
            })?;
        mac.update(b"v0:");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);

        Ok(format!("v0={}", hex::encode(mac.finalize().into_bytes())))
    }
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("signing_secret", &Redacted::new(&self.signing_secret))
            .field("timestamp_tolerance", &self.timestamp_tolerance)
            .finish()
    }
}
