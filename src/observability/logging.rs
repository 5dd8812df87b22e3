//! Logging utilities with sensitive data redaction.

use std::fmt;

/// Wrapper for sensitive data that redacts on display
#[derive(Clone)]
pub struct Redacted<T>(T);

impl<T> Redacted<T> {
    /// Create a new redacted value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Get the inner value (use sparingly)
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Redact token from a string, preserving the prefix for debugging
pub fn redact_token(token: &str) -> String {
    match token.char_indices().nth(5) {
        Some((idx, _)) if token.len() > 8 => format!("{}...[REDACTED]", &token[..idx]),
        _ => "[REDACTED]".to_string(),
    }
}

/// Argument names whose values must never be logged
const SENSITIVE_ARGS: [&str; 5] = ["token", "client_secret", "code", "password", "secret"];

/// Whether an argument should be masked before logging
pub fn is_sensitive_arg(name: &str) -> bool {
    SENSITIVE_ARGS.iter().any(|s| name.eq_ignore_ascii_case(s))
}

/// Render `name=value` pairs for a debug log line, masking sensitive values
pub fn redact_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| {
            if is_sensitive_arg(name) {
                format!("{}=[REDACTED]", name)
            } else {
                format!("{}={}", name, value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_display() {
        let secret = Redacted::new("my-secret-token");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(secret.expose(), &"my-secret-token");
    }

    #[test]
    fn test_redact_token() {
        assert_eq!(redact_token("xoxb-123456789"), "xoxb-...[REDACTED]");
        assert_eq!(redact_token("short"), "[REDACTED]");
    }

    #[test]
    fn test_redact_pairs() {
        let pairs = vec![
            ("channel".to_string(), "C123".to_string()),
            ("token".to_string(), "xoxb-abc".to_string()),
        ];
        assert_eq!(redact_pairs(&pairs), "channel=C123&token=[REDACTED]");
    }
}
