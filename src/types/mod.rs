//! Common types for the Slack API.
//!
//! Identifier newtypes shared across services and the bot layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod message;

pub use message::*;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Message timestamp (`ts`), the unique ID of a message within a channel
    Timestamp
);

string_id!(
    /// Conversation ID (channel, private channel, DM or MPIM)
    ChannelId
);

string_id!(
    /// User ID
    UserId
);

string_id!(
    /// Team / workspace ID
    TeamId
);

impl Timestamp {
    /// Parse the seconds part of the timestamp
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.0.split('.').next()?.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl ChannelId {
    /// Direct message conversation (starts with D)
    pub fn is_dm(&self) -> bool {
        self.0.starts_with('D')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_parsing() {
        let ts = Timestamp::new("1234567890.123456");
        assert_eq!(ts.as_str(), "1234567890.123456");
        assert_eq!(ts.to_datetime().unwrap().timestamp(), 1234567890);
        assert!(Timestamp::new("garbage").to_datetime().is_none());
    }

    #[test]
    fn test_ids_are_transparent() {
        let id: ChannelId = serde_json::from_str("\"D024BE91L\"").unwrap();
        assert!(id.is_dm());
        assert_eq!(serde_json::to_string(&UserId::new("U1")).unwrap(), "\"U1\"");
        assert_eq!(TeamId::from("T1").to_string(), "T1");
    }
}
