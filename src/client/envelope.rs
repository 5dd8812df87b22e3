//! Response envelope decoding.
//!
//! Every Web API response is wrapped as `{"ok": true, ...payload}` or
//! `{"ok": false, "error": "...", ...}`. [`decode`] turns the wrapper into
//! either the endpoint's payload struct or an [`ApiError`].

use crate::errors::{ApiError, ResponseError, SlackError, SlackResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure half of the envelope
#[derive(Debug, Deserialize)]
struct Rejection {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    warning: Option<String>,
    #[serde(default)]
    response_metadata: Option<RejectionMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct RejectionMetadata {
    #[serde(default)]
    messages: Vec<String>,
}

/// Empty payload for endpoints whose success carries nothing worth returning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {}

/// Decode the envelope returned by `method` into its payload type
pub fn decode<T: DeserializeOwned>(method: &str, body: Value) -> SlackResult<T> {
    match body.get("ok").and_then(Value::as_bool) {
        Some(true) => serde_json::from_value(body).map_err(|e| {
            SlackError::Response(ResponseError::Deserialization {
                method: method.to_string(),
                message: e.to_string(),
            })
        }),
        Some(false) => Err(SlackError::Api(reject(body))),
        None => Err(SlackError::Response(ResponseError::MissingOkField {
            method: method.to_string(),
        })),
    }
}

fn reject(body: Value) -> ApiError {
    let rejection: Rejection = serde_json::from_value(body).unwrap_or(Rejection {
        error: None,
        warning: None,
        response_metadata: None,
    });

    ApiError {
        code: rejection.error.unwrap_or_else(|| "unknown_error".to_string()),
        warning: rejection.warning,
        messages: rejection
            .response_metadata
            .map(|m| m.messages)
            .unwrap_or_default(),
    }
}
