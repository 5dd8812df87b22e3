//! Helpers for `type`-tagged Block Kit objects that keep unmodelled shapes.
//!
//! The derived internally tagged representation cannot carry the payload of
//! an unknown tag, so [`Block`](super::Block), [`BlockElement`](super::BlockElement)
//! and [`ContextElement`](super::ContextElement) decode through a raw
//! [`Value`] and dispatch on its `type` field here.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Read a raw object and return it with its `type` tag
pub(super) fn read<'de, D>(deserializer: D) -> Result<(Option<String>, Value), D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Err(D::Error::custom("expected a `type`-tagged object"));
    }
    let tag = value.get("type").and_then(Value::as_str).map(str::to_string);
    Ok((tag, value))
}

/// Serialize `inner` with `"type": tag` added to its fields
pub(super) fn write<T, S>(tag: &str, inner: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let mut map = match serde_json::to_value(inner).map_err(S::Error::custom)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert("type".to_string(), Value::String(tag.to_string()));
    map.serialize(serializer)
}
