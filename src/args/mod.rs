//! Argument bags sent to API endpoints.
//!
//! Every endpoint turns its typed request into an [`Args`] bag before handing
//! it to the transport. Optional parameters that were never set do not appear
//! in the bag at all, so they are never sent as `null` or empty strings.

use crate::errors::{RequestError, SlackResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single argument value
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Plain string
    Text(String),
    /// Boolean flag
    Bool(bool),
    /// Integer (timestamps, limits)
    Integer(i64),
    /// List of IDs; comma-joined in form and query encodings
    List(Vec<String>),
    /// Nested object (views, dialogs, blocks); JSON text in form encodings
    Json(Value),
}

impl ArgValue {
    /// Render for `application/x-www-form-urlencoded` bodies and query strings
    pub fn to_form_value(&self) -> String {
        match self {
            ArgValue::Text(s) => s.clone(),
            ArgValue::Bool(b) => b.to_string(),
            ArgValue::Integer(i) => i.to_string(),
            ArgValue::List(items) => items.join(","),
            ArgValue::Json(v) => v.to_string(),
        }
    }

    /// Render for JSON bodies
    pub fn to_json_value(&self) -> Value {
        match self {
            ArgValue::Text(s) => Value::String(s.clone()),
            ArgValue::Bool(b) => Value::Bool(*b),
            ArgValue::Integer(i) => Value::from(*i),
            ArgValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            ArgValue::Json(v) => v.clone(),
        }
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Text(s)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Text(s.to_string())
    }
}

impl From<&String> for ArgValue {
    fn from(s: &String) -> Self {
        ArgValue::Text(s.clone())
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Integer(i)
    }
}

impl<T: ToString> From<Vec<T>> for ArgValue {
    fn from(items: Vec<T>) -> Self {
        ArgValue::List(items.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&Vec<T>> for ArgValue {
    fn from(items: &Vec<T>) -> Self {
        ArgValue::List(items.iter().map(ToString::to_string).collect())
    }
}

/// Insertion-ordered bag of named arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, ArgValue)>,
}

impl Args {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, replacing an earlier value in place
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` only when `value` is present
    pub fn with_opt<V: Into<ArgValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Set `name` to a serialized nested object
    pub fn with_json<T: Serialize + ?Sized>(
        self,
        name: impl Into<String>,
        value: &T,
    ) -> SlackResult<Self> {
        let name = name.into();
        let json = serde_json::to_value(value).map_err(|e| RequestError::InvalidArgument {
            name: name.clone(),
            message: e.to_string(),
        })?;
        Ok(self.with(name, ArgValue::Json(json)))
    }

    /// Set `name` to a serialized nested object only when present
    pub fn with_opt_json<T: Serialize>(
        self,
        name: impl Into<String>,
        value: Option<&T>,
    ) -> SlackResult<Self> {
        match value {
            Some(value) => self.with_json(name, value),
            None => Ok(self),
        }
    }

    /// Insert in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a value by name
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Whether `name` is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Argument names in insertion order
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Encode as form fields / query pairs
    pub fn to_form_fields(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.clone(), value.to_form_value()))
            .collect()
    }

    /// Encode as a JSON object body
    pub fn to_json_object(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json_value()))
            .collect();
        Value::Object(map)
    }
}

/// Conversion from a typed request into its wire arguments.
///
/// Implementations are the only place an endpoint's parameter names are spelled.
pub trait ToArgs {
    /// Build the argument bag
    fn to_args(&self) -> SlackResult<Args>;
}

impl ToArgs for Args {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(self.clone())
    }
}
