// ABOUTME: QueryString mapping of URL query parameters returned in the `querystring` key.
// ABOUTME: Valueless parameters are represented as QueryValue::Flag(true).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

/// Value of a single query-string parameter.
///
/// Decoding never fails on the value's JSON type: numbers and objects are
/// kept as their JSON text, `null` reads as a flag, and an array (a repeated
/// parameter) keeps its last element, as [`QueryString::from_url`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// A parameter that appeared without `=value`.
    Flag(bool),
    Text(String),
}

impl QueryValue {
    fn from_json(value: Value) -> Self {
        match value {
            Value::Bool(b) => QueryValue::Flag(b),
            Value::String(s) => QueryValue::Text(s),
            Value::Null => QueryValue::Flag(true),
            Value::Array(items) => items
                .into_iter()
                .last()
                .map(QueryValue::from_json)
                .unwrap_or(QueryValue::Flag(true)),
            other => QueryValue::Text(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for QueryValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(QueryValue::from_json)
    }
}

impl QueryValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Text(s) => Some(s),
            QueryValue::Flag(_) => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, QueryValue::Flag(_))
    }
}

/// Key/value pairs of a URL's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryString {
    params: BTreeMap<String, QueryValue>,
}

impl QueryString {
    /// Build the mapping from a URL the same way the remote service does.
    ///
    /// `?a=1&b` yields `a => Text("1")` and `b => Flag(true)`. A later repeat
    /// of a key replaces the earlier value.
    pub fn from_url(url: &Url) -> Self {
        let mut params = BTreeMap::new();
        let Some(query) = url.query() else {
            return Self { params };
        };
        for piece in query.split('&').filter(|p| !p.is_empty()) {
            let has_value = piece.contains('=');
            let Some((key, value)) = url::form_urlencoded::parse(piece.as_bytes()).next() else {
                continue;
            };
            let value = if has_value {
                QueryValue::Text(value.into_owned())
            } else {
                QueryValue::Flag(true)
            };
            params.insert(key.into_owned(), value);
        }
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// Iterate over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
