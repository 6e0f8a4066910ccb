//! Request inputs: the target endpoint, query parameters and JSON body.
//!
//! Each type validates on construction so the invoker only ever sees
//! well-formed input.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::ProbeError;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/";
/// Query parameter sent when none is configured.
pub const DEFAULT_QUERY: (&str, &str) = ("key-param", "value-param");
/// Key of the single field in the default request body.
pub const DEFAULT_BODY_KEY: &str = "data";
/// Value of the single field in the default request body.
pub const DEFAULT_BODY_VALUE: &str = "some data in JSON format";

/// A validated target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parse `input` as an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidEndpoint`] when `input` is not a valid URL.
    pub fn parse(input: &str) -> Result<Self, ProbeError> {
        Url::parse(input)
            .map(Self)
            .map_err(|source| ProbeError::InvalidEndpoint {
                input: input.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters appended to the request URL.
///
/// Keys are unique and serialise in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters(BTreeMap<String, String>);

impl QueryParameters {
    /// Create an empty set of parameters.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a pair, replacing any earlier value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Parse `KEY=VALUE` strings. The value may itself contain `=`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidParam`] when an entry lacks `=` or has an
    /// empty key.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ProbeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for pair in pairs {
            let raw = pair.as_ref();
            match raw.split_once('=') {
                Some((key, value)) if !key.is_empty() => params.insert(key, value),
                _ => return Err(ProbeError::InvalidParam(raw.to_string())),
            }
        }
        Ok(params)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for QueryParameters {
    fn default() -> Self {
        let mut params = Self::new();
        params.insert(DEFAULT_QUERY.0, DEFAULT_QUERY.1);
        params
    }
}

/// JSON object sent as the request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    /// Parse JSON text that must describe an object.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidBody`] when `text` is not JSON or is not
    /// an object.
    pub fn from_json(text: &str) -> Result<Self, ProbeError> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            Ok(other) => Err(ProbeError::InvalidBody {
                message: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
            Err(e) => Err(ProbeError::InvalidBody {
                message: e.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Default for RequestBody {
    fn default() -> Self {
        let mut fields = Map::new();
        fields.insert(
            DEFAULT_BODY_KEY.to_string(),
            Value::String(DEFAULT_BODY_VALUE.to_string()),
        );
        Self(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
