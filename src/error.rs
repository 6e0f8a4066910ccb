//! Error taxonomy for request invocation and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Maximum number of characters of a reply body kept in decode errors.
pub const BODY_SNIPPET_LEN: usize = 500;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response with status {status} is not valid JSON: {source} | body snippet: {snippet}")]
    Decode {
        status: u16,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid endpoint '{input}': {source}")]
    InvalidEndpoint {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid query parameter '{0}', expected KEY=VALUE")]
    InvalidParam(String),
    #[error("invalid request body: {message}")]
    InvalidBody { message: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(#[source] Box<ortho_config::OrthoError>),
    #[error("configuration file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },
}

impl From<ortho_config::OrthoError> for ProbeError {
    fn from(err: ortho_config::OrthoError) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Trim `text` to `max` characters, appending `...` when truncated.
///
/// Returns an empty string when `max` is zero.
pub(crate) fn snippet(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out = text.chars().take(max).collect::<String>();
        out.push_str("...");
        out
    }
}
