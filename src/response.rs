//! Decoded reply of a single invocation.

use serde_json::Value;

/// Payload and status code of one HTTP reply.
///
/// Immutable once built; fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    payload: Value,
    status: u16,
}

impl Response {
    #[must_use]
    pub fn new(payload: Value, status: u16) -> Self {
        Self { payload, status }
    }

    /// Decoded JSON body of the reply.
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// HTTP status code of the reply.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }
}
