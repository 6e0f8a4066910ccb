//! Outbound GET invocation.
//!
//! [`RequestInvoker`] sends exactly one request per call: the query
//! parameters go into the URL and the body is JSON-encoded, even though the
//! method is GET. Replies are decoded as JSON whatever their status code.

use log::{debug, warn};

use crate::error::{BODY_SNIPPET_LEN, snippet};
use crate::request::{Endpoint, QueryParameters, RequestBody};
use crate::{ProbeError, Response};

/// Sends GET requests to a fixed endpoint.
///
/// No timeout or retry is configured, and idle connections are not kept, so
/// consecutive calls share no state.
#[derive(Debug)]
pub struct RequestInvoker {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl RequestInvoker {
    /// Create an invoker targeting `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the HTTP client cannot be built.
    pub fn new(endpoint: Endpoint) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self { client, endpoint })
    }

    /// Send one GET request carrying `query` and `body`.
    ///
    /// Non-success status codes are returned in the [`Response`] rather than
    /// treated as failures.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Network`] when the request cannot be sent or the
    /// reply cannot be read, and [`ProbeError::Decode`] when the reply body is
    /// not JSON.
    pub async fn invoke(
        &self,
        query: &QueryParameters,
        body: &RequestBody,
    ) -> Result<Response, ProbeError> {
        let network = |source: reqwest::Error| ProbeError::Network {
            endpoint: self.endpoint.to_string(),
            source,
        };

        debug!("GET {} with {} query parameter(s)", self.endpoint, query.len());
        let reply = self
            .client
            .get(self.endpoint.url().clone())
            .query(query)
            .json(body)
            .send()
            .await
            .map_err(network)?;
        let status = reply.status().as_u16();
        let text = reply.text().await.map_err(network)?;
        debug!("{} replied with status {status}", self.endpoint);
        decode_reply(&text, status)
    }
}

/// Build a fresh [`RequestInvoker`] for `endpoint` and send one request.
///
/// # Errors
///
/// See [`RequestInvoker::invoke`].
pub async fn invoke(
    endpoint: &Endpoint,
    query: &QueryParameters,
    body: &RequestBody,
) -> Result<Response, ProbeError> {
    RequestInvoker::new(endpoint.clone())?
        .invoke(query, body)
        .await
}

fn decode_reply(body: &str, status: u16) -> Result<Response, ProbeError> {
    serde_json::from_str(body)
        .map(|payload| Response::new(payload, status))
        .map_err(|source| {
            warn!("reply with status {status} is not JSON: {source}");
            ProbeError::Decode {
                status,
                snippet: snippet(body, BODY_SNIPPET_LEN),
                source,
            }
        })
}
