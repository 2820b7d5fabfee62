//! HTTP transport abstraction.
//!
//! The client never talks to `reqwest` directly. Every request goes
//! through a [`Transport`], which lets the reauthentication logic be
//! tested against scripted responses instead of the real API.

mod http;
#[cfg(any(test, feature = "test-utils"))]
mod mock;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;

pub use http::HttpTransport;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockTransport;

/// A single outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including any query string
    pub url: String,
    /// Full header set; the transport adds nothing of its own
    pub headers: HeaderMap,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. An empty body decodes as `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Trait for HTTP transport abstraction.
///
/// Implementations perform exactly one round trip per call and must not
/// retry on their own; retry policy belongs to the client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return its status and body.
    ///
    /// Non-2xx statuses are returned as `Ok`; only failures to complete
    /// the exchange are errors.
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse>;
}
