//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use super::{HttpRequest, HttpResponse, Transport};
use crate::{Error, Result};

/// Mock transport for testing
///
/// Replays queued responses in order and records every request it sees.
/// Once the queue is exhausted every request fails with
/// [`Error::Transport`].
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body.
    pub fn push_json(&self, status: u16, body: Value) -> &Self {
        self.push_response(HttpResponse::new(status, body.to_string()))
    }

    /// Queue a response with a raw body.
    pub fn push_body(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push_response(HttpResponse::new(status, body))
    }

    /// Queue a response.
    pub fn push_response(&self, response: HttpResponse) -> &Self {
        lock(&self.responses).push_back(Ok(response));
        self
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: Error) -> &Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Number of responses still queued.
    pub fn remaining(&self) -> usize {
        lock(&self.responses).len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        lock(&self.requests).push(request);
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no scripted response left".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::Method;
    use std::time::Duration;

    fn get(url: &str) -> HttpRequest {
        HttpRequest {
            method: Method::GET,
            url: url.to_string(),
            headers: HeaderMap::new(),
            body: None,
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let mock = MockTransport::new();
        mock.push_json(200, serde_json::json!({"n": 1}))
            .push_body(500, "boom");

        let first = mock.request(get("https://a.test/1")).await.unwrap();
        assert_eq!(first.status, 200);
        let second = mock.request(get("https://a.test/2")).await.unwrap();
        assert_eq!(second.body, "boom");

        assert_eq!(mock.request_count(), 2);
        assert_eq!(mock.last_request().unwrap().url, "https://a.test/2");
    }

    #[tokio::test]
    async fn test_mock_exhausted() {
        let mock = MockTransport::new();
        let result = mock.request(get("https://a.test")).await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
