//! `reqwest`-backed transport.

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{HttpRequest, HttpResponse, Transport};
use crate::Result;

/// Real HTTPS transport using a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder().gzip(true).build()?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers)
            .timeout(request.timeout);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, len = body.len(), "response received");

        Ok(HttpResponse { status, body })
    }
}
