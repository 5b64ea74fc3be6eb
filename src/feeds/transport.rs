//! HTTP retrieval behind a stubbable trait.

use crate::error::EdlError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("edl-scan/", env!("CARGO_PKG_VERSION"));

/// Fetches remote text resources.
///
/// The cache and the orchestrator only see this trait, so tests can swap
/// in transports that serve canned bodies or count calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a URL and return its body.
    ///
    /// Only HTTP 200 counts as success; any other status, or a failure
    /// below the HTTP layer, is an error and yields no content at all.
    async fn fetch_text(&self, url: &str) -> Result<String, EdlError>;
}

/// Production transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<HttpTransport, EdlError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| EdlError::Client { source })?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_text(&self, url: &str) -> Result<String, EdlError> {
        let response = self.client.get(url).send().await.map_err(|source| EdlError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(EdlError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| EdlError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}
