//! Page fetcher abstraction for retrieving HTML content.

use async_trait::async_trait;

use crate::Result;

/// Status and body of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl PageResponse {
    /// Creates a new response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for HTTP 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Returns true for HTTP 429 Too Many Requests.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Trait for issuing a GET request and returning the status and body.
///
/// Non-success statuses are not errors here; callers decide how to react
/// to them. Errors are reserved for transport failures.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, sending `user_agent` as the `User-Agent` header.
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<PageResponse>;
}
