//! HTTP-based page fetcher using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Proxy};
use tracing::debug;

use crate::fetcher::{PageFetcher, PageResponse};
use crate::Result;

/// A page fetcher that uses plain HTTP requests via reqwest.
///
/// No request timeout is set unless one is configured through the builder,
/// so a stalled server blocks the caller indefinitely.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new `HttpFetcher` with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Returns a builder for configuring timeout and proxy.
    pub fn builder() -> HttpFetcherBuilder {
        HttpFetcherBuilder::default()
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Builder for [`HttpFetcher`].
#[derive(Debug, Clone, Default)]
pub struct HttpFetcherBuilder {
    timeout: Option<Duration>,
    proxy: Option<String>,
}

impl HttpFetcherBuilder {
    /// Sets a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Routes all requests through a proxy (http, https or socks5 URL).
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Builds the fetcher.
    pub fn build(self) -> Result<HttpFetcher> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(Proxy::all(proxy)?);
        }
        Ok(HttpFetcher {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<PageResponse> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;
        let status = response.status().as_u16();
        debug!("GET {} -> {}", url, status);
        let body = response.text().await?;
        Ok(PageResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_new() {
        assert!(HttpFetcher::new().is_ok());
    }

    #[test]
    fn test_http_fetcher_with_timeout() {
        let fetcher = HttpFetcher::builder()
            .timeout(Duration::from_secs(30))
            .build();
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_http_fetcher_with_proxy() {
        let fetcher = HttpFetcher::builder()
            .proxy("socks5://127.0.0.1:1080")
            .build();
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_http_fetcher_invalid_proxy() {
        let fetcher = HttpFetcher::builder().proxy("not a proxy url").build();
        assert!(fetcher.is_err());
    }

    #[test]
    fn test_http_fetcher_with_client() {
        let client = Client::builder().build().unwrap();
        let _fetcher = HttpFetcher::with_client(client);
    }
}
