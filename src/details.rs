//! Article detail page fetching.

use std::sync::Arc;

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::fetcher::PageFetcher;
use crate::{ArticleDetails, Result, ScrapeError};

/// Generic `User-Agent` sent with article page requests.
pub const DETAIL_USER_AGENT: &str = "Mozilla/5.0";

/// Fetches article pages and extracts their title and description.
pub struct DetailFetcher {
    fetcher: Arc<dyn PageFetcher>,
}

impl DetailFetcher {
    /// Creates a detail fetcher.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches `url` once and extracts its details.
    ///
    /// Returns `None` on a non-success status or on any error; failures are
    /// logged and never propagated.
    pub async fn fetch(&self, url: &str) -> Option<ArticleDetails> {
        match self.try_fetch(url).await {
            Ok(details) => details,
            Err(e) => {
                warn!("Error fetching details from {}: {}", url, e);
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Option<ArticleDetails>> {
        let response = self.fetcher.fetch(url, DETAIL_USER_AGENT).await?;
        if !response.is_ok() {
            debug!("Details for {} unavailable: HTTP {}", url, response.status);
            return Ok(None);
        }
        parse_details(&response.body).map(Some)
    }
}

/// Extracts the `<title>` text and `description` meta content from a page.
pub fn parse_details(html: &str) -> Result<ArticleDetails> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title")
        .map_err(|e| ScrapeError::Parse(format!("Failed to parse selector: {:?}", e)))?;
    let meta_selector = Selector::parse(r#"meta[name="description"]"#)
        .map_err(|e| ScrapeError::Parse(format!("Failed to parse selector: {:?}", e)))?;

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let description = document
        .select(&meta_selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(ArticleDetails::new(title, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::PageResponse;
    use async_trait::async_trait;

    struct FakeFetcher(Result<PageResponse>);

    #[async_trait]
    impl PageFetcher for FakeFetcher {
        async fn fetch(&self, _url: &str, user_agent: &str) -> Result<PageResponse> {
            assert_eq!(user_agent, DETAIL_USER_AGENT);
            match &self.0 {
                Ok(response) => Ok(response.clone()),
                Err(e) => Err(ScrapeError::Other(e.to_string())),
            }
        }
    }

    fn detail_fetcher(response: Result<PageResponse>) -> DetailFetcher {
        DetailFetcher::new(Arc::new(FakeFetcher(response)))
    }

    #[test]
    fn test_parse_details_full_page() {
        let html = r#"<html><head>
            <title> Youth and Migration </title>
            <meta name="description" content="A study of outcomes.">
        </head><body></body></html>"#;
        let details = parse_details(html).unwrap();
        assert_eq!(details.title.as_deref(), Some("Youth and Migration"));
        assert_eq!(details.description.as_deref(), Some("A study of outcomes."));
    }

    #[test]
    fn test_parse_details_missing_fields() {
        let details = parse_details("<html><body><p>nothing</p></body></html>").unwrap();
        assert_eq!(details, ArticleDetails::default());
    }

    #[test]
    fn test_parse_details_empty_title_and_content() {
        let html = r#"<html><head><title>  </title><meta name="description" content=""></head></html>"#;
        let details = parse_details(html).unwrap();
        assert!(details.title.is_none());
        assert!(details.description.is_none());
    }

    #[test]
    fn test_parse_details_ignores_other_meta() {
        let html = r#"<html><head>
            <meta name="keywords" content="a, b">
            <meta property="og:description" content="social">
        </head></html>"#;
        assert!(parse_details(html).unwrap().description.is_none());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let html = r#"<html><head><title>Paper</title><meta name="description" content="Abstract"></head></html>"#;
        let details = detail_fetcher(Ok(PageResponse::new(200, html)))
            .fetch("https://example.com/paper")
            .await;
        assert_eq!(
            details,
            Some(ArticleDetails::new(
                Some("Paper".to_string()),
                Some("Abstract".to_string())
            ))
        );
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let details = detail_fetcher(Ok(PageResponse::new(404, "<title>Not Found</title>")))
            .fetch("https://example.com/missing")
            .await;
        assert!(details.is_none());
    }

    #[tokio::test]
    async fn test_fetch_error_is_swallowed() {
        let details = detail_fetcher(Err(ScrapeError::Parse("invalid body".to_string())))
            .fetch("https://example.com/broken")
            .await;
        assert!(details.is_none());
    }
}
