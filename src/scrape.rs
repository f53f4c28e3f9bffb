//! Scrape orchestration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::details::DetailFetcher;
use crate::fetch::{ResultsFetcher, RetryPolicy};
use crate::fetcher::PageFetcher;
use crate::parser::parse_results;
use crate::{ArticleRecord, Result, ScholarQuery, ScrapeError};

/// Default pause after each article detail request.
pub const DEFAULT_PACING: Duration = Duration::from_secs(2);

/// Walks results pages and collects details for every article link.
pub struct Scraper {
    results: ResultsFetcher,
    details: DetailFetcher,
    pacing: Duration,
}

impl Scraper {
    /// Creates a scraper that sends every request through `fetcher`.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            results: ResultsFetcher::new(Arc::clone(&fetcher)),
            details: DetailFetcher::new(fetcher),
            pacing: DEFAULT_PACING,
        }
    }

    /// Sets the retry policy for results pages.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.results = self.results.with_policy(policy);
        self
    }

    /// Sets the pause after each detail request.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Scrapes results pages at offsets `0, step, 2 * step, ...` below
    /// `max_results`, fetching details for each article in page order.
    ///
    /// A results page that cannot be fetched aborts the whole run.
    pub async fn scrape(
        &self,
        query: &ScholarQuery,
        max_results: usize,
        step: usize,
    ) -> Result<Vec<ArticleRecord>> {
        if step == 0 {
            return Err(ScrapeError::InvalidQuery("Page step must be positive".into()));
        }
        if query.query.trim().is_empty() {
            return Err(ScrapeError::InvalidQuery("Query cannot be empty".into()));
        }

        let mut records = Vec::new();

        for start in (0..max_results).step_by(step) {
            info!("Fetching results {}-{}...", start + 1, start + step);
            let html = self.results.fetch_page(query, start).await?;
            let urls = parse_results(&html)?;
            debug!("Page at offset {} lists {} articles", start, urls.len());

            for url in urls {
                info!("Fetching details for: {}", url);
                let details = self.details.fetch(&url).await;
                records.push(ArticleRecord::new(url, details));
                tokio::time::sleep(self.pacing).await;
            }
        }

        Ok(records)
    }
}
