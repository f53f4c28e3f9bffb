//! Results page fetching with retry and backoff.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::fetcher::PageFetcher;
use crate::{Result, ScrapeError, ScholarQuery};

/// Browser `User-Agent` sent with results page requests.
pub const RESULTS_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Retry policy for results page requests.
///
/// A rate-limited attempt waits `(attempt + 1) * rate_limit_step`, any other
/// failed status waits `error_delay`. Both draw on the same attempt budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts.
    pub max_attempts: u32,
    /// Linear backoff step for HTTP 429.
    pub rate_limit_step: Duration,
    /// Fixed wait after any other non-success status.
    pub error_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            rate_limit_step: Duration::from_secs(10),
            error_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Creates the default policy with a different attempt budget.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// Wait before the next attempt after a failed `attempt` (0-based) that
    /// returned `status`.
    pub fn delay_for(&self, attempt: u32, status: u16) -> Duration {
        if status == 429 {
            self.rate_limit_step * (attempt + 1)
        } else {
            self.error_delay
        }
    }
}

/// Fetches results pages, retrying on non-success statuses.
pub struct ResultsFetcher {
    fetcher: Arc<dyn PageFetcher>,
    policy: RetryPolicy,
}

impl ResultsFetcher {
    /// Creates a results fetcher with the default retry policy.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            policy: RetryPolicy::default(),
        }
    }

    /// Sets the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Fetches the results page starting at offset `start`.
    ///
    /// Transport errors are returned immediately; only HTTP statuses are
    /// retried.
    pub async fn fetch_page(&self, query: &ScholarQuery, start: usize) -> Result<String> {
        let url = query.page_url(start)?;

        for attempt in 0..self.policy.max_attempts {
            let response = self.fetcher.fetch(&url, RESULTS_USER_AGENT).await?;
            if response.is_ok() {
                debug!("Results page at offset {} fetched on attempt {}", start, attempt + 1);
                return Ok(response.body);
            }

            let delay = self.policy.delay_for(attempt, response.status);
            if response.is_rate_limited() {
                warn!("Too many requests. Retrying in {} seconds...", delay.as_secs());
            } else {
                warn!("Unexpected error: {}", response.status);
            }
            tokio::time::sleep(delay).await;
        }

        Err(ScrapeError::FetchExhausted {
            attempts: self.policy.max_attempts,
        })
    }
}
