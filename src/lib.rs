//! # a3s-scholar
//!
//! Scrapes a scholarly search engine's results pages, follows each article
//! link to collect its title and description, and exports the records.
//!
//! The pipeline runs strictly in sequence:
//!
//! - Results pages are fetched with linear backoff on rate limiting
//! - Article links are extracted from each page
//! - Each article page is fetched once, with a fixed pause between requests
//! - Records are written as CSV (or JSON)
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use a3s_scholar::{HttpFetcher, ScholarQuery, Scraper};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let scraper = Scraper::new(Arc::new(HttpFetcher::new()?));
//!     let records = scraper.scrape(&ScholarQuery::new("refugee youth"), 20, 10).await?;
//!
//!     for record in &records {
//!         println!("{}: {}", record.title_cell(), record.url);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod query;
mod result;

pub mod details;
pub mod fetch;
pub mod fetcher;
pub mod fetcher_http;
pub mod parser;
pub mod scrape;
pub mod writer;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub use error::{Result, ScrapeError};
pub use fetch::RetryPolicy;
pub use fetcher::{PageFetcher, PageResponse};
pub use fetcher_http::HttpFetcher;
pub use query::ScholarQuery;
pub use result::{ArticleDetails, ArticleRecord, ABSTRACT_NOT_FOUND, TITLE_NOT_FOUND};
pub use scrape::Scraper;
pub use writer::OutputFormat;

/// Default search terms.
pub const DEFAULT_QUERY: &str = "(Refuge* OR Migrant* OR Immigrant* OR asylum OR asylee OR newcomer OR immigration) AND (youth* OR juvenile OR adolescen* OR child OR teen*) AND (delinquency* OR crim* OR offend* OR devian*) -site:books.google.com";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "scholar_results_with_details.csv";

/// Parameters for one complete scrape-and-save run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Query and request parameters.
    pub query: ScholarQuery,
    /// Results offset bound; pages start below this value.
    pub max_results: usize,
    /// Offset increment between results pages.
    pub step: usize,
    /// Output file path.
    pub output: PathBuf,
    /// Output file format.
    pub format: OutputFormat,
    /// Retry policy for results pages.
    pub retry: RetryPolicy,
    /// Pause after each detail request.
    pub pacing: Duration,
}

impl RunConfig {
    /// Creates a run configuration with default output, retry and pacing.
    pub fn new(query: ScholarQuery, max_results: usize, step: usize) -> Self {
        Self {
            query,
            max_results,
            step,
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Csv,
            retry: RetryPolicy::default(),
            pacing: scrape::DEFAULT_PACING,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(ScholarQuery::new(DEFAULT_QUERY), 50, 10)
    }
}

/// Scrapes with `fetcher` and writes the records to `config.output`.
///
/// Returns the number of records written. Nothing is written if a results
/// page cannot be fetched.
pub async fn run_with(config: &RunConfig, fetcher: Arc<dyn PageFetcher>) -> Result<usize> {
    let scraper = Scraper::new(fetcher)
        .with_retry_policy(config.retry.clone())
        .with_pacing(config.pacing);
    let records = scraper
        .scrape(&config.query, config.max_results, config.step)
        .await?;
    writer::write_records(&records, &config.output, config.format)?;
    Ok(records.len())
}

/// Scrapes over plain HTTP and writes the records to `config.output`.
pub async fn run(config: &RunConfig) -> Result<usize> {
    run_with(config, Arc::new(HttpFetcher::new()?)).await
}
