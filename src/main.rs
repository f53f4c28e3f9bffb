//! A3S Scholar CLI - scholarly search results scraper.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use a3s_scholar::{
    run_with, HttpFetcher, OutputFormat, RetryPolicy, RunConfig, ScholarQuery, DEFAULT_OUTPUT,
    DEFAULT_QUERY,
};

/// A3S Scholar - collect article titles and abstracts from scholarly search results
#[derive(Parser)]
#[command(name = "a3s-scholar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    query: String,

    /// Results offset bound; pages are fetched below this offset
    #[arg(short, long, default_value = "50")]
    max_results: usize,

    /// Results per page (offset increment)
    #[arg(short, long, default_value = "10")]
    step: usize,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    format: Format,

    /// Attempts per results page before giving up
    #[arg(short, long, default_value = "5")]
    retries: u32,

    /// Seconds to pause after each article request
    #[arg(long, default_value = "2")]
    pacing: u64,

    /// Interface locale sent with the query
    #[arg(short, long, default_value = "tr")]
    language: String,

    /// Request timeout in seconds (no timeout by default)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Proxy URL (e.g., http://127.0.0.1:8080 or socks5://127.0.0.1:1080)
    #[arg(short, long)]
    proxy: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut builder = HttpFetcher::builder();
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(proxy) = &cli.proxy {
        builder = builder.proxy(proxy);
        eprintln!("Using proxy: {}", proxy);
    }
    let fetcher = Arc::new(builder.build()?);

    let query = ScholarQuery::new(cli.query).with_language(cli.language);
    let mut config = RunConfig::new(query, cli.max_results, cli.step);
    config.output = cli.output;
    config.format = cli.format.into();
    config.retry = RetryPolicy::with_max_attempts(cli.retries);
    config.pacing = Duration::from_secs(cli.pacing);

    let count = run_with(&config, fetcher).await?;

    println!(
        "Total {} articles with details saved to {}.",
        count,
        config.output.display()
    );
    Ok(())
}
