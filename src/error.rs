//! Error types for the scraper library.

use thiserror::Error;

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while scraping.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Every attempt to fetch a results page failed.
    #[error("Failed to fetch results after {attempts} attempts")]
    FetchExhausted {
        /// Number of attempts made.
        attempts: u32,
    },

    /// Invalid query or pagination parameters.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Output file error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let err = ScrapeError::Parse("bad selector".to_string());
        assert_eq!(err.to_string(), "Failed to parse response: bad selector");
    }

    #[test]
    fn test_error_display_fetch_exhausted() {
        let err = ScrapeError::FetchExhausted { attempts: 5 };
        assert_eq!(err.to_string(), "Failed to fetch results after 5 attempts");
    }

    #[test]
    fn test_error_display_invalid_query() {
        let err = ScrapeError::InvalidQuery("step must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid query: step must be positive");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ScrapeError = io.into();
        assert!(matches!(err, ScrapeError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_error_from_url_parse() {
        let err: ScrapeError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ScrapeError::UrlParse(_)));
    }

    #[test]
    fn test_error_display_other() {
        let err = ScrapeError::Other("something went wrong".to_string());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
