//! Search query representation.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

/// Default results endpoint.
pub const DEFAULT_BASE_URL: &str = "https://scholar.google.com/scholar";

/// Default interface locale (`hl`).
pub const DEFAULT_LANGUAGE: &str = "tr";

/// Default result filter (`as_sdt`).
pub const DEFAULT_FILTER: &str = "0,5";

/// A scholarly search query with its request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarQuery {
    /// The search terms.
    pub query: String,
    /// Interface locale, sent as `hl`.
    pub language: String,
    /// Result filter flag, sent as `as_sdt`.
    pub filter: String,
    /// Results endpoint.
    pub base_url: String,
}

impl ScholarQuery {
    /// Creates a new query with the default endpoint, locale and filter.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            filter: DEFAULT_FILTER.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets the interface locale.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result filter flag.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Sets the results endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the URL of the results page starting at offset `start`.
    pub fn page_url(&self, start: usize) -> Result<String> {
        let start = start.to_string();
        let url = Url::parse_with_params(
            &self.base_url,
            [
                ("start", start.as_str()),
                ("q", self.query.as_str()),
                ("hl", self.language.as_str()),
                ("as_sdt", self.filter.as_str()),
            ],
        )?;
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScrapeError;

    #[test]
    fn test_scholar_query_new() {
        let query = ScholarQuery::new("test query");
        assert_eq!(query.query, "test query");
        assert_eq!(query.language, "tr");
        assert_eq!(query.filter, "0,5");
        assert_eq!(query.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_scholar_query_builder_chain() {
        let query = ScholarQuery::new("rust")
            .with_language("en")
            .with_filter("0,33")
            .with_base_url("http://localhost:8080/scholar");
        assert_eq!(query.language, "en");
        assert_eq!(query.filter, "0,33");
        assert_eq!(query.base_url, "http://localhost:8080/scholar");
    }

    #[test]
    fn test_page_url_parameters() {
        let url = ScholarQuery::new("test").page_url(20).unwrap();
        assert_eq!(
            url,
            "https://scholar.google.com/scholar?start=20&q=test&hl=tr&as_sdt=0%2C5"
        );
    }

    #[test]
    fn test_page_url_encodes_query() {
        let url = ScholarQuery::new("(youth OR teen*) -site:books.google.com")
            .page_url(0)
            .unwrap();
        let parsed = Url::parse(&url).unwrap();
        let q = parsed
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("(youth OR teen*) -site:books.google.com"));
    }

    #[test]
    fn test_page_url_invalid_base() {
        let result = ScholarQuery::new("test").with_base_url("::not a url").page_url(0);
        assert!(matches!(result, Err(ScrapeError::UrlParse(_))));
    }

    #[test]
    fn test_scholar_query_serialization() {
        let query = ScholarQuery::new("test");
        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains("\"query\":\"test\""));
        let back: ScholarQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }
}
