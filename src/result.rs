//! Article record types.

use serde::{Deserialize, Serialize};

/// Output text for a fetched page without a `<title>`.
pub const TITLE_NOT_FOUND: &str = "Title not found";

/// Output text for a fetched page without a description meta tag.
pub const ABSTRACT_NOT_FOUND: &str = "Abstract not found";

/// Fields extracted from a successfully fetched article page.
///
/// `None` means the page was fetched but carried no such field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetails {
    /// Page title.
    pub title: Option<String>,
    /// Content of the `description` meta tag.
    pub description: Option<String>,
}

impl ArticleDetails {
    /// Creates details from optional title and description.
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self { title, description }
    }
}

/// One discovered article link and what was learned about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Article URL as found on the results page.
    pub url: String,
    /// Extracted details, or `None` if the detail fetch failed.
    pub details: Option<ArticleDetails>,
}

impl ArticleRecord {
    /// Creates a record.
    pub fn new(url: impl Into<String>, details: Option<ArticleDetails>) -> Self {
        Self {
            url: url.into(),
            details,
        }
    }

    /// Returns the page title, if the page was fetched and had one.
    pub fn title(&self) -> Option<&str> {
        self.details.as_ref()?.title.as_deref()
    }

    /// Returns the page description, if the page was fetched and had one.
    pub fn description(&self) -> Option<&str> {
        self.details.as_ref()?.description.as_deref()
    }

    /// Title column text: empty when the fetch failed, a placeholder when
    /// the page had no title.
    pub fn title_cell(&self) -> &str {
        match &self.details {
            None => "",
            Some(details) => details.title.as_deref().unwrap_or(TITLE_NOT_FOUND),
        }
    }

    /// Abstract column text, following the same rules as [`Self::title_cell`].
    pub fn abstract_cell(&self) -> &str {
        match &self.details {
            None => "",
            Some(details) => details
                .description
                .as_deref()
                .unwrap_or(ABSTRACT_NOT_FOUND),
        }
    }
}
