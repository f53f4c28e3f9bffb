//! Results page parsing.

use scraper::{Html, Selector};

use crate::{Result, ScrapeError};

/// Selector for one result block on a results page.
pub const RESULT_BLOCK_SELECTOR: &str = ".gs_r.gs_or.gs_scl";

/// Selector for the title link inside a result block.
pub const TITLE_LINK_SELECTOR: &str = ".gs_rt a";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Parse(format!("Failed to parse selector: {:?}", e)))
}

/// Extracts article URLs from a results page, in page order.
///
/// Blocks without a title link, or whose link has no `href`, are skipped.
/// Duplicates are kept.
pub fn parse_results(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let block_selector = selector(RESULT_BLOCK_SELECTOR)?;
    let link_selector = selector(TITLE_LINK_SELECTOR)?;

    let urls = document
        .select(&block_selector)
        .filter_map(|block| block.select(&link_selector).next())
        .filter_map(|link| link.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect();

    Ok(urls)
}
