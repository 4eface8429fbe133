//! Subtitle search core.
//!
//! Combines the [`SubtitleFetcher`] and the page parser into a single
//! query-to-results operation. Upstream failures collapse into an empty
//! result by design; the concrete cause is only visible in the logs.

mod fetcher;
mod parser;

pub use fetcher::{FetchError, FetchedPage, SubtitleFetcher};
pub use parser::{SubtitleEntry, parse_search_page};

use tracing::{debug, warn};
use url::Url;

use crate::config::SearchConfig;

/// Ordered list of discovered subtitle entries, possibly empty.
pub type SearchResult = Vec<SubtitleEntry>;

/// High-level subtitle search service.
///
/// Stateless across queries: every call runs one fetch and one parse
/// against fresh data. Shared immutably between handler invocations.
#[derive(Debug, Clone)]
pub struct SubtitleSearch {
    fetcher: SubtitleFetcher,
    base_url: Url,
}

impl SubtitleSearch {
    /// Creates the search service from the search configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: SubtitleFetcher::new(config)?,
            base_url: config.base_url.clone(),
        })
    }

    /// Searches for subtitles matching a free-text query.
    ///
    /// A non-200 status or a transport failure yields an empty result,
    /// indistinguishable to the caller from a genuine zero-match page;
    /// the distinction is logged here.
    pub async fn search(&self, query: &str) -> SearchResult {
        let fetched = self.fetcher.fetch(query).await;
        let entries = collect_entries(fetched, &self.base_url, query);
        debug!("Query {:?} produced {} entries", query, entries.len());
        entries
    }
}

/// Turns a fetch outcome into a search result.
///
/// Fetch failures are logged and mapped to the empty result.
fn collect_entries(
    fetched: Result<FetchedPage, FetchError>,
    base: &Url,
    query: &str,
) -> SearchResult {
    match fetched {
        Ok(page) => parse_search_page(&page.body, base),
        Err(e) => {
            warn!("Subtitle search failed for {:?}: {}", query, e);
            Vec::new()
        }
    }
}
