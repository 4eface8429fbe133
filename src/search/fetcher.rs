//! HTTP fetcher for the subtitle search page.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::SearchConfig;

/// Errors that can occur while fetching a search page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid search URL for query {query:?}: {source}")]
    Url {
        query: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),
}

/// Raw search page as returned by the site.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status of the response.
    pub status: StatusCode,

    /// Response body.
    pub body: String,
}

/// Issues search requests against the subtitle site.
///
/// Holds a single [`reqwest::Client`] configured with the fixed browser
/// user agent and the request timeout; one fetcher is shared across all
/// inbound queries.
#[derive(Debug, Clone)]
pub struct SubtitleFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl SubtitleFetcher {
    /// Creates a fetcher from the search configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds the search URL for a query.
    ///
    /// The query is interpolated into the fixed search path; URL
    /// construction percent-encodes what the path cannot carry verbatim.
    /// An empty query still yields a valid `moviename-` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpolated string is not a valid URL.
    pub fn search_url(&self, query: &str) -> Result<Url, FetchError> {
        let raw = format!(
            "{}/en/search/sublanguageid-all/moviename-{query}",
            self.base_url.as_str().trim_end_matches('/')
        );

        Url::parse(&raw).map_err(|source| FetchError::Url {
            query: query.to_owned(),
            source,
        })
    }

    /// Fetches the search results page for a query.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built, the request fails at
    /// the transport level (DNS, connection, timeout), or the site
    /// answers with a non-200 status.
    pub async fn fetch(&self, query: &str) -> Result<FetchedPage, FetchError> {
        let url = self.search_url(query)?;
        debug!("Fetching search page: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> SubtitleFetcher {
        SubtitleFetcher::new(&SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_search_url_interpolates_query() {
        let url = fetcher().search_url("Idiocracy").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.opensubtitles.org/en/search/sublanguageid-all/moviename-Idiocracy"
        );
    }

    #[test]
    fn test_search_url_percent_encodes_spaces() {
        let url = fetcher().search_url("the matrix").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.opensubtitles.org/en/search/sublanguageid-all/moviename-the%20matrix"
        );
    }

    #[test]
    fn test_search_url_empty_query() {
        let url = fetcher().search_url("").unwrap();
        assert!(url.as_str().ends_with("/moviename-"));
    }

    #[test]
    fn test_search_url_honors_configured_base() {
        let config = SearchConfig {
            base_url: Url::parse("http://localhost:8080").unwrap(),
            ..SearchConfig::default()
        };
        let fetcher = SubtitleFetcher::new(&config).unwrap();
        let url = fetcher.search_url("x").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/en/search/sublanguageid-all/moviename-x"
        );
    }
}
