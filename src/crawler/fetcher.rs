//! Page fetching
//!
//! The crawl engine only depends on the [`PageFetcher`] contract: one call per
//! URL, returning the page's title, description and raw links, or a failure.
//! [`HttpFetcher`] is the default implementation over `reqwest`.
//!
//! HTTP details (timeouts, redirects, headers) belong here, not in the engine.
//! A fetch that never returns would stall its branch of the crawl, so the
//! client is always built with a request timeout.

use crate::config::HttpConfig;
use crate::crawler::parser::parse_page;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// What a successful fetch yields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// Page title, empty when the page has none
    pub title: String,

    /// Meta description, empty when the page has none
    pub description: String,

    /// Distinct outbound links, as written in the page
    pub links: Vec<String>,
}

/// Errors that can occur while fetching a page
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_body() || e.is_decode() {
            FetchError::Body(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

/// Fetches one page and extracts its metadata
///
/// Implementations must be shareable across crawl tasks.
pub trait PageFetcher: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Default fetcher: one GET per page, HTML parsed with `scraper`
///
/// The HTTP status is not inspected. An error page still has a body, and that
/// body is parsed like any other.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await?;
        tracing::trace!("GET {} -> {}", url, response.status());

        let body = response.text().await?;
        Ok(parse_page(&body))
    }
}
