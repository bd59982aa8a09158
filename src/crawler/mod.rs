//! Crawler module for concurrent, depth-bounded crawling
//!
//! This module contains the core crawling logic, including:
//! - The frontier of claimed URLs and the page budget
//! - The recursive crawl task and its same-domain expansion
//! - Completion tracking for the task tree
//! - Result collection from the fan-in channel
//! - HTTP fetching and HTML parsing behind the `PageFetcher` contract

mod collector;
mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod result;
mod task;
mod tracker;

pub use collector::collect_results;
pub use coordinator::{CrawlParams, CrawlRun, Crawler};
pub use fetcher::{build_http_client, FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use frontier::Frontier;
pub use parser::parse_page;
pub use result::PageResult;
pub use tracker::{CompletionTracker, TaskGuard};

use crate::config::{validate, Config};
use crate::output::{CrawlSummary, OutputSink};

/// Runs a complete crawl with the default HTTP fetcher
///
/// This is the main entry point for a configured crawl. It will:
/// 1. Validate the configuration and build the HTTP client
/// 2. Spawn one task per seed URL
/// 3. Stream every result into `sink`
/// 4. Record and return the summary
///
/// # Arguments
///
/// * `config` - The merged configuration
/// * `sink` - Where results are written
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed
/// * `Err(SweepError)` - The configuration is invalid or the HTTP client
///   could not be built
pub async fn crawl<S>(config: &Config, sink: &mut S) -> crate::Result<CrawlSummary>
where
    S: OutputSink + ?Sized,
{
    validate(config)?;
    let fetcher = HttpFetcher::new(&config.http)?;
    let crawler = Crawler::new(CrawlParams::from(&config.crawler), fetcher);
    Ok(crawler.run(&config.seeds, sink).await)
}
