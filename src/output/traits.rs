//! Output sink trait and types
//!
//! This module defines the interface between the crawl engine and whatever
//! presents its results. The engine only produces [`PageResult`] values and
//! one [`CrawlSummary`]; formatting and I/O live behind [`OutputSink`].

use crate::crawler::PageResult;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Terminal record of a crawl run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Wall-clock time of the whole run
    pub elapsed: Duration,

    /// Pages fetched successfully
    pub pages_ok: usize,

    /// Pages whose fetch failed
    pub pages_failed: usize,
}

impl CrawlSummary {
    /// Returns the number of pages that produced a result
    pub fn total_pages(&self) -> usize {
        self.pages_ok + self.pages_failed
    }
}

/// Receives crawl results as they arrive
///
/// A sink is driven by a single collector, one record at a time, so it needs
/// no internal synchronization.
pub trait OutputSink {
    /// Records one page result
    ///
    /// # Arguments
    ///
    /// * `page` - A successful or failed fetch
    fn record_page(&mut self, page: &PageResult) -> OutputResult<()>;

    /// Records the summary once the result stream has closed
    ///
    /// # Arguments
    ///
    /// * `summary` - Totals and wall-clock time for the run
    fn record_summary(&mut self, summary: &CrawlSummary) -> OutputResult<()>;
}
