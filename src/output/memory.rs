use crate::crawler::PageResult;
use crate::output::traits::{CrawlSummary, OutputResult, OutputSink};

/// Sink that keeps every record in memory
///
/// Useful for library callers that post-process results, and for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Page results in arrival order
    pub pages: Vec<PageResult>,

    /// Set once the run has finished
    pub summary: Option<CrawlSummary>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the result for `url`, if one was recorded
    pub fn page(&self, url: &str) -> Option<&PageResult> {
        self.pages.iter().find(|p| p.url == url)
    }
}

impl OutputSink for MemorySink {
    fn record_page(&mut self, page: &PageResult) -> OutputResult<()> {
        self.pages.push(page.clone());
        Ok(())
    }

    fn record_summary(&mut self, summary: &CrawlSummary) -> OutputResult<()> {
        self.summary = Some(*summary);
        Ok(())
    }
}
