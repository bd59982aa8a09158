//! Result collector: the single consumer of the fan-in stream

use crate::crawler::result::PageResult;
use crate::output::{CrawlSummary, OutputSink};
use std::time::Instant;
use tokio::sync::mpsc;

/// Drains `results` into `sink` until the stream closes, then records the
/// run summary
///
/// Results are forwarded in arrival order. A failed write is logged and does
/// not stop collection; crawl tasks would otherwise block on a stream nobody
/// reads.
///
/// # Arguments
///
/// * `results` - The receiving end of the crawl's result channel
/// * `sink` - Where records are written
/// * `started` - Start of the run, for the summary's wall-clock time
pub async fn collect_results<S>(
    results: &mut mpsc::Receiver<PageResult>,
    sink: &mut S,
    started: Instant,
) -> CrawlSummary
where
    S: OutputSink + ?Sized,
{
    let mut summary = CrawlSummary::default();

    while let Some(result) = results.recv().await {
        if result.is_ok() {
            summary.pages_ok += 1;
        } else {
            summary.pages_failed += 1;
        }

        if let Err(e) = sink.record_page(&result) {
            tracing::warn!("Failed to record result for {}: {}", result.url, e);
        }
    }

    summary.elapsed = started.elapsed();

    if let Err(e) = sink.record_summary(&summary) {
        tracing::warn!("Failed to record crawl summary: {}", e);
    }

    summary
}
