//! Crawler coordinator - run-level orchestration
//!
//! This module wires the pieces of one crawl run together:
//! - Spawning a task per seed URL
//! - Closing the result stream once the whole task tree has finished
//! - Draining the stream into an output sink

use crate::config::CrawlerConfig;
use crate::crawler::collector::collect_results;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::frontier::Frontier;
use crate::crawler::result::PageResult;
use crate::crawler::task::{CrawlContext, TaskDescriptor};
use crate::crawler::tracker::CompletionTracker;
use crate::output::{CrawlSummary, OutputSink};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Bounds and behavior fixed for the duration of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlParams {
    /// Deepest link distance from a seed that is still fetched
    pub max_depth: u32,

    /// Total pages fetched across all seeds
    pub max_pages: usize,

    /// Capacity of the result channel
    pub result_buffer: usize,

    /// Scheme used when resolving `/path` links
    pub link_scheme: String,
}

impl Default for CrawlParams {
    fn default() -> Self {
        CrawlParams::from(&CrawlerConfig::default())
    }
}

impl From<&CrawlerConfig> for CrawlParams {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_pages: config.max_pages,
            result_buffer: config.result_buffer,
            link_scheme: config.link_scheme.clone(),
        }
    }
}

/// Main crawler structure
///
/// A `Crawler` holds the bounds and the fetcher. Every call to [`stream`] or
/// [`run`] is an independent crawl run with its own empty frontier and its own
/// task tree, so runs never share claimed URLs or page budget.
///
/// [`stream`]: Crawler::stream
/// [`run`]: Crawler::run
pub struct Crawler<F> {
    params: CrawlParams,
    fetcher: Arc<F>,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `params` - The crawl bounds
    /// * `fetcher` - Fetches and parses individual pages
    pub fn new(params: CrawlParams, fetcher: F) -> Self {
        Self {
            params,
            fetcher: Arc::new(fetcher),
        }
    }

    /// Runs a complete crawl
    ///
    /// Every result is forwarded to `sink` as it arrives; once the last task
    /// has finished the summary is recorded and returned.
    pub async fn run<S>(&self, seeds: &[String], sink: &mut S) -> CrawlSummary
    where
        S: OutputSink + ?Sized,
    {
        self.stream(seeds).collect(sink).await
    }

    /// Starts a crawl run and returns its result stream
    ///
    /// The stream yields results in completion order and closes once every
    /// task of this run, including all transitively spawned ones, has
    /// finished. Tasks block on a full channel, so the stream must be drained.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn stream(&self, seeds: &[String]) -> CrawlRun {
        let started = Instant::now();
        tracing::info!(
            "Starting crawl of {} seed(s), max depth {}, max pages {}",
            seeds.len(),
            self.params.max_depth,
            self.params.max_pages
        );

        let (tx, rx) = mpsc::channel(self.params.result_buffer.max(1));
        let frontier = Arc::new(Frontier::new(self.params.max_pages));
        let tracker = CompletionTracker::new();

        let ctx = Arc::new(CrawlContext {
            params: self.params.clone(),
            frontier: Arc::clone(&frontier),
            tracker: tracker.clone(),
            fetcher: Arc::clone(&self.fetcher),
            results: tx,
        });

        for seed in seeds {
            ctx.spawn(TaskDescriptor::seed(seed));
        }

        // Wait, then close: dropping the last context drops the last sender
        let closer = tracker.clone();
        tokio::spawn(async move {
            closer.wait().await;
            tracing::debug!("All crawl tasks finished, closing result stream");
            drop(ctx);
        });

        CrawlRun {
            results: rx,
            frontier,
            tracker,
            started,
        }
    }
}

/// One crawl run in progress
///
/// Holds the receiving end of the run's result channel together with the
/// run's frontier, which stays readable after the stream has closed.
pub struct CrawlRun {
    results: mpsc::Receiver<PageResult>,
    frontier: Arc<Frontier>,
    tracker: CompletionTracker,
    started: Instant,
}

impl CrawlRun {
    /// Receives the next result, or `None` once the run has finished
    pub async fn recv(&mut self) -> Option<PageResult> {
        self.results.recv().await
    }

    /// Drains the remaining results into `sink` and records the summary
    pub async fn collect<S>(&mut self, sink: &mut S) -> CrawlSummary
    where
        S: OutputSink + ?Sized,
    {
        let summary = collect_results(&mut self.results, sink, self.started).await;

        tracing::info!(
            "Crawl completed: {} page(s) in {:?}",
            summary.total_pages(),
            summary.elapsed
        );

        summary
    }

    /// The frontier of this run
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Number of this run's crawl tasks still running
    pub fn in_flight(&self) -> usize {
        self.tracker.in_flight()
    }
}
