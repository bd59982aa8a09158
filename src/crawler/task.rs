//! The recursive unit of crawl work
//!
//! A task is given a URL, its depth, and the domain of the seed it descends
//! from. It claims the URL, fetches it, emits one [`PageResult`], and then
//! spawns a child task for every link that stays on the same domain.
//!
//! Tasks never report errors to their parent. A fetch failure becomes data in
//! the emitted result; depth cutoff and claim rejection end the task silently.

use crate::crawler::coordinator::CrawlParams;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::frontier::Frontier;
use crate::crawler::result::PageResult;
use crate::crawler::tracker::CompletionTracker;
use crate::url::follow_target;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// One unit of work, moved into the task that runs it
#[derive(Debug, Clone)]
pub(crate) struct TaskDescriptor {
    pub url: String,
    pub depth: u32,
    pub domain: Arc<str>,
}

impl TaskDescriptor {
    /// Descriptor for a seed URL: depth 0, domain taken from the seed itself
    pub fn seed(url: &str) -> Self {
        Self {
            url: url.to_string(),
            depth: 0,
            domain: Arc::from(crate::url::extract_domain(url)),
        }
    }

    fn child(&self, url: String) -> Self {
        Self {
            url,
            depth: self.depth + 1,
            domain: Arc::clone(&self.domain),
        }
    }
}

/// State shared by every task of one run
pub(crate) struct CrawlContext<F> {
    pub params: CrawlParams,
    pub frontier: Arc<Frontier>,
    pub tracker: CompletionTracker,
    pub fetcher: Arc<F>,
    pub results: mpsc::Sender<PageResult>,
}

impl<F: PageFetcher> CrawlContext<F> {
    /// Registers a task with the completion tracker, then spawns it
    ///
    /// Registration happens here, on the spawning side, so the tracker can
    /// never observe zero while a child is queued but not yet running.
    pub fn spawn(self: &Arc<Self>, task: TaskDescriptor) {
        let guard = self.tracker.track();
        let ctx = Arc::clone(self);

        // Boxed to break the recursive future type
        let run: Pin<Box<dyn Future<Output = ()> + Send>> = Box::pin(async move {
            ctx.run(task).await;
            // The result sender inside ctx must be gone before the tracker can
            // report the run finished.
            drop(ctx);
            drop(guard);
        });

        tokio::spawn(run);
    }

    async fn run(self: &Arc<Self>, task: TaskDescriptor) {
        if task.depth > self.params.max_depth {
            tracing::trace!("Depth {} exceeds limit, skipping {}", task.depth, task.url);
            return;
        }

        if !self.frontier.try_claim(&task.url) {
            tracing::debug!("Skipping {} (already claimed or page budget spent)", task.url);
            return;
        }

        tracing::debug!("Fetching {} at depth {}", task.url, task.depth);

        let started = Instant::now();
        let outcome = self.fetcher.fetch(&task.url).await;
        let duration = started.elapsed();

        let (result, links) = match outcome {
            Ok(page) => {
                let links = page.links.clone();
                let result = PageResult::success(task.url.clone(), task.depth, page, duration);
                (result, links)
            }
            Err(e) => {
                tracing::debug!("Fetch of {} failed: {}", task.url, e);
                let result = PageResult::failure(task.url.clone(), task.depth, &e, duration);
                (result, Vec::new())
            }
        };

        // Waits here while the collector is busy
        if self.results.send(result).await.is_err() {
            tracing::debug!("Result collector is gone, not expanding {}", task.url);
            return;
        }

        for link in &links {
            if let Some(target) = follow_target(link, &self.params.link_scheme, &task.domain) {
                tracing::trace!("Following {} from {}", target, task.url);
                self.spawn(task.child(target));
            }
        }
    }
}
