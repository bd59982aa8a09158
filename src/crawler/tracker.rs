//! Completion tracking for a dynamically growing task tree
//!
//! Every crawl task holds a [`TaskGuard`] for its whole lifetime. Guards are
//! handed out by the spawner *before* the task is spawned, and a guard can only
//! be created by someone who already holds one (or by the run itself for the
//! seeds), so once the live count reaches zero no new task can appear.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct TrackerInner {
    live: AtomicUsize,
    idle: Notify,
}

/// Counts in-flight crawl tasks and lets the run wait for all of them
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    inner: Arc<TrackerInner>,
}

/// Registration of one in-flight task; deregisters on drop
///
/// Dropping covers every exit path of a task: normal completion, early
/// return, and unwinding from a panic.
#[derive(Debug)]
#[must_use = "a task is only tracked while its guard is alive"]
pub struct TaskGuard {
    inner: Arc<TrackerInner>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new in-flight task
    pub fn track(&self) -> TaskGuard {
        self.inner.live.fetch_add(1, Ordering::AcqRel);
        TaskGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of tasks currently registered
    pub fn in_flight(&self) -> usize {
        self.inner.live.load(Ordering::Acquire)
    }

    /// Waits until every registered task has finished
    ///
    /// Resolves immediately if nothing is in flight.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.idle.notified();
            tokio::pin!(notified);
            // Register interest before reading the count, so a guard dropped
            // in between still wakes us.
            notified.as_mut().enable();

            if self.in_flight() == 0 {
                return;
            }

            notified.await;
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if self.inner.live.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}
