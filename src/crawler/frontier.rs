//! Frontier tracker: the set of URLs claimed in the current run
//!
//! Claiming is the only way into the frontier. The duplicate check, the page
//! budget check, and the insertion all happen in one critical section, so two
//! tasks racing on the same URL (or on the last unit of budget) can never both
//! proceed.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct FrontierState {
    claimed: HashSet<String>,
    count: usize,
}

/// Record of the URLs claimed in one crawl run, bounded by a page budget
#[derive(Debug)]
pub struct Frontier {
    state: Mutex<FrontierState>,
    max_pages: usize,
}

impl Frontier {
    /// Creates an empty frontier that admits at most `max_pages` claims
    pub fn new(max_pages: usize) -> Self {
        Self {
            state: Mutex::new(FrontierState::default()),
            max_pages,
        }
    }

    /// Attempts to reserve `url` for exactly one fetch
    ///
    /// # Returns
    ///
    /// * `true` - The caller owns the fetch of this URL
    /// * `false` - The URL was already claimed, or the page budget is spent
    pub fn try_claim(&self, url: &str) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if state.count >= self.max_pages || state.claimed.contains(url) {
            return false;
        }

        state.claimed.insert(url.to_string());
        state.count += 1;
        true
    }

    /// Number of URLs claimed so far
    pub fn claimed_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .count
    }

    /// Returns whether `url` has been claimed
    pub fn is_claimed(&self, url: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .claimed
            .contains(url)
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_new_frontier_is_empty() {
        let frontier = Frontier::new(10);
        assert_eq!(frontier.claimed_count(), 0);
        assert_eq!(frontier.max_pages(), 10);
        assert!(!frontier.is_claimed("https://example.com/"));
    }

    #[test]
    fn test_claim_once() {
        let frontier = Frontier::new(10);
        assert!(frontier.try_claim("https://example.com/"));
        assert!(!frontier.try_claim("https://example.com/"));
        assert_eq!(frontier.claimed_count(), 1);
        assert!(frontier.is_claimed("https://example.com/"));
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let frontier = Frontier::new(10);
        assert!(frontier.try_claim("https://example.com"));
        assert!(frontier.try_claim("https://example.com/"));
        assert_eq!(frontier.claimed_count(), 2);
    }

    #[test]
    fn test_budget_enforced() {
        let frontier = Frontier::new(2);
        assert!(frontier.try_claim("https://example.com/a"));
        assert!(frontier.try_claim("https://example.com/b"));
        assert!(!frontier.try_claim("https://example.com/c"));
        assert!(!frontier.is_claimed("https://example.com/c"));
        assert_eq!(frontier.claimed_count(), 2);
    }

    #[test]
    fn test_rejected_claim_does_not_mutate() {
        let frontier = Frontier::new(1);
        assert!(frontier.try_claim("https://example.com/a"));
        assert!(!frontier.try_claim("https://example.com/a"));
        assert!(!frontier.try_claim("https://example.com/b"));
        assert_eq!(frontier.claimed_count(), 1);
    }

    #[test]
    fn test_concurrent_claims_respect_budget() {
        let frontier = Arc::new(Frontier::new(10));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let frontier = Arc::clone(&frontier);
                std::thread::spawn(move || frontier.try_claim(&format!("https://example.com/{}", i)))
            })
            .collect();

        let granted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(granted, 10);
        assert_eq!(frontier.claimed_count(), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_claims_same_url() {
        let frontier = Arc::new(Frontier::new(100));

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let frontier = Arc::clone(&frontier);
                tokio::spawn(async move { frontier.try_claim("https://example.com/shared") })
            })
            .collect();

        let mut granted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                granted += 1;
            }
        }

        assert_eq!(granted, 1);
        assert_eq!(frontier.claimed_count(), 1);
    }
}
