use crate::crawler::fetcher::{FetchError, FetchedPage};
use std::time::Duration;

/// Outcome of one claimed fetch
///
/// Built by the crawl task that fetched the page and handed, by value, to the
/// result collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// The URL that was fetched
    pub url: String,

    /// Link distance from the seed (seeds are depth 0)
    pub depth: u32,

    pub title: String,
    pub description: String,

    /// Distinct outbound links, as written in the page
    pub links: Vec<String>,

    /// Time spent in the fetch, successful or not
    pub duration: Duration,

    /// Why the fetch failed, if it did
    pub error: Option<String>,
}

impl PageResult {
    /// Creates a result for a successful fetch
    pub fn success(url: String, depth: u32, page: FetchedPage, duration: Duration) -> Self {
        Self {
            url,
            depth,
            title: page.title,
            description: page.description,
            links: page.links,
            duration,
            error: None,
        }
    }

    /// Creates a result for a failed fetch
    pub fn failure(url: String, depth: u32, error: &FetchError, duration: Duration) -> Self {
        Self {
            url,
            depth,
            title: String::new(),
            description: String::new(),
            links: Vec::new(),
            duration,
            error: Some(error.to_string()),
        }
    }

    /// Returns true if the fetch succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let page = FetchedPage {
            title: "Home".to_string(),
            description: "Front page".to_string(),
            links: vec!["/a".to_string(), "/b".to_string()],
        };
        let result = PageResult::success(
            "https://example.com/".to_string(),
            0,
            page,
            Duration::from_millis(12),
        );

        assert!(result.is_ok());
        assert_eq!(result.title, "Home");
        assert_eq!(result.link_count(), 2);
        assert_eq!(result.duration, Duration::from_millis(12));
    }

    #[test]
    fn test_failure_result() {
        let result = PageResult::failure(
            "https://example.com/".to_string(),
            1,
            &FetchError::Timeout,
            Duration::from_secs(30),
        );

        assert!(!result.is_ok());
        assert_eq!(result.error.as_deref(), Some("request timed out"));
        assert_eq!(result.link_count(), 0);
        assert_eq!(result.depth, 1);
    }
}
