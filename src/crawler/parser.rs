//! HTML parser for extracting page metadata and links
//!
//! This module handles parsing HTML content to extract:
//! - Page title
//! - Meta description
//! - Raw `<a href>` values, in document order, without duplicates

use crate::crawler::fetcher::FetchedPage;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Parses HTML content into a [`FetchedPage`]
///
/// # Extraction Rules
///
/// - **Title**: text of the first `<title>` element, trimmed
/// - **Description**: `content` of the first `<meta>` whose `name` is
///   `description` (case-insensitive)
/// - **Links**: every `<a href>`, trimmed; empty values are skipped and
///   repeats are dropped, keeping the first occurrence
///
/// Links are returned exactly as written. Resolving them is the crawler's
/// job, since only the crawler knows the target domain.
///
/// # Example
///
/// ```
/// use sumi_sweep::crawler::parse_page;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let page = parse_page(html);
/// assert_eq!(page.title, "Test");
/// assert_eq!(page.links, vec!["/page".to_string()]);
/// ```
pub fn parse_page(html: &str) -> FetchedPage {
    let document = Html::parse_document(html);

    FetchedPage {
        title: extract_title(&document).unwrap_or_default(),
        description: extract_description(&document).unwrap_or_default(),
        links: extract_links(&document),
    }
}

/// Extracts the page title from the HTML document
///
/// The first `<title>` wins. Stray titles later in the body (embedded SVG,
/// injected widgets) are ignored rather than overwriting the head's.
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Same rule as the title: the first matching `<meta>` wins
fn extract_description(document: &Html) -> Option<String> {
    let meta_selector = Selector::parse("meta[name]").ok()?;

    document
        .select(&meta_selector)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

/// Extracts distinct, non-empty hrefs in document order
fn extract_links(document: &Html) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            let href = href.trim();
            if !href.is_empty() && seen.insert(href) {
                links.push(href.to_string());
            }
        }
    }

    links
}
