use crate::url::domain::authority;
use url::Url;

/// Resolves a raw link against the crawl domain
///
/// Only absolute-path references (a leading `/`) are rewritten, by prefixing
/// `<scheme>://<domain>`. Every other form is returned unchanged: absolute URLs
/// pass through, while `../x`, `x.html`, `#frag` and scheme-relative `//host/x`
/// links either fail to parse or fail the domain comparison later on.
///
/// # Examples
///
/// ```
/// use sumi_sweep::url::resolve_link;
///
/// assert_eq!(resolve_link("/docs", "https", "example.com"), "https://example.com/docs");
/// assert_eq!(resolve_link("https://other.com/", "https", "example.com"), "https://other.com/");
/// assert_eq!(resolve_link("page.html", "https", "example.com"), "page.html");
/// ```
pub fn resolve_link(href: &str, scheme: &str, domain: &str) -> String {
    // "//host/x" would otherwise be glued onto the domain
    if href.starts_with('/') && !href.starts_with("//") {
        format!("{}://{}{}", scheme, domain, href)
    } else {
        href.to_string()
    }
}

/// Decides whether a discovered link should be followed
///
/// Returns the URL to crawl when the resolved link parses and its authority
/// equals `domain` exactly, `None` otherwise.
pub fn follow_target(href: &str, scheme: &str, domain: &str) -> Option<String> {
    if domain.is_empty() {
        return None;
    }

    let resolved = resolve_link(href, scheme, domain);
    let parsed = match Url::parse(&resolved) {
        Ok(url) => url,
        Err(e) => {
            tracing::trace!("Dropping unparseable link {}: {}", resolved, e);
            return None;
        }
    };

    if authority(&parsed).as_deref() == Some(domain) {
        Some(resolved)
    } else {
        tracing::trace!("Dropping off-domain link {}", resolved);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_path() {
        assert_eq!(
            resolve_link("/x", "https", "a.example"),
            "https://a.example/x"
        );
    }

    #[test]
    fn test_resolve_uses_scheme() {
        assert_eq!(
            resolve_link("/x", "http", "127.0.0.1:8080"),
            "http://127.0.0.1:8080/x"
        );
    }

    #[test]
    fn test_other_relative_forms_untouched() {
        assert_eq!(resolve_link("../up", "https", "a.example"), "../up");
        assert_eq!(resolve_link("#top", "https", "a.example"), "#top");
        assert_eq!(resolve_link("//cdn.example/x", "https", "a.example"), "//cdn.example/x");
    }

    #[test]
    fn test_follow_relative_link() {
        assert_eq!(
            follow_target("/x", "https", "a.example"),
            Some("https://a.example/x".to_string())
        );
    }

    #[test]
    fn test_follow_same_domain_absolute_link() {
        assert_eq!(
            follow_target("https://a.example/page?q=1", "https", "a.example"),
            Some("https://a.example/page?q=1".to_string())
        );
    }

    #[test]
    fn test_reject_other_domain() {
        assert_eq!(follow_target("https://b.example/x", "https", "a.example"), None);
    }

    #[test]
    fn test_reject_subdomain() {
        assert_eq!(follow_target("https://www.a.example/", "https", "a.example"), None);
    }

    #[test]
    fn test_reject_different_port() {
        assert_eq!(follow_target("http://a.example:9000/", "http", "a.example:8000"), None);
    }

    #[test]
    fn test_reject_unresolvable_relative_forms() {
        assert_eq!(follow_target("page.html", "https", "a.example"), None);
        assert_eq!(follow_target("../up", "https", "a.example"), None);
        assert_eq!(follow_target("#top", "https", "a.example"), None);
        assert_eq!(follow_target("mailto:me@a.example", "https", "a.example"), None);
    }

    #[test]
    fn test_empty_domain_never_matches() {
        assert_eq!(follow_target("/x", "https", ""), None);
        assert_eq!(follow_target("https://a.example/", "https", ""), None);
    }
}
