use url::Url;

/// Returns the authority of a URL: its host, plus the port when one is given
/// explicitly
///
/// The URL parser already lowercases hosts and drops ports equal to the
/// scheme's default, so `https://Example.COM:443/` and `https://example.com/`
/// share the authority `example.com`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_sweep::url::authority;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Extracts the crawl domain from a seed URL string
///
/// A seed that fails to parse, or has no host, yields an empty domain. No link
/// ever matches an empty domain, so such a seed is fetched but never expanded.
///
/// # Examples
///
/// ```
/// use sumi_sweep::url::extract_domain;
///
/// assert_eq!(extract_domain("https://sub.example.com/a?b=c"), "sub.example.com");
/// assert_eq!(extract_domain("not a url"), "");
/// ```
pub fn extract_domain(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => authority(&url).unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Seed {} has no usable domain ({}); it will not expand", raw, e);
            String::new()
        }
    }
}
