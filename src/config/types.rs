use serde::Deserialize;

/// Main configuration structure for Sumi-Sweep
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed URLs the crawl starts from
    pub seeds: Vec<String>,
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawl bounds and fan-in behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Maximum link depth followed from a seed (seeds are depth 0)
    pub max_depth: u32,

    /// Maximum number of pages fetched over the whole run
    pub max_pages: usize,

    /// Capacity of the result channel between crawl tasks and the collector
    pub result_buffer: usize,

    /// Scheme used when resolving `/path` links against the seed domain
    pub link_scheme: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_pages: 100,
            result_buffer: 1,
            link_scheme: "https".to_string(),
        }
    }
}

/// HTTP client configuration for the default page fetcher
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    pub user_agent: String,

    /// Total time allowed for one fetch (seconds)
    pub request_timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("sumi-sweep/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path of the results log, truncated at the start of each run
    pub results_path: String,

    /// Colorize console output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: "results.txt".to_string(),
            color: true,
        }
    }
}
