//! Configuration module for Sumi-Sweep
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then command-line overrides. The merged result is checked with [`validate`].
//!
//! # Example
//!
//! ```no_run
//! use sumi_sweep::config::{load_config, validate};
//! use std::path::Path;
//!
//! let mut config = load_config(Path::new("sweep.toml")).unwrap();
//! config.seeds.push("https://example.com/".to_string());
//! validate(&config).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
