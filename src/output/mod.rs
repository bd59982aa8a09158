//! Output module for presenting crawl results
//!
//! This module handles:
//! - The sink interface the result collector writes into
//! - Console output with a persisted results log
//! - An in-memory sink for programmatic use

mod console;
mod memory;
mod traits;

pub use console::{format_page, format_summary, ConsoleSink};
pub use memory::MemorySink;
pub use traits::{CrawlSummary, OutputError, OutputResult, OutputSink};
