//! Console and results-log output
//!
//! Each record is printed to the console (green for success, red for failure)
//! and appended, uncolored, to the results log. The log is truncated when the
//! sink is created, so it always holds exactly one run.

use crate::crawler::PageResult;
use crate::output::traits::{CrawlSummary, OutputResult, OutputSink};
use console::style;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Formats a page result as plain text
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sumi_sweep::crawler::{FetchError, PageResult};
/// use sumi_sweep::output::format_page;
///
/// let failed = PageResult::failure(
///     "https://example.com/".to_string(),
///     0,
///     &FetchError::Timeout,
///     Duration::from_millis(1500),
/// );
/// assert_eq!(
///     format_page(&failed),
///     "✗ https://example.com/ — ERROR: request timed out (⏱ 1.5s)"
/// );
/// ```
pub fn format_page(page: &PageResult) -> String {
    match &page.error {
        Some(error) => format!(
            "✗ {} — ERROR: {} (⏱ {:?})",
            page.url, error, page.duration
        ),
        None => format!(
            "✓ {} —\nTitle: \"{}\"\nDescription: \"{}\"\nLinks found: {}\n(⏱ {:?})",
            page.url,
            page.title,
            page.description,
            page.link_count(),
            page.duration
        ),
    }
}

/// Formats the run summary as plain text
pub fn format_summary(summary: &CrawlSummary) -> String {
    format!(
        "\nAll done in {:?}\nPages: {} ok, {} failed",
        summary.elapsed, summary.pages_ok, summary.pages_failed
    )
}

/// Sink writing to a console and a results log
pub struct ConsoleSink<W = Stdout> {
    console: W,
    log: File,
    color: bool,
}

impl ConsoleSink {
    /// Creates a sink printing to stdout and logging to `log_path`
    ///
    /// # Returns
    ///
    /// * `Ok(ConsoleSink)` - The log file was created (or truncated)
    /// * `Err(OutputError)` - The log file could not be created
    pub fn create(log_path: &Path, color: bool) -> OutputResult<Self> {
        Self::with_console(io::stdout(), log_path, color)
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink printing to an arbitrary writer
    pub fn with_console(console: W, log_path: &Path, color: bool) -> OutputResult<Self> {
        let log = File::create(log_path)?;
        Ok(Self {
            console,
            log,
            color,
        })
    }

    fn emit(&mut self, text: &str, ok: bool) -> OutputResult<()> {
        if self.color {
            let styled = if ok {
                style(text).green()
            } else {
                style(text).red()
            };
            writeln!(self.console, "{}", styled.force_styling(true))?;
        } else {
            writeln!(self.console, "{}", text)?;
        }

        writeln!(self.log, "{}", text)?;
        Ok(())
    }

    /// Returns the console writer, consuming the sink
    pub fn into_console(self) -> W {
        self.console
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn record_page(&mut self, page: &PageResult) -> OutputResult<()> {
        self.emit(&format_page(page), page.is_ok())
    }

    fn record_summary(&mut self, summary: &CrawlSummary) -> OutputResult<()> {
        let text = format_summary(summary);
        writeln!(self.console, "{}", text)?;
        writeln!(self.log, "{}", text)?;
        self.console.flush()?;
        self.log.flush()?;
        Ok(())
    }
}
