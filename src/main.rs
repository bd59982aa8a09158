//! Sumi-Sweep main entry point
//!
//! This is the command-line interface for the Sumi-Sweep crawler.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sumi_sweep::config::{load_config, validate, Config};
use sumi_sweep::crawler::crawl;
use sumi_sweep::output::ConsoleSink;
use sumi_sweep::ConfigError;
use tracing_subscriber::EnvFilter;

/// Sumi-Sweep: a bounded, same-origin web crawler
///
/// Sumi-Sweep crawls outward from the given seed URLs, following only links
/// that stay on each seed's domain, up to a maximum depth and page count.
/// Each page is reported with its title, description and link count.
#[derive(Parser, Debug)]
#[command(name = "sumi-sweep")]
#[command(version)]
#[command(about = "A bounded, same-origin web crawler", long_about = None)]
struct Cli {
    /// Seed URLs to start crawling from
    #[arg(value_name = "URLS")]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum link depth followed from a seed
    #[arg(short, long)]
    depth: Option<u32>,

    /// Maximum number of pages fetched over the whole run
    #[arg(short = 'n', long)]
    max_pages: Option<usize>,

    /// Path of the results log
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long)]
    no_color: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match merge_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    if config.seeds.is_empty() {
        eprintln!("error: no seed URLs given\n");
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(2);
    }

    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return ExitCode::from(2);
    }

    match handle_crawl(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_sweep=info,warn"),
            1 => EnvFilter::new("sumi_sweep=debug,info"),
            2 => EnvFilter::new("sumi_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Merges defaults, the optional config file and command-line flags
fn merge_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    config.seeds.extend(cli.urls.iter().cloned());

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(output) = &cli.output {
        config.output.results_path = output.display().to_string();
    }
    if cli.no_color {
        config.output.color = false;
    }

    Ok(config)
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Seeds: {}, max depth: {}, max pages: {}",
        config.seeds.len(),
        config.crawler.max_depth,
        config.crawler.max_pages
    );

    let results_path = Path::new(&config.output.results_path);
    let mut sink = ConsoleSink::create(results_path, config.output.color)
        .with_context(|| format!("Failed to create results log {}", results_path.display()))?;

    let summary = crawl(&config, &mut sink).await.context("Crawl failed")?;
    tracing::info!(
        "Crawl completed: {} ok, {} failed",
        summary.pages_ok,
        summary.pages_failed
    );

    Ok(())
}
