//! Imagehaul main entry point
//!
//! This is the command-line interface for the imagehaul batch downloader.

use clap::Parser;
use imagehaul::config::load_config;
use imagehaul::output::print_summary;
use imagehaul::scrape::{build_search_url, run_batch};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Imagehaul: a keyword image batch downloader
///
/// Imagehaul fetches one image search result page per configured keyword,
/// extracts embedded image URLs, and downloads a bounded number of them
/// into per-keyword directories.
#[derive(Parser, Debug)]
#[command(name = "imagehaul")]
#[command(version = "1.0.0")]
#[command(about = "A keyword image batch downloader", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be fetched without downloading
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => {
            tracing::info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_run(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("imagehaul=info,warn"),
            1 => EnvFilter::new("imagehaul=debug,info"),
            2 => EnvFilter::new("imagehaul=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be fetched
fn handle_dry_run(config: &imagehaul::config::Config) -> anyhow::Result<()> {
    println!("=== Imagehaul Dry Run ===\n");

    println!("Fetch Configuration:");
    println!("  Search URL: {}", config.fetch.search_url);
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Timeout: {}s", config.fetch.timeout_secs);

    println!("\nJobs ({}):", config.jobs.len());
    for job in &config.jobs {
        println!("  Output root: {}", job.output_directory);
        println!("  Limit per keyword: {}", job.limit);
        if !job.prefix.is_empty() {
            println!("  Prefix: {}", job.prefix);
        }
        if let Some(source) = &job.save_source {
            println!("  Source log: {}.txt", source);
        }
        println!(
            "  Naming: {}",
            if job.no_numbering {
                "source basename"
            } else {
                "sequence counter"
            }
        );
        println!("  Keywords:");
        for term in job.keywords.split(',') {
            let term = term.trim();
            if term.is_empty() {
                continue;
            }
            let url = build_search_url(&config.fetch.search_url, term)?;
            println!("    - {} ({})", term, url);
        }
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main batch run and prints the final summary
async fn handle_run(config: imagehaul::config::Config) -> anyhow::Result<()> {
    let keyword_count: usize = config
        .jobs
        .iter()
        .map(|job| {
            job.keywords
                .split(',')
                .filter(|term| !term.trim().is_empty())
                .count()
        })
        .sum();
    tracing::info!(
        "Starting batch: {} jobs, {} keywords",
        config.jobs.len(),
        keyword_count
    );

    let start = Instant::now();
    match run_batch(config).await {
        Ok(summary) => {
            print_summary(&summary, start.elapsed());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Batch failed: {}", e);
            Err(e.into())
        }
    }
}
