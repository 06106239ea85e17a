//! Batch orchestration - main run loop
//!
//! This module drives the whole batch: for every configured job it splits
//! the keyword list, fetches the search page, sets up directories, extracts
//! image URLs, runs the download loop up to the job's limit, and folds the
//! per-keyword outcomes into the run summary. Control flow is strictly
//! sequential; nothing here runs concurrently with anything else.

use crate::config::{Config, JobConfig};
use crate::output::{create_directories, sanitize_keyword, RunSummary, SourceLog};
use crate::scrape::downloader::{download_image, DownloadOutcome};
use crate::scrape::fetcher::{build_http_client, build_search_url, fetch_search_page, PageResult};
use crate::scrape::parser::extract_image_urls;
use crate::ScrapeError;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Name of the per-job aggregate error log
const ERROR_LOG_NAME: &str = "error_log.txt";

/// Results of one keyword's search-and-download pass
///
/// Discovered URLs and downloaded paths are deliberately separate fields:
/// the first is every absolute image URL found on the page, the second only
/// the files actually written.
#[derive(Debug, Default)]
pub struct KeywordOutcome {
    /// Every absolute image URL extracted from the search page
    pub discovered: Vec<String>,

    /// Paths of the images written for this keyword
    pub downloaded: Vec<PathBuf>,

    /// Failure count for this keyword
    pub failures: u32,
}

/// Batch runner holding the configuration and the shared HTTP client
pub struct BatchRunner {
    config: Config,
    client: Client,
}

impl BatchRunner {
    /// Creates a new batch runner
    ///
    /// # Arguments
    ///
    /// * `config` - The validated run configuration
    ///
    /// # Returns
    ///
    /// * `Ok(BatchRunner)` - Ready to run
    /// * `Err(ScrapeError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.fetch)?;
        Ok(Self { config, client })
    }

    /// Runs every configured job in sequence
    ///
    /// A failed keyword contributes to the error tally and the run
    /// proceeds; nothing short of a filesystem error aborts the batch.
    pub async fn run(&self) -> Result<RunSummary, ScrapeError> {
        let mut summary = RunSummary::default();

        for job in &self.config.jobs {
            self.run_job(job, &mut summary).await?;
        }

        tracing::info!(
            "Batch complete: {} keywords, {} images downloaded, {} errors",
            summary.keywords_processed,
            summary.downloaded.len(),
            summary.total_failures
        );

        Ok(summary)
    }

    /// Runs one job: every keyword in its list, then the job error log
    async fn run_job(&self, job: &JobConfig, summary: &mut RunSummary) -> Result<(), ScrapeError> {
        let output_root = Path::new(&job.output_directory);
        let mut error_lines = Vec::new();

        for term in job.keywords.split(',') {
            let term = term.trim();
            if term.is_empty() {
                continue;
            }

            let outcome = self.run_keyword(job, term, output_root).await?;

            if outcome.failures > 0 {
                error_lines.push(format!(
                    "Failed to download {} images for search term: {}",
                    outcome.failures, term
                ));
            }

            summary.record_keyword(
                outcome.discovered.len(),
                outcome.downloaded,
                outcome.failures,
            );
        }

        if !error_lines.is_empty() {
            let log_path = output_root.join(ERROR_LOG_NAME);
            std::fs::write(&log_path, error_lines.join("\n"))?;
            tracing::info!("Wrote error log to {}", log_path.display());
        }

        Ok(())
    }

    /// Runs one keyword: fetch the page, create directories, extract and
    /// download up to the job's limit
    async fn run_keyword(
        &self,
        job: &JobConfig,
        term: &str,
        output_root: &Path,
    ) -> Result<KeywordOutcome, ScrapeError> {
        let dir_name = sanitize_keyword(term);
        tracing::info!("Now downloading - {}", term);

        // Fetch the search page; a failure degrades to zero images found
        let search_url = build_search_url(&self.config.fetch.search_url, term)?;
        let body = match fetch_search_page(&self.client, &search_url).await {
            PageResult::Success { body } => body,
            PageResult::Failed { error } => {
                tracing::warn!("Failed to download page: {}, Error: {}", search_url, error);
                String::new()
            }
        };

        // The keyword directory exists even when nothing gets downloaded
        let dest_dir =
            create_directories(output_root, &dir_name, job.thumbnail, job.thumbnail_only)?;

        let discovered = extract_image_urls(&body);
        tracing::info!("Found {} images for '{}'", discovered.len(), dir_name);

        if discovered.is_empty() {
            tracing::info!("No images found for {}. Skipping...", dir_name);
            return Ok(KeywordOutcome {
                discovered,
                ..Default::default()
            });
        }

        // Source log handle scoped to this keyword's download loop; the
        // file itself is shared across the whole job via append mode.
        let mut source_log = match &job.save_source {
            Some(stem) => Some(SourceLog::open_append(output_root, stem)?),
            None => None,
        };

        let mut downloaded = Vec::new();
        let mut failures = 0u32;

        // Every attempted URL consumes one limit slot and one counter
        // value, so numbered filenames keep increasing across gaps.
        for (attempted, img_url) in discovered.iter().take(job.limit).enumerate() {
            let count = attempted + 1;

            if job.silent {
                tracing::debug!("Downloading image {} from {}", count, img_url);
            } else {
                tracing::info!("Downloading image {} from {}", count, img_url);
            }

            let outcome = download_image(
                &self.client,
                img_url,
                &dest_dir,
                count,
                &job.prefix,
                job.no_numbering,
                source_log.as_mut(),
            )
            .await?;

            match outcome {
                DownloadOutcome::Saved { path } => {
                    downloaded.push(path);
                }
                DownloadOutcome::Rejected { extension } => {
                    tracing::warn!(
                        "Invalid or missing image format for {} (extension: {:?}). Skipping...",
                        img_url,
                        extension
                    );
                    if job.count_rejected_as_errors {
                        failures += 1;
                    }
                }
                DownloadOutcome::Failed { error } => {
                    tracing::warn!(
                        "Failed to download image {}. Error: {}. Continuing with the next one...",
                        img_url,
                        error
                    );
                    failures += 1;
                }
            }
        }

        Ok(KeywordOutcome {
            discovered,
            downloaded,
            failures,
        })
    }
}

/// Runs the whole batch from a validated configuration
///
/// This is the main entry point: it builds the HTTP client, processes
/// every job's keywords in sequence, and returns the accumulated summary.
///
/// # Arguments
///
/// * `config` - The run configuration
///
/// # Returns
///
/// * `Ok(RunSummary)` - Aggregate counts and downloaded paths
/// * `Err(ScrapeError)` - A filesystem or client-construction error
///
/// # Example
///
/// ```no_run
/// use imagehaul::config::load_config;
/// use imagehaul::scrape::run_batch;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let summary = run_batch(config).await?;
/// println!("Downloaded {} images", summary.downloaded.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_batch(config: Config) -> Result<RunSummary, ScrapeError> {
    let runner = BatchRunner::new(config)?;
    runner.run().await
}
