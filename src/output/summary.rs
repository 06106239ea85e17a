//! Run summary accumulation and display
//!
//! This module aggregates per-keyword outcomes into a whole-run summary
//! and prints it at exit. The summary lives for one process execution and
//! is never persisted.

use std::path::PathBuf;
use std::time::Duration;

/// Aggregate results of one batch run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Filesystem paths of every successfully downloaded image
    pub downloaded: Vec<PathBuf>,

    /// Total number of image URLs discovered across all keywords
    pub discovered_urls: usize,

    /// Total failure count across all keywords
    pub total_failures: u32,

    /// Number of keywords processed
    pub keywords_processed: usize,
}

impl RunSummary {
    /// Folds one keyword's results into the run totals
    pub fn record_keyword(
        &mut self,
        discovered: usize,
        downloaded: Vec<PathBuf>,
        failures: u32,
    ) {
        self.discovered_urls += discovered;
        self.downloaded.extend(downloaded);
        self.total_failures += failures;
        self.keywords_processed += 1;
    }
}

/// Prints the run summary to stdout
///
/// # Arguments
///
/// * `summary` - The accumulated run results
/// * `elapsed` - Wall time of the whole run
pub fn print_summary(summary: &RunSummary, elapsed: Duration) {
    println!("\nEverything downloaded!");
    println!("Keywords processed: {}", summary.keywords_processed);
    println!("Image URLs discovered: {}", summary.discovered_urls);
    println!("Images downloaded: {}", summary.downloaded.len());
    println!("Total errors: {}", summary.total_failures);
    println!("Total time taken: {:.2} Seconds", elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keyword_accumulates() {
        let mut summary = RunSummary::default();
        summary.record_keyword(5, vec![PathBuf::from("/a.jpg"), PathBuf::from("/b.jpg")], 0);
        summary.record_keyword(1, vec![], 1);

        assert_eq!(summary.discovered_urls, 6);
        assert_eq!(summary.downloaded.len(), 2);
        assert_eq!(summary.total_failures, 1);
        assert_eq!(summary.keywords_processed, 2);
    }

    #[test]
    fn test_default_is_empty() {
        let summary = RunSummary::default();
        assert_eq!(summary.downloaded.len(), 0);
        assert_eq!(summary.total_failures, 0);
    }
}
