//! Image downloader with bounded retry
//!
//! This module fetches one image URL at a time, applies the extension
//! allow-list, names the destination file per the job's numbering policy,
//! writes the bytes, and records the source-log entry.

use crate::output::SourceLog;
use crate::scrape::fetcher::fetch_image;
use crate::ScrapeError;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Number of fetch attempts before an image URL is marked failed
pub const DOWNLOAD_ATTEMPTS: u32 = 3;

/// Fixed delay between failed attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Extensions accepted for downloaded images, matched case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 7] =
    [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".tif"];

/// Outcome of one image download
///
/// A rejection (extension not in the allow-list) is a distinct outcome
/// from a fetch failure; whether it counts toward the keyword's failure
/// tally is the job's `count-rejected-as-errors` policy, decided by the
/// orchestrator.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Image written to disk
    Saved {
        /// Absolute path of the written file
        path: PathBuf,
    },

    /// Fetched bytes discarded: URL extension not in the allow-list
    Rejected {
        /// The offending extension, if the URL had one
        extension: Option<String>,
    },

    /// All fetch attempts exhausted
    Failed {
        /// Last error description
        error: String,
    },
}

/// Downloads a single image URL into the keyword directory
///
/// # Policy
///
/// - Up to [`DOWNLOAD_ATTEMPTS`] fetch attempts; each failed attempt is
///   logged and followed by a [`RETRY_DELAY`] wait before the next.
/// - After a successful fetch, the URL basename's extension is checked
///   against [`IMAGE_EXTENSIONS`]; a mismatch discards the bytes and
///   returns `Rejected`, never a retry.
/// - Destination filename: `{prefix}{count}{ext}` when numbering, or the
///   source URL's own basename (prefixed) with `no_numbering`. A non-empty
///   prefix gets a trailing underscore. No collision detection; same-named
///   results overwrite.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `img_url` - The image URL
/// * `dest_dir` - The keyword directory
/// * `count` - 1-based sequence number of this attempt within the keyword
/// * `prefix` - Configured filename prefix, possibly empty
/// * `no_numbering` - Whether to keep the URL basename instead of the counter
/// * `source_log` - Optional source log to append `path<TAB>url` to on success
///
/// # Returns
///
/// * `Ok(DownloadOutcome)` - Saved, rejected, or failed after retries
/// * `Err(ScrapeError)` - Filesystem or bookkeeping error
pub async fn download_image(
    client: &Client,
    img_url: &str,
    dest_dir: &Path,
    count: usize,
    prefix: &str,
    no_numbering: bool,
    source_log: Option<&mut SourceLog>,
) -> Result<DownloadOutcome, ScrapeError> {
    // Fetch with bounded retry
    let bytes = match fetch_with_retry(client, img_url).await {
        Ok(bytes) => bytes,
        Err(error) => return Ok(DownloadOutcome::Failed { error }),
    };

    let basename = url_basename(img_url);
    let extension = match extension_of(&basename) {
        Some(ext) if is_allowed_extension(&ext) => ext,
        other => return Ok(DownloadOutcome::Rejected { extension: other }),
    };

    let file_name = if no_numbering {
        format!("{}{}", filename_prefix(prefix), basename)
    } else {
        format!("{}{}{}", filename_prefix(prefix), count, extension)
    };

    let path = dest_dir.join(file_name);
    std::fs::write(&path, &bytes).map_err(|source| ScrapeError::FileWrite {
        path: path.clone(),
        source,
    })?;

    let absolute = path.canonicalize().unwrap_or(path);

    if let Some(log) = source_log {
        log.record(&absolute, img_url)?;
    }

    Ok(DownloadOutcome::Saved { path: absolute })
}

/// Fetches an image with up to [`DOWNLOAD_ATTEMPTS`] attempts
async fn fetch_with_retry(client: &Client, img_url: &str) -> Result<Vec<u8>, String> {
    let mut last_error = String::new();

    for attempt in 1..=DOWNLOAD_ATTEMPTS {
        match fetch_image(client, img_url).await {
            Ok(bytes) => return Ok(bytes),
            Err(error) => {
                tracing::warn!(
                    "Attempt {} failed for image: {}. Error: {}",
                    attempt,
                    img_url,
                    error
                );
                last_error = error;
                if attempt < DOWNLOAD_ATTEMPTS {
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    tracing::warn!("All attempts failed for image: {}. Skipping...", img_url);
    Err(last_error)
}

/// Extracts the final path segment of a URL, query and fragment excluded
///
/// Empty trailing segments are skipped, so a directory-style URL yields its
/// last non-empty segment and a bare host URL yields the host. The result
/// is never empty for a non-empty input.
fn url_basename(img_url: &str) -> String {
    if let Ok(url) = Url::parse(img_url) {
        if let Some(last) = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        {
            return last.to_string();
        }
    }

    img_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(img_url)
        .to_string()
}

/// Returns the lowercased extension of a basename, dot included
fn extension_of(basename: &str) -> Option<String> {
    let dot = basename.rfind('.')?;
    if dot == 0 || dot == basename.len() - 1 {
        return None;
    }
    Some(basename[dot..].to_ascii_lowercase())
}

/// Checks a lowercased extension against the allow-list
fn is_allowed_extension(extension: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extension)
}

/// A non-empty prefix is separated from the rest of the name by an underscore
fn filename_prefix(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!("{}_", prefix)
    }
}
