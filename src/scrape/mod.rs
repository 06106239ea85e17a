//! Scrape module for page fetching and image downloading
//!
//! This module contains the core batch logic, including:
//! - HTTP fetching for search pages and images
//! - Image URL extraction from markup
//! - The retrying image downloader and its naming policy
//! - Overall batch orchestration

mod batch;
mod downloader;
mod fetcher;
mod parser;

pub use batch::{run_batch, BatchRunner, KeywordOutcome};
pub use downloader::{
    download_image, DownloadOutcome, DOWNLOAD_ATTEMPTS, IMAGE_EXTENSIONS, RETRY_DELAY,
};
pub use fetcher::{build_http_client, build_search_url, fetch_image, fetch_search_page, PageResult};
pub use parser::extract_image_urls;
