//! HTML parser for extracting image URLs
//!
//! This module handles parsing search result markup to extract the `src`
//! attributes of `<img>` elements. Only absolute http(s) URLs are kept,
//! in document order; any extension filtering happens later, inside the
//! downloader.

use scraper::{Html, Selector};
use url::Url;

/// Extracts absolute image URLs from a search result page
///
/// # Extraction Rules
///
/// **Include:**
/// - `<img src="...">` where the src is an absolute http(s) URL
///
/// **Exclude:**
/// - Relative srcs and protocol-relative srcs
/// - Data URIs (inline thumbnails)
/// - Missing or empty src attributes
///
/// **Note:** order of the returned list is document order; no ranking or
/// relevance filtering is applied.
///
/// # Arguments
///
/// * `html` - The raw page markup
///
/// # Returns
///
/// A vector of absolute image URLs found in the markup
///
/// # Example
///
/// ```
/// use imagehaul::scrape::extract_image_urls;
///
/// let html = r#"<html><body><img src="https://example.com/a.jpg"></body></html>"#;
/// let urls = extract_image_urls(html);
/// assert_eq!(urls, vec!["https://example.com/a.jpg".to_string()]);
/// ```
pub fn extract_image_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut urls = Vec::new();

    if let Ok(img_selector) = Selector::parse("img[src]") {
        for element in document.select(&img_selector) {
            if let Some(src) = element.value().attr("src") {
                if let Some(absolute_url) = keep_absolute(src) {
                    urls.push(absolute_url);
                }
            }
        }
    }

    urls
}

/// Validates that a src attribute is an absolute http(s) URL
///
/// Returns None if the src should be excluded:
/// - Empty or whitespace-only srcs
/// - data: URIs
/// - Relative paths (no scheme)
/// - Non-HTTP(S) schemes
fn keep_absolute(src: &str) -> Option<String> {
    let src = src.trim();

    if src.is_empty() || src.starts_with("data:") {
        return None;
    }

    match Url::parse(src) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url.to_string()),
        _ => None,
    }
}
