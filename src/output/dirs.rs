//! Directory layout management
//!
//! This module derives directory-safe names from search terms and creates
//! the per-keyword output tree. All creations use `create_dir_all`
//! semantics, so re-running against an existing tree is safe — including
//! the thumbnails subdirectory.

use crate::ScrapeError;
use std::path::{Path, PathBuf};

/// Derives a directory-safe name from a search term
///
/// Leading/trailing whitespace is trimmed and interior spaces become
/// underscores, so "space hopper ball" yields "space_hopper_ball".
pub fn sanitize_keyword(term: &str) -> String {
    term.trim().replace(' ', "_")
}

/// Creates the output directory tree for one keyword
///
/// Creates `<root>/<dir_name>/` and, when either thumbnail flag is set,
/// `<root>/<dir_name>/thumbnails/`. Both calls are idempotent.
///
/// # Arguments
///
/// * `root` - The job's output root
/// * `dir_name` - Sanitized keyword directory name
/// * `thumbnail` - Whether a thumbnails subdirectory is wanted
/// * `thumbnail_only` - Whether only the thumbnails layout is wanted
///
/// # Returns
///
/// * `Ok(PathBuf)` - The keyword directory path
/// * `Err(ScrapeError)` - Directory creation failed
pub fn create_directories(
    root: &Path,
    dir_name: &str,
    thumbnail: bool,
    thumbnail_only: bool,
) -> Result<PathBuf, ScrapeError> {
    let path = root.join(dir_name);

    std::fs::create_dir_all(&path).map_err(|source| ScrapeError::DirCreate {
        path: path.clone(),
        source,
    })?;

    if thumbnail || thumbnail_only {
        let thumbs = path.join("thumbnails");
        std::fs::create_dir_all(&thumbs).map_err(|source| ScrapeError::DirCreate {
            path: thumbs.clone(),
            source,
        })?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_plain_keyword() {
        assert_eq!(sanitize_keyword("cat"), "cat");
    }

    #[test]
    fn test_sanitize_spaces_to_underscores() {
        assert_eq!(sanitize_keyword("space hopper ball"), "space_hopper_ball");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_keyword("  cat  "), "cat");
        assert_eq!(sanitize_keyword(" space hopper "), "space_hopper");
    }

    #[test]
    fn test_create_keyword_directory() {
        let root = TempDir::new().unwrap();
        let path = create_directories(root.path(), "cat", false, false).unwrap();
        assert!(path.is_dir());
        assert!(!path.join("thumbnails").exists());
    }

    #[test]
    fn test_create_with_thumbnails() {
        let root = TempDir::new().unwrap();
        let path = create_directories(root.path(), "cat", true, false).unwrap();
        assert!(path.join("thumbnails").is_dir());
    }

    #[test]
    fn test_create_with_thumbnail_only() {
        let root = TempDir::new().unwrap();
        let path = create_directories(root.path(), "cat", false, true).unwrap();
        assert!(path.join("thumbnails").is_dir());
    }

    #[test]
    fn test_create_is_idempotent() {
        let root = TempDir::new().unwrap();
        create_directories(root.path(), "cat", true, false).unwrap();
        // Second call with an existing tree, thumbnails included, must not fail
        let result = create_directories(root.path(), "cat", true, false);
        assert!(result.is_ok());
    }
}
