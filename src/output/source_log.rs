//! Append-only source log
//!
//! The source log is a tab-separated text index mapping each downloaded
//! file's path to its origin URL, shared across a whole job. The handle is
//! opened in append mode and held for the duration of one keyword's
//! download loop, then dropped — never left with an implicit lifetime.

use crate::ScrapeError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A scoped, append-only handle to a job's source log file
#[derive(Debug)]
pub struct SourceLog {
    path: PathBuf,
    file: File,
}

impl SourceLog {
    /// Opens `<root>/<stem>.txt` for appending, creating it if absent
    ///
    /// # Arguments
    ///
    /// * `root` - The job's output root
    /// * `stem` - Configured source-log name, without extension
    pub fn open_append(root: &Path, stem: &str) -> Result<Self, ScrapeError> {
        let path = root.join(format!("{}.txt", stem));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| ScrapeError::SourceLog {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, file })
    }

    /// Appends one `path<TAB>url` line for a saved image
    pub fn record(&mut self, image_path: &Path, url: &str) -> Result<(), ScrapeError> {
        writeln!(self.file, "{}\t{}", image_path.display(), url).map_err(|source| {
            ScrapeError::SourceLog {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_appends_tab_separated_line() {
        let root = TempDir::new().unwrap();
        let mut log = SourceLog::open_append(root.path(), "image_sources").unwrap();
        log.record(Path::new("/tmp/cat_1.jpg"), "https://example.com/cat.jpg")
            .unwrap();
        drop(log);

        let content = std::fs::read_to_string(root.path().join("image_sources.txt")).unwrap();
        assert_eq!(content, "/tmp/cat_1.jpg\thttps://example.com/cat.jpg\n");
    }

    #[test]
    fn test_reopen_appends_rather_than_truncates() {
        let root = TempDir::new().unwrap();
        {
            let mut log = SourceLog::open_append(root.path(), "sources").unwrap();
            log.record(Path::new("/a.jpg"), "https://example.com/a.jpg")
                .unwrap();
        }
        {
            let mut log = SourceLog::open_append(root.path(), "sources").unwrap();
            log.record(Path::new("/b.jpg"), "https://example.com/b.jpg")
                .unwrap();
        }

        let content = std::fs::read_to_string(root.path().join("sources.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("/a.jpg\t"));
        assert!(lines[1].starts_with("/b.jpg\t"));
    }
}
