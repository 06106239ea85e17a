use serde::Deserialize;

/// Main configuration structure for imagehaul
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub fetch: FetchConfig,
    #[serde(default, rename = "job")]
    pub jobs: Vec<JobConfig>,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the image search endpoint. The query is appended as the
    /// `q` parameter, so a value like "https://www.google.com/search" yields
    /// "https://www.google.com/search?q=<term>&tbm=isch".
    #[serde(rename = "search-url")]
    pub search_url: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// One keyword search-and-download unit of work
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// Comma-separated list of search terms
    pub keywords: String,

    /// Maximum number of download attempts per keyword
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Root directory that keyword directories are created under
    #[serde(rename = "output-directory", default = "default_output_directory")]
    pub output_directory: String,

    /// Optional filename prefix; a trailing underscore is added when set
    #[serde(default)]
    pub prefix: String,

    /// When true, files keep their source URL basename instead of a counter
    #[serde(rename = "no-numbering", default)]
    pub no_numbering: bool,

    /// Stem of the tab-separated source log file, e.g. "image_sources"
    /// writes "<output-directory>/image_sources.txt". None disables the log.
    #[serde(rename = "save-source", default)]
    pub save_source: Option<String>,

    /// Create a thumbnails subdirectory alongside the images
    #[serde(default)]
    pub thumbnail: bool,

    /// Create only the thumbnails subdirectory layout
    #[serde(rename = "thumbnail-only", default)]
    pub thumbnail_only: bool,

    /// Demote per-image progress output to debug level
    #[serde(default)]
    pub silent: bool,

    /// Whether an extension-rejected download counts toward the keyword's
    /// failure tally, like a fetch failure does
    #[serde(rename = "count-rejected-as-errors", default = "default_true")]
    pub count_rejected_as_errors: bool,
}

fn default_user_agent() -> String {
    // A browser-like identity; some search endpoints serve a stripped page
    // to unknown agents.
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_limit() -> usize {
    100
}

fn default_output_directory() -> String {
    "downloads".to_string()
}

fn default_true() -> bool {
    true
}
