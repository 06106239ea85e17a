use crate::config::types::{Config, FetchConfig, JobConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;

    if config.jobs.is_empty() {
        return Err(ConfigError::Validation(
            "at least one [[job]] must be configured".to_string(),
        ));
    }

    for job in &config.jobs {
        validate_job_config(job)?;
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.search_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid search-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "search-url must use an HTTP scheme, got '{}'",
            url.scheme()
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates a single job entry
fn validate_job_config(job: &JobConfig) -> Result<(), ConfigError> {
    if job.keywords.split(',').all(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "job keywords cannot be empty".to_string(),
        ));
    }

    if job.limit < 1 {
        return Err(ConfigError::Validation(format!(
            "job limit must be >= 1, got {}",
            job.limit
        )));
    }

    if job.output_directory.is_empty() {
        return Err(ConfigError::Validation(
            "output-directory cannot be empty".to_string(),
        ));
    }

    // Prefix becomes part of filenames, so keep it to safe characters
    if !job
        .prefix
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "prefix must contain only alphanumeric characters, hyphens, and underscores, got '{}'",
            job.prefix
        )));
    }

    if let Some(source) = &job.save_source {
        if source.is_empty() {
            return Err(ConfigError::Validation(
                "save-source cannot be an empty string; omit it to disable the source log"
                    .to_string(),
            ));
        }
    }

    Ok(())
}
