//! Error types for configuration loading.

/// Error loading a configuration record.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The source text could not be parsed.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
