use thiserror::Error;

/// Errors raised around the formatter: loading settings and writing output.
///
/// Formatting and CSV encoding themselves never fail.
#[derive(Error, Debug)]
pub enum StockMetaError {
    /// Settings file or environment could not be read
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Writing an export or printing output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Result could not be rendered as JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
