use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    // Language resources
    #[error("Failed to read resource bundle {path}: {source}")]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource bundle is not valid JSON: {0}")]
    ResourceParse(#[source] serde_json::Error),

    #[error("Invalid resource bundle: {0}")]
    InvalidResource(String),

    // Policy
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown sentiment label: {0}")]
    UnknownLabel(String),

    // Pass-through from dependencies
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
