use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read issue file {path:?}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("issue file {path:?} is not a JSON object with a string `body`")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("label {label:?} is not a valid pattern")]
    InvalidLabel {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to write {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV record")]
    Encode(#[from] csv::Error),

    #[error("invalid settings")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, FormError>;
