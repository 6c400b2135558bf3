//! Error types for the deidentification engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid masking policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid pattern for info type {name}: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown info type: {0}")]
    UnknownInfoType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
