//! Transit source error types.

use std::path::PathBuf;

use super::ConversionError;

/// Errors from loading upstream transit data.
#[derive(Debug, thiserror::Error)]
pub enum WmataError {
    /// No recorded response for the requested resource
    #[error("no data for {0}")]
    NotFound(String),

    /// Reading a recorded response failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recorded response wasn't valid JSON for its endpoint
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but held an invalid record
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
