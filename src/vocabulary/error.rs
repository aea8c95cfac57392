use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned while reading the persisted word-pair list.
pub enum VocabularyError {
    /// The pair file could not be read.
    #[error("failed to read vocabulary file '{path}': {source}")]
    Io {
        /// File path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pair file is not a JSON array.
    #[error("failed to decode vocabulary file '{path}': {source}")]
    Decode {
        /// File path.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
