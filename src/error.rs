/// Error types shared by every part of the voting tool
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading or saving review data
#[derive(Debug, Error)]
pub enum VoteError {
    /// Filesystem access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file could not be parsed or written
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A frame could not be decoded
    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The configured data root is not a directory
    #[error("data folder not found: {0}")]
    DataRootMissing(PathBuf),

    /// Another process already holds the instance lock
    #[error("another instance is already running")]
    AlreadyRunning,

    /// A role name that does not belong to the selected category
    #[error("role '{name}' is not part of category '{category}'")]
    UnknownRole { category: String, name: String },
}

impl VoteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VoteError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        VoteError::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VoteError>;
