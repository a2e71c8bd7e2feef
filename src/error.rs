use std::io;
use thiserror::Error;

/// Failures surfaced by the path list, its sources and the render pipelines.
#[derive(Debug, Error)]
pub enum PathsError {
    /// Input was not a well-formed JSON array of strings
    #[error("failed to decode path list: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode path list: {0}")]
    Encode(#[source] serde_json::Error),

    /// Opening, reading or writing `target` failed
    #[error("I/O error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Environment variable holds bytes that are not valid UTF-8
    #[error("environment variable ${var} is not valid UTF-8")]
    NotUnicode { var: String },

    /// Index used by `remove` or `swap` does not name an entry
    #[error("index {index} is out of bounds for a list of {len} entries")]
    Bounds { index: i64, len: usize },
}

impl PathsError {
    pub(crate) fn io(target: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }
}

pub type Result<T, E = PathsError> = std::result::Result<T, E>;
