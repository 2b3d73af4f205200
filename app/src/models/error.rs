use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type MemResult<T> = Result<T, MemError>;

#[derive(Debug, Error)]
pub enum MemError {
    #[error("failed to read manifest {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse manifest {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid size {value:?}: {reason}")]
    Size { value: String, reason: &'static str },

    #[error("trusted file uri {0:?} has no scheme separator")]
    InvalidUri(String),

    #[error("failed to stat trusted file {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MemError {
    pub(crate) fn size(value: &str, reason: &'static str) -> Self {
        MemError::Size {
            value: value.to_string(),
            reason,
        }
    }
}
