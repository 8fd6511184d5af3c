use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the [Loader](crate::loader::Loader).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error opening file {}: {source}", path.to_string_lossy())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row at line {line}: {reason}")]
    Malformed {
        line: u64,
        reason: String,
    },

    #[error("error reading input: {source}")]
    Read {
        #[source]
        source: csv::Error,
    },
}
