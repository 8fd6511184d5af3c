use std::str::FromStr;

use anyhow::anyhow;

/// What the [Loader](crate::loader::Loader) does with a data row that does not have exactly
/// nine fields or that the CSV parser rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedRows {
    /// Stop reading and keep the records parsed so far. Nothing is reported above debug level.
    #[default]
    Truncate,
    /// Drop the row with a warning and continue with the next one.
    Skip,
    /// Fail the load with [LoadError::Malformed](crate::error::LoadError::Malformed).
    Fail,
}

impl FromStr for MalformedRows {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(MalformedRows::Truncate),
            "skip" => Ok(MalformedRows::Skip),
            "fail" => Ok(MalformedRows::Fail),
            _ => Err(anyhow!("Unknown malformed rows policy: {}, expected truncate, skip or fail", s)),
        }
    }
}
