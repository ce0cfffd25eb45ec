use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version segment '{segment}': {source}")]
    InvalidSegment {
        segment: String,
        source: ParseIntError,
    },
}
