use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkylistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file does not exist: {0}")]
    CatalogNotFound(PathBuf),

    #[error("selection capacity must be at least 1 (got {0})")]
    InvalidCapacity(usize),

    #[error("no qualifying stars; refusing to render an empty result")]
    EmptyResult,
}

pub type Result<T> = std::result::Result<T, SkylistError>;

/// Failure while parsing a single catalog row.
///
/// Always recoverable: callers skip the row and keep streaming. One bad
/// line never aborts the scan of the remaining catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("row has {found} fields, need at least {required}")]
    MalformedRow { found: usize, required: usize },

    #[error("column {column} is not a finite number: {value:?}")]
    InvalidNumber { column: usize, value: String },
}
