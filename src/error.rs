//! Error types for contour operations.

use thiserror::Error;

/// Errors that can occur while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("malformed document tree: {0}")]
    MalformedTree(String),

    #[error("package conversion failed: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, Error>;
