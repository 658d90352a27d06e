//! Errors reported to the user before any output is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    #[error("Expected a PDF file as the first argument.")]
    MissingArgument,

    #[error("Argument '{}' not a PDF file.", .0.display())]
    InvalidInputFile(PathBuf),

    #[error("Expected integer in page ranges, got '{0}'.")]
    InvalidNumber(String),

    #[error("Invalid page range {first}-{last}, pages are numbered from 1.")]
    ZeroPage { first: u64, last: u64 },

    #[error("Invalid page range {first}-{last}, start must be smaller or equal to end.")]
    InvalidRange { first: u64, last: u64 },

    #[error("Invalid page range {first}-{last}, the PDF has only {total} pages.")]
    OutOfBounds { first: u64, last: u64, total: u32 },
}
