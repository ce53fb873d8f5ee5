//! Error types for repdf library.

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for repdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing or rebuilding documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a PDF nor readable text.
    #[error("Unknown file format: not a PDF or UTF-8 text")]
    UnknownFormat,

    /// The PDF header carries a version we do not understand.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error extracting text content from a PDF.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error assembling or saving the output PDF.
    #[error("PDF write error: {0}")]
    PdfWrite(String),

    /// A numbered-list marker matched but its digits do not fit a list number.
    #[error("Invalid list number in line {line:?}: {source}")]
    InvalidListNumber {
        /// The offending line
        line: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// The external editing step failed.
    #[error("Edit error: {0}")]
    Edit(String),

    /// Error during rendering (layout, pagination, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfWrite(err.to_string()),
        }
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}
