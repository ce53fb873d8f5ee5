//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormat {
    /// A PDF with the given header version (e.g., "1.7")
    Pdf {
        /// Version from the `%PDF-x.y` header
        version: String,
    },
    /// Anything without a PDF header, read as UTF-8 text
    Text,
}

impl InputFormat {
    /// Check if this is a PDF.
    pub fn is_pdf(&self) -> bool {
        matches!(self, InputFormat::Pdf { .. })
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Pdf { version } => write!(f, "PDF {}", version),
            InputFormat::Text => write!(f, "text"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Detect the format of a file from its first bytes.
///
/// # Example
/// ```no_run
/// use repdf::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.pdf").unwrap();
/// println!("Input: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format from a byte prefix.
///
/// Data starting with `%PDF-` must carry a well-formed version; anything
/// else is treated as text.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    if !data.starts_with(PDF_MAGIC) {
        return Ok(InputFormat::Text);
    }
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(InputFormat::Pdf { version })
}

/// Check if a version string is valid ("1.0" to "2.0" shape).
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(InputFormat::Pdf { .. }))
}
