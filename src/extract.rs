//! Reading input files as text.

use std::fs;
use std::path::Path;

use crate::detect::{detect_format_from_bytes, InputFormat};
use crate::error::{Error, Result};

const UTF8_BOM: &str = "\u{FEFF}";

/// Read a file as text, extracting from PDF when it has a PDF header.
///
/// # Example
///
/// ```no_run
/// use repdf::extract::extract_text;
///
/// let text = extract_text("report.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    log::debug!("Read {} bytes from {}", data.len(), path.display());
    extract_text_from_bytes(&data)
}

/// Text of in-memory input.
///
/// PDF input goes through the PDF text extractor; anything else must be
/// valid UTF-8 (a leading byte-order mark is dropped).
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    match detect_format_from_bytes(data)? {
        InputFormat::Pdf { version } => {
            log::debug!("Extracting text from PDF {}", version);
            let text = pdf_extract::extract_text_from_mem(data)?;
            Ok(text)
        }
        InputFormat::Text => {
            let text = std::str::from_utf8(data).map_err(|e| Error::Encoding(e.to_string()))?;
            Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
        }
    }
}
