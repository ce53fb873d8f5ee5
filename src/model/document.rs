//! Document-level types.

use super::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rendered, paginated document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginatedDocument {
    /// Document metadata (title, producer, etc.)
    pub metadata: Metadata,

    /// Pages in the document
    pub pages: Vec<Page>,
}

impl PaginatedDocument {
    /// Create a new empty document.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata written into the PDF info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Producing application
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Metadata stamped with this crate as producer and the current time.
    pub fn now() -> Self {
        Self {
            title: None,
            producer: Some(format!("repdf {}", env!("CARGO_PKG_VERSION"))),
            created: Some(Utc::now()),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Creation date in PDF date format (`D:YYYYMMDDHHmmSS+00'00'`).
    pub fn pdf_creation_date(&self) -> Option<String> {
        self.created
            .map(|created| format!("D:{}+00'00'", created.format("%Y%m%d%H%M%S")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_new() {
        let doc = PaginatedDocument::new(Metadata::default());
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.get_page(0).is_none());
    }

    #[test]
    fn test_pdf_creation_date() {
        let metadata = Metadata {
            created: Some(Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            metadata.pdf_creation_date().as_deref(),
            Some("D:20240309140507+00'00'")
        );
        assert_eq!(Metadata::default().pdf_creation_date(), None);
    }

    #[test]
    fn test_metadata_now() {
        let metadata = Metadata::now().with_title("Report");
        assert_eq!(metadata.title.as_deref(), Some("Report"));
        assert!(metadata.producer.unwrap().starts_with("repdf "));
        assert!(metadata.created.is_some());
    }
}
