//! Classified structural elements.

use serde::{Deserialize, Serialize};

/// Heading weight assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// `# ` marker
    Main,
    /// `## ` marker
    Section,
    /// Short all-caps block without a marker
    Title,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::Main => 1,
            HeadingLevel::Section => 2,
            HeadingLevel::Title => 3,
        }
    }

    /// Level for a numeric value, if it is 1-3.
    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::Main),
            2 => Some(HeadingLevel::Section),
            3 => Some(HeadingLevel::Title),
            _ => None,
        }
    }

    /// Upper-case label used in structure summaries.
    pub fn label(self) -> &'static str {
        match self {
            HeadingLevel::Main => "MAIN",
            HeadingLevel::Section => "SECTION",
            HeadingLevel::Title => "TITLE",
        }
    }
}

/// What a classified block turned out to be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// A heading with its marker stripped
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Heading text
        text: String,
    },

    /// One numbered list item
    ListItem {
        /// Number written before the marker dot
        number: u32,
        /// Text after the marker
        text: String,
    },

    /// Any other block
    Paragraph {
        /// Block content, line breaks preserved
        text: String,
        /// Whether the text contains a `**…**` pair
        has_emphasis: bool,
    },
}

impl ElementKind {
    /// Create a heading.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        ElementKind::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a list item.
    pub fn list_item(number: u32, text: impl Into<String>) -> Self {
        ElementKind::ListItem {
            number,
            text: text.into(),
        }
    }

    /// Create a paragraph.
    pub fn paragraph(text: impl Into<String>, has_emphasis: bool) -> Self {
        ElementKind::Paragraph {
            text: text.into(),
            has_emphasis,
        }
    }

    /// Text content regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            ElementKind::Heading { text, .. }
            | ElementKind::ListItem { text, .. }
            | ElementKind::Paragraph { text, .. } => text,
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, ElementKind::Heading { .. })
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, ElementKind::ListItem { .. })
    }

    /// Check if this is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, ElementKind::Paragraph { .. })
    }
}

/// A classified element with its emission position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralElement {
    /// 1-based emission index
    pub position: u32,

    /// Index of the source block (0-based)
    pub block_index: usize,

    /// Classification result
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl StructuralElement {
    /// Create a new element.
    pub fn new(position: u32, block_index: usize, kind: ElementKind) -> Self {
        Self {
            position,
            block_index,
            kind,
        }
    }

    /// Text content.
    pub fn text(&self) -> &str {
        self.kind.text()
    }

    /// Heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<HeadingLevel> {
        match self.kind {
            ElementKind::Heading { level, .. } => Some(level),
            _ => None,
        }
    }
}
