//! Styled blocks produced by the renderer before pagination.

use super::HeadingLevel;
use serde::{Deserialize, Serialize};

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Strong (bold) text
    pub strong: bool,
}

impl TextRun {
    /// Create a plain run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
        }
    }

    /// Create a strong run.
    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: true,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Plain text of a run sequence.
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// One entry of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Number written in the source text
    pub number: u32,

    /// Entry content
    pub runs: Vec<TextRun>,
}

/// A styled content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StyledBlock {
    /// A centered heading
    Heading {
        /// Heading weight
        level: HeadingLevel,
        /// Heading content
        runs: Vec<TextRun>,
    },

    /// A body paragraph
    Paragraph {
        /// Paragraph content
        runs: Vec<TextRun>,
    },

    /// A grouped numbered list
    List {
        /// Entries in order (never empty)
        entries: Vec<ListEntry>,
    },
}

impl StyledBlock {
    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, StyledBlock::Heading { .. })
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, StyledBlock::Paragraph { .. })
    }

    /// Check if this block is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, StyledBlock::List { .. })
    }

    /// Plain text of the block (list entries joined by newlines).
    pub fn plain_text(&self) -> String {
        match self {
            StyledBlock::Heading { runs, .. } | StyledBlock::Paragraph { runs } => plain_text(runs),
            StyledBlock::List { entries } => entries
                .iter()
                .map(|entry| plain_text(&entry.runs))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Ordered styled blocks ("story") awaiting pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledDocument {
    /// Blocks in reading order
    pub blocks: Vec<StyledBlock>,
}

impl StyledDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: StyledBlock) {
        self.blocks.push(block);
    }

    /// Check if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let runs = vec![
            TextRun::new("Hello "),
            TextRun::strong("world"),
            TextRun::new("!"),
        ];
        assert_eq!(plain_text(&runs), "Hello world!");
    }

    #[test]
    fn test_list_plain_text() {
        let block = StyledBlock::List {
            entries: vec![
                ListEntry {
                    number: 1,
                    runs: vec![TextRun::new("one")],
                },
                ListEntry {
                    number: 2,
                    runs: vec![TextRun::new("two")],
                },
            ],
        };
        assert!(block.is_list());
        assert_eq!(block.plain_text(), "one\ntwo");
    }
}
