//! Structure map: the complete classification of one document.

use super::{ElementKind, HeadingLevel, StructuralElement};
use serde::{Deserialize, Serialize};

/// One item of a numbered list group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedItem {
    /// Number written in the source
    pub number: u32,

    /// Item text
    pub text: String,

    /// Position of the corresponding element
    pub position: u32,
}

/// A maximal contiguous run of list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedList {
    /// Items in emission order (never empty)
    pub items: Vec<NumberedItem>,

    /// Position of the first item
    pub start_position: u32,

    /// Position of the last item
    pub end_position: u32,
}

impl NumberedList {
    /// Build a list from buffered items. Returns `None` for an empty buffer.
    pub fn from_items(items: Vec<NumberedItem>) -> Option<Self> {
        let start_position = items.first()?.position;
        let end_position = items.last()?.position;
        Some(Self {
            items,
            start_position,
            end_position,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for lists built with [`NumberedList::from_items`].
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Element counts by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureCounts {
    /// Headings of any level
    pub headings: usize,

    /// Numbered list groups
    pub lists: usize,

    /// List items across all groups
    pub list_items: usize,

    /// Paragraphs
    pub paragraphs: usize,

    /// All emitted elements
    pub total_elements: usize,
}

/// Ordered classification of a document plus derived list groupings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureMap {
    elements: Vec<StructuralElement>,
    lists: Vec<NumberedList>,
    counts: StructureCounts,
}

impl StructureMap {
    /// Assemble a map from classifier output.
    pub(crate) fn new(elements: Vec<StructuralElement>, lists: Vec<NumberedList>) -> Self {
        let mut counts = StructureCounts {
            lists: lists.len(),
            total_elements: elements.len(),
            ..Default::default()
        };
        for element in &elements {
            match element.kind {
                ElementKind::Heading { .. } => counts.headings += 1,
                ElementKind::ListItem { .. } => counts.list_items += 1,
                ElementKind::Paragraph { .. } => counts.paragraphs += 1,
            }
        }
        Self {
            elements,
            lists,
            counts,
        }
    }

    /// All elements in position order.
    pub fn elements(&self) -> &[StructuralElement] {
        &self.elements
    }

    /// Numbered list groups in document order.
    pub fn lists(&self) -> &[NumberedList] {
        &self.lists
    }

    /// Element counts.
    pub fn counts(&self) -> StructureCounts {
        self.counts
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at a 1-based position.
    pub fn get(&self, position: u32) -> Option<&StructuralElement> {
        if position == 0 {
            return None;
        }
        self.elements.get((position - 1) as usize)
    }

    /// Iterate over headings with their levels.
    pub fn headings(&self) -> impl Iterator<Item = (&StructuralElement, HeadingLevel)> {
        self.elements
            .iter()
            .filter_map(|el| el.heading_level().map(|level| (el, level)))
    }

    /// Iterate over paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &StructuralElement> {
        self.elements.iter().filter(|el| el.kind.is_paragraph())
    }

    /// The list group containing a position, if any.
    pub fn list_at(&self, position: u32) -> Option<&NumberedList> {
        self.lists
            .iter()
            .find(|list| (list.start_position..=list.end_position).contains(&position))
    }
}
