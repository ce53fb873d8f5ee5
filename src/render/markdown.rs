//! Marker text reconstruction from a structure map.

use crate::model::{ElementKind, HeadingLevel, StructureMap};
use crate::parser::rules::{MAIN_HEADING_MARKER, SECTION_HEADING_MARKER};

/// Convert a structure map back into marker text.
///
/// Every element becomes its own block. Level-3 headings are written as
/// their plain text, which classifies as a heading again when it is still
/// short and upper-case. List items are written one per block; contiguous
/// blocks regroup into the same list.
pub fn to_markdown(map: &StructureMap) -> String {
    map.elements()
        .iter()
        .map(|element| match &element.kind {
            ElementKind::Heading { level, text } => match level {
                HeadingLevel::Main => format!("{}{}", MAIN_HEADING_MARKER, text),
                HeadingLevel::Section => format!("{}{}", SECTION_HEADING_MARKER, text),
                HeadingLevel::Title => text.clone(),
            },
            ElementKind::ListItem { number, text } => format!("{}. {}", number, text),
            ElementKind::Paragraph { text, .. } => text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{classify, segment};

    #[test]
    fn test_to_markdown() {
        let map = classify(&segment(
            "# Title\n\nINTRO\n\nSteps:\n1. a\n2. b\n\n## Notes\n\nSome **bold** text\nacross lines.",
        ))
        .unwrap();
        assert_eq!(
            to_markdown(&map),
            "# Title\n\nINTRO\n\n1. a\n\n2. b\n\n## Notes\n\nSome **bold** text\nacross lines."
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(to_markdown(&StructureMap::default()), "");
    }
}
