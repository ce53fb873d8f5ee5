//! Textual structure summary consumed by prompt construction.

use std::fmt::Write;

use crate::model::{ElementKind, HeadingLevel, StructureMap};

/// Characters of list-item and paragraph text kept in the structure map.
const MAP_PREVIEW_CHARS: usize = 50;
/// Characters of list-item text kept in the list details.
const LIST_PREVIEW_CHARS: usize = 60;

/// Render a structure map into the fixed summary format.
pub fn serialize(map: &StructureMap) -> String {
    let counts = map.counts();
    let mut out = String::from("**DOCUMENT STRUCTURE ANALYSIS:**\n\n");

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Total document elements: {}", counts.total_elements);
    let _ = writeln!(out, "Headings found: {}", counts.headings);
    let _ = writeln!(out, "Numbered lists found: {}", counts.lists);
    let _ = writeln!(out, "Regular paragraphs: {}", counts.paragraphs);
    out.push('\n');

    out.push_str("**DOCUMENT STRUCTURE MAP:**\n");
    for element in map.elements() {
        let pos = element.position;
        let _ = match &element.kind {
            ElementKind::Heading { level, text } => {
                writeln!(out, "{}. {}: {}", pos, map_label(*level), text)
            }
            ElementKind::ListItem { number, text } => writeln!(
                out,
                "{}. LIST ITEM {}: {}...",
                pos,
                number,
                preview(text, MAP_PREVIEW_CHARS)
            ),
            ElementKind::Paragraph { text, .. } => writeln!(
                out,
                "{}. PARAGRAPH: {}...",
                pos,
                preview(text, MAP_PREVIEW_CHARS)
            ),
        };
    }
    out.push('\n');

    let mut headings = map.headings().peekable();
    if headings.peek().is_some() {
        out.push_str("**HEADINGS DETAILS:**\n");
        for (element, level) in headings {
            let _ = writeln!(
                out,
                "- Position {}: {} HEADING - \"{}\"",
                element.position,
                level.label(),
                element.text()
            );
        }
        out.push('\n');
    }

    if !map.lists().is_empty() {
        out.push_str("**NUMBERED LISTS DETAILS:**\n");
        for (i, list) in map.lists().iter().enumerate() {
            let _ = writeln!(
                out,
                "List {} (positions {}-{}):",
                i + 1,
                list.start_position,
                list.end_position
            );
            for item in &list.items {
                let _ = writeln!(
                    out,
                    "  {}. {}...",
                    item.number,
                    preview(&item.text, LIST_PREVIEW_CHARS)
                );
            }
            out.push('\n');
        }
    }

    out
}

fn map_label(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::Main => "MAIN HEADING",
        HeadingLevel::Section => "SECTION HEADING",
        HeadingLevel::Title => "TITLE/HEADING",
    }
}

/// First `max` characters of `text`, cut on a char boundary.
fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
