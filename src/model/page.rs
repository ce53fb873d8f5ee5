//! Page-level types of a paginated document.

use serde::{Deserialize, Serialize};

/// Built-in font faces used for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    /// Helvetica
    #[default]
    Regular,
    /// Helvetica-Bold
    Bold,
}

impl FontFace {
    /// PostScript name of the standard Type1 font.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used inside page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    /// Face for a strong or plain run.
    pub fn for_strong(strong: bool) -> Self {
        if strong {
            FontFace::Bold
        } else {
            FontFace::Regular
        }
    }
}

/// A word (or word fragment) placed on a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// Left edge in points from the page's left edge
    pub x: f32,

    /// Width in points
    pub width: f32,

    /// The text
    pub text: String,

    /// Font face
    pub face: FontFace,

    /// Font size in points
    pub size: f32,
}

impl PlacedWord {
    /// Right edge in points.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A line of text at a fixed baseline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    /// Baseline in points from the page's bottom edge
    pub baseline: f32,

    /// Words left to right
    pub words: Vec<PlacedWord>,
}

impl PlacedLine {
    /// Left edge of the first word.
    pub fn left(&self) -> Option<f32> {
        self.words.first().map(|w| w.x)
    }

    /// Right edge of the last word.
    pub fn right(&self) -> Option<f32> {
        self.words.last().map(|w| w.right())
    }

    /// Line text with words separated by single spaces.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        let mut prev_right: Option<f32> = None;
        for word in &self.words {
            // Fragments of one word are placed edge to edge.
            if let Some(right) = prev_right {
                if word.x - right > 0.01 {
                    text.push(' ');
                }
            }
            text.push_str(&word.text);
            prev_right = Some(word.right());
        }
        text
    }
}

/// A single output page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Lines top to bottom
    pub lines: Vec<PlacedLine>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0)
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, 595.0, 842.0)
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: PlacedLine) {
        self.lines.push(line);
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get plain text content of the page, one line per row.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(x: f32, width: f32, text: &str) -> PlacedWord {
        PlacedWord {
            x,
            width,
            text: text.to_string(),
            face: FontFace::Regular,
            size: 12.0,
        }
    }

    #[test]
    fn test_page_letter_a4() {
        let letter = Page::letter(1);
        assert_eq!(letter.width, 612.0);
        assert_eq!(letter.height, 792.0);
        assert!(letter.is_empty());

        let a4 = Page::a4(2);
        assert_eq!(a4.number, 2);
        assert_eq!(a4.width, 595.0);
    }

    #[test]
    fn test_line_plain_text_joins_fragments() {
        let line = PlacedLine {
            baseline: 700.0,
            words: vec![
                word(72.0, 20.0, "Say"),
                word(95.0, 30.0, "bold"),
                word(125.0, 3.0, ","),
                word(131.0, 20.0, "ok"),
            ],
        };
        assert_eq!(line.plain_text(), "Say bold, ok");
        assert_eq!(line.left(), Some(72.0));
        assert_eq!(line.right(), Some(151.0));
    }

    #[test]
    fn test_font_faces() {
        assert_eq!(FontFace::for_strong(true).base_font(), "Helvetica-Bold");
        assert_eq!(FontFace::for_strong(false).resource_name(), "F1");
    }
}
