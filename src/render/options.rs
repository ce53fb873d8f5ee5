//! Rendering options and page geometry.

use crate::model::{Alignment, HeadingLevel};
use crate::parser::ImplicitHeadingConfig;

/// Options for rendering marker text into pages.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page dimensions
    pub page_size: PageSize,

    /// Page margins in points
    pub margins: Margins,

    /// Style for `# ` headings
    pub heading1: BlockStyle,

    /// Style for `## ` headings
    pub heading2: BlockStyle,

    /// Style for implicit (all-caps) headings
    pub heading3: BlockStyle,

    /// Style for body paragraphs
    pub body: BlockStyle,

    /// Style for list entries
    pub list_item: BlockStyle,

    /// How list labels are numbered
    pub list_numbering: ListNumbering,

    /// Render short all-caps blocks as level-3 headings
    pub detect_implicit_headings: bool,

    /// Thresholds for implicit headings, matching the classifier's
    pub implicit_heading: ImplicitHeadingConfig,

    /// Document title for the output metadata
    pub title: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the list numbering mode.
    pub fn with_list_numbering(mut self, numbering: ListNumbering) -> Self {
        self.list_numbering = numbering;
        self
    }

    /// Enable or disable implicit heading rendering.
    pub fn with_implicit_headings(mut self, detect: bool) -> Self {
        self.detect_implicit_headings = detect;
        self
    }

    /// Set implicit heading thresholds.
    pub fn with_implicit_heading_config(mut self, config: ImplicitHeadingConfig) -> Self {
        self.implicit_heading = config;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Style for a heading level.
    pub fn heading_style(&self, level: HeadingLevel) -> &BlockStyle {
        match level {
            HeadingLevel::Main => &self.heading1,
            HeadingLevel::Section => &self.heading2,
            HeadingLevel::Title => &self.heading3,
        }
    }

    /// Width available to text between the margins.
    pub fn content_width(&self) -> f32 {
        let (width, _) = self.page_size.dimensions();
        width - self.margins.left - self.margins.right
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margins: Margins::uniform(72.0),
            heading1: BlockStyle {
                font_size: 18.0,
                leading: 22.0,
                alignment: Alignment::Center,
                space_before: 12.0,
                space_after: 12.0,
                left_indent: 0.0,
                bold: true,
            },
            heading2: BlockStyle {
                font_size: 16.0,
                leading: 20.0,
                alignment: Alignment::Center,
                space_before: 10.0,
                space_after: 10.0,
                left_indent: 0.0,
                bold: true,
            },
            heading3: BlockStyle {
                font_size: 14.0,
                leading: 18.0,
                alignment: Alignment::Center,
                space_before: 8.0,
                space_after: 8.0,
                left_indent: 0.0,
                bold: true,
            },
            body: BlockStyle {
                font_size: 12.0,
                leading: 16.0,
                alignment: Alignment::Justify,
                space_before: 6.0,
                space_after: 6.0,
                left_indent: 0.0,
                bold: false,
            },
            list_item: BlockStyle {
                font_size: 12.0,
                leading: 16.0,
                alignment: Alignment::Left,
                space_before: 2.0,
                space_after: 2.0,
                left_indent: 20.0,
                bold: false,
            },
            list_numbering: ListNumbering::Sequential,
            detect_implicit_headings: false,
            implicit_heading: ImplicitHeadingConfig::default(),
            title: None,
        }
    }
}

/// Page dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// 8.5 x 11 inches
    #[default]
    Letter,
    /// 210 x 297 mm
    A4,
    /// Custom width and height in points
    Custom {
        /// Width in points
        width: f32,
        /// Height in points
        height: f32,
    },
}

impl PageSize {
    /// (width, height) in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }

    /// Parse a page size name ("letter", "a4").
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(format!("Unknown page size: {}", other)),
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
}

impl Margins {
    /// Same margin on all sides.
    pub fn uniform(points: f32) -> Self {
        Self {
            top: points,
            right: points,
            bottom: points,
            left: points,
        }
    }
}

/// Typography for one kind of block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    /// Font size in points
    pub font_size: f32,
    /// Distance between baselines in points
    pub leading: f32,
    /// Horizontal alignment
    pub alignment: Alignment,
    /// Space above the block (dropped at the top of a page)
    pub space_before: f32,
    /// Space below the block
    pub space_after: f32,
    /// Left indent of the text in points
    pub left_indent: f32,
    /// Set the whole block in the bold face
    pub bold: bool,
}

/// How list labels are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListNumbering {
    /// 1, 2, 3, … per list group
    #[default]
    Sequential,
    /// The numbers written in the source text
    Source,
}
