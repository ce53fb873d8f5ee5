//! # repdf
//!
//! Recover document structure from extracted text and rebuild styled,
//! paginated PDFs from edited marker text.
//!
//! Text is split into blocks on blank lines, each block is classified as a
//! heading, numbered list item or paragraph, and contiguous list items are
//! grouped into lists. The resulting [`StructureMap`] is summarized for an
//! external editor; the editor's markdown-like reply is laid out again with
//! the same rules and written as PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use repdf::{analyze, render};
//!
//! fn main() -> repdf::Result<()> {
//!     let map = analyze("# Title\n\nHello world.\n\n1. First\n2. Second")?;
//!     println!("{}", render::serialize(&map));
//!
//!     let pdf = render::render_pdf("# Title\n\nHello **world**.", &render::RenderOptions::default())?;
//!     std::fs::write("out.pdf", pdf)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structure recovery**: Headings (explicit and all-caps), numbered lists, paragraphs
//! - **Structure summary**: Fixed-format report for prompt construction
//! - **PDF output**: Justified body text, centered headings, grouped lists, bold emphasis
//! - **Parallel processing**: Uses Rayon to analyze many documents at once
//! - **Cleanup pipeline**: Optional normalization of extracted text

pub mod detect;
pub mod edit;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use edit::{EditRequest, FnEditor, PassthroughEditor, TextEditor};
pub use error::{Error, Result};
pub use extract::{extract_text, extract_text_from_bytes};
pub use model::{
    ElementKind, HeadingLevel, Metadata, NumberedItem, NumberedList, Page, PaginatedDocument,
    StructuralElement, StructureCounts, StructureMap, StyledBlock, StyledDocument, TextRun,
};
pub use parser::{
    analyze_with_options, CleanupOptions, CleanupPipeline, CleanupPreset, ImplicitHeadingConfig,
    ParseOptions,
};
pub use render::{
    render_pdf, JsonFormat, ListNumbering, PageSize, PromptTemplate, RenderOptions,
};

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use rayon::prelude::*;

/// Analyze text with default options.
///
/// # Example
///
/// ```
/// use repdf::analyze;
///
/// let map = analyze("# Title\n\n1. One\n2. Two").unwrap();
/// assert_eq!(map.counts().headings, 1);
/// assert_eq!(map.lists().len(), 1);
/// ```
pub fn analyze(text: &str) -> Result<StructureMap> {
    analyze_with_options(text, &ParseOptions::default())
}

/// Analyze many texts in parallel.
///
/// Each text gets its own classification pass; results keep input order.
pub fn analyze_many<S>(texts: &[S], options: &ParseOptions) -> Vec<Result<StructureMap>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| analyze_with_options(text.as_ref(), options))
        .collect()
}

/// Analyze a file (PDF or UTF-8 text).
pub fn analyze_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<StructureMap> {
    let text = extract_text(path)?;
    analyze_with_options(&text, options)
}

/// Builder tying analysis, editing and rendering together.
///
/// # Example
///
/// ```no_run
/// use repdf::{CleanupPreset, PageSize, Repdf};
///
/// let rebuilt = Repdf::new()
///     .with_cleanup(CleanupPreset::Standard)
///     .with_page_size(PageSize::A4)
///     .rebuild_file("input.pdf", "Make it more formal")?;
/// rebuilt.save("output.pdf")?;
/// # Ok::<(), repdf::Error>(())
/// ```
pub struct Repdf {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    template: PromptTemplate,
    editor: Box<dyn TextEditor>,
}

impl Repdf {
    /// Create a builder with default options and the pass-through editor.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            template: PromptTemplate::default(),
            editor: Box::new(PassthroughEditor),
        }
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.parse_options = self.parse_options.with_cleanup_preset(preset);
        self
    }

    /// Set output page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.render_options = self.render_options.with_page_size(size);
        self
    }

    /// Set the prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Set the editor.
    pub fn with_editor<E: TextEditor + 'static>(mut self, editor: E) -> Self {
        self.editor = Box::new(editor);
        self
    }

    /// Apply configured cleanup.
    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.parse_options.cleanup {
            Some(ref cleanup) => Cow::Owned(CleanupPipeline::new(cleanup.clone()).process(text)),
            None => Cow::Borrowed(text),
        }
    }

    /// Analyze text.
    pub fn analyze(&self, text: &str) -> Result<StructureMap> {
        analyze_with_options(text, &self.parse_options)
    }

    /// Clean and analyze text, then build the edit request.
    fn prepare_request(&self, text: &str, instruction: &str) -> Result<(StructureMap, EditRequest)> {
        let text = self.prepare(text);
        let options = ParseOptions {
            cleanup: None,
            ..self.parse_options.clone()
        };
        let structure = analyze_with_options(&text, &options)?;
        let request = EditRequest::new(instruction, text.into_owned(), &structure, &self.template);
        Ok((structure, request))
    }

    /// Build the edit request for text without running the editor.
    pub fn edit_request(&self, text: &str, instruction: &str) -> Result<EditRequest> {
        self.prepare_request(text, instruction)
            .map(|(_, request)| request)
    }

    /// Analyze, edit and render text.
    pub fn rebuild(&self, text: &str, instruction: &str) -> Result<Rebuilt> {
        let (structure, request) = self.prepare_request(text, instruction)?;

        log::info!(
            "Editing {} element(s) with {}",
            structure.len(),
            self.editor.name()
        );
        let edited_text = self.editor.edit(&request)?;
        // Implicit headings are rendered with the thresholds they were classified with.
        let render_options = self
            .render_options
            .clone()
            .with_implicit_heading_config(self.parse_options.implicit_heading);
        let document = render::render(&edited_text, &render_options)?;

        Ok(Rebuilt {
            structure,
            edited_text,
            document,
        })
    }

    /// Read a file (PDF or text), then analyze, edit and render it.
    pub fn rebuild_file<P: AsRef<Path>>(&self, path: P, instruction: &str) -> Result<Rebuilt> {
        let text = extract_text(path)?;
        self.rebuild(&text, instruction)
    }
}

impl Default for Repdf {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an analyze, edit and render pass.
#[derive(Debug, Clone)]
pub struct Rebuilt {
    /// Structure of the source text
    pub structure: StructureMap,

    /// Text returned by the editor
    pub edited_text: String,

    /// Rendered pages
    pub document: PaginatedDocument,
}

impl Rebuilt {
    /// Encode the rendered pages as PDF.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>> {
        render::to_pdf_bytes(&self.document)
    }

    /// Write the rendered pages as a PDF file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_pdf_bytes()?)?;
        Ok(())
    }

    /// Structure of the edited text.
    pub fn edited_structure(&self) -> Result<StructureMap> {
        analyze(&self.edited_text)
    }
}
