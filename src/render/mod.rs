//! Rendering: structure summaries and prompts for the editing step, and
//! marker text back to paginated PDF output.

mod inline;
mod json;
mod layout;
mod markdown;
pub mod metrics;
mod options;
mod paginate;
mod pdf;
mod prompt;
mod summary;

pub use inline::parse_inline;
pub use json::{from_json, to_json, JsonFormat};
pub use layout::layout;
pub use markdown::to_markdown;
pub use options::{BlockStyle, ListNumbering, Margins, PageSize, RenderOptions};
pub use paginate::paginate;
pub use pdf::{encode_win_ansi, to_pdf_bytes, write_pdf};
pub use prompt::{
    PromptTemplate, DEFAULT_TEMPLATE_FILE, STRUCTURE_INFO_PLACEHOLDER, TEXT_PLACEHOLDER,
    USER_REQUEST_PLACEHOLDER,
};
pub use summary::serialize;

use crate::error::Result;
use crate::model::PaginatedDocument;

/// Lay out and paginate marker text.
pub fn render(text: &str, options: &RenderOptions) -> Result<PaginatedDocument> {
    let story = layout(text, options)?;
    log::debug!("render: {} styled block(s)", story.len());
    Ok(paginate(&story, options))
}

/// Render marker text straight to PDF bytes.
pub fn render_pdf(text: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    to_pdf_bytes(&render(text, options)?)
}
