//! Prompt templates for the external editing step.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Placeholder for the user's editing request.
pub const USER_REQUEST_PLACEHOLDER: &str = "{user_request}";
/// Placeholder for the structure summary.
pub const STRUCTURE_INFO_PLACEHOLDER: &str = "{structure_info}";
/// Placeholder for the source text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// File name looked up in the working directory for a custom template.
pub const DEFAULT_TEMPLATE_FILE: &str = "gemini_prompt_template.txt";

const DEFAULT_TEMPLATE: &str = r#"You are a professional text processing assistant. The user has provided the following request:
"{user_request}"

Please process the following text according to the user's request:

{structure_info}

Original text:
{text}

Please provide only the processed and formatted text as your response."#;

/// A prompt template with `{user_request}`, `{structure_info}` and `{text}`
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template from a string.
    ///
    /// Any text is accepted; placeholders the template leaves out are simply
    /// not substituted.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        if !template.contains(TEXT_PLACEHOLDER) {
            log::warn!("Prompt template has no {} placeholder", TEXT_PLACEHOLDER);
        }
        Self { template }
    }

    /// Load a template from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(Self::new(content))
    }

    /// Load `path` if it exists, otherwise use the built-in template.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            log::debug!("Using prompt template {}", path.display());
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Raw template text.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Substitute the placeholders.
    ///
    /// Substitution is single-pass: placeholder-like text inside the
    /// substituted values is left alone. Doubled braces (`{{`, `}}`) produce
    /// one literal brace; other braces are kept as written.
    pub fn fill(&self, user_request: &str, structure_info: &str, text: &str) -> String {
        let mut out = String::with_capacity(
            self.template.len() + user_request.len() + structure_info.len() + text.len(),
        );
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find(['{', '}']) {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let (value, consumed) = if tail.starts_with("{{") {
                ("{", 2)
            } else if tail.starts_with("}}") {
                ("}", 2)
            } else if tail.starts_with(USER_REQUEST_PLACEHOLDER) {
                (user_request, USER_REQUEST_PLACEHOLDER.len())
            } else if tail.starts_with(STRUCTURE_INFO_PLACEHOLDER) {
                (structure_info, STRUCTURE_INFO_PLACEHOLDER.len())
            } else if tail.starts_with(TEXT_PLACEHOLDER) {
                (text, TEXT_PLACEHOLDER.len())
            } else {
                (&tail[..1], 1)
            };
            out.push_str(value);
            rest = &tail[consumed..];
        }
        out.push_str(rest);
        out
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}
