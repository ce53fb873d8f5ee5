//! The external editing step.
//!
//! A [`TextEditor`] receives the source text, the user's instruction and a
//! prompt built from the structure summary, and returns edited marker text
//! for the renderer. Hosted model clients live outside the library and
//! implement this trait.

use crate::error::Result;
use crate::model::StructureMap;
use crate::render::{serialize, PromptTemplate};

/// Everything an editor needs for one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// What the user asked for
    pub instruction: String,

    /// Text being edited
    pub source_text: String,

    /// Structure summary of the source text
    pub structure_summary: String,

    /// Filled prompt template
    pub prompt: String,
}

impl EditRequest {
    /// Build a request, summarizing the structure and filling the template.
    pub fn new(
        instruction: impl Into<String>,
        source_text: impl Into<String>,
        structure: &StructureMap,
        template: &PromptTemplate,
    ) -> Self {
        let instruction = instruction.into();
        let source_text = source_text.into();
        let structure_summary = serialize(structure);
        let prompt = template.fill(&instruction, &structure_summary, &source_text);
        Self {
            instruction,
            source_text,
            structure_summary,
            prompt,
        }
    }
}

/// Trait for text editors.
///
/// Failures should be reported as [`crate::Error::Edit`].
pub trait TextEditor: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Produce edited marker text.
    fn edit(&self, request: &EditRequest) -> Result<String>;
}

/// Editor that returns the source text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEditor;

impl TextEditor for PassthroughEditor {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn edit(&self, request: &EditRequest) -> Result<String> {
        Ok(request.source_text.clone())
    }
}

/// Editor backed by a closure.
pub struct FnEditor<F> {
    name: String,
    f: F,
}

impl<F> FnEditor<F>
where
    F: Fn(&EditRequest) -> Result<String> + Send + Sync,
{
    /// Wrap a closure as an editor.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> TextEditor for FnEditor<F>
where
    F: Fn(&EditRequest) -> Result<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn edit(&self, request: &EditRequest) -> Result<String> {
        (self.f)(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parser::{classify, segment};

    fn request(text: &str) -> EditRequest {
        let map = classify(&segment(text)).unwrap();
        EditRequest::new("Shorten it", text, &map, &PromptTemplate::default())
    }

    #[test]
    fn test_request_carries_summary_and_prompt() {
        let req = request("# Title\n\nBody.");
        assert!(req
            .structure_summary
            .starts_with("**DOCUMENT STRUCTURE ANALYSIS:**"));
        assert!(req.prompt.contains("\"Shorten it\""));
        assert!(req.prompt.contains(&req.structure_summary));
        assert!(req.prompt.contains("Original text:\n# Title\n\nBody."));
    }

    #[test]
    fn test_passthrough() {
        let req = request("Body.");
        assert_eq!(PassthroughEditor.edit(&req).unwrap(), "Body.");
        assert_eq!(PassthroughEditor.name(), "passthrough");
    }

    #[test]
    fn test_fn_editor() {
        let upper = FnEditor::new("upper", |req: &EditRequest| {
            Ok(req.source_text.to_uppercase())
        });
        assert_eq!(upper.edit(&request("quiet")).unwrap(), "QUIET");

        let failing = FnEditor::new("down", |_: &EditRequest| {
            Err(Error::Edit("service unavailable".to_string()))
        });
        assert!(matches!(failing.edit(&request("x")), Err(Error::Edit(_))));
    }
}
