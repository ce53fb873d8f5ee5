//! Optional normalization of extracted text before segmentation.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static PAGE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-–—]?[ \t]*\d+[ \t]*[-–—]?[ \t]*$").unwrap());
static HYPHENATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])-[ \t]*\n[ \t]*([a-z])").unwrap());

const LIGATURES: &[(&str, &str)] = &[
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB05}", "st"),
    ("\u{FB06}", "st"),
];

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Unicode NFC normalization only
    Minimal,
    /// NFC + ligatures + replacement chars + page numbers + hyphenation
    #[default]
    Standard,
}

/// Options for text cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Replace ligature code points (ﬁ, ﬂ, …) with their letters
    pub fix_ligatures: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Remove lines holding only a page number
    pub remove_page_numbers: bool,

    /// Join words hyphenated across a line break
    pub fix_hyphenation: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: false,
            remove_replacement_char: false,
            remove_page_numbers: false,
            fix_hyphenation: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            remove_replacement_char: true,
            remove_page_numbers: true,
            fix_hyphenation: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
#[derive(Debug, Clone, Default)]
pub struct CleanupPipeline {
    options: CleanupOptions,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    ///
    /// Line structure is kept apart from the removals and joins requested,
    /// so blank-line boundaries survive for segmentation.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in LIGATURES {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.remove_page_numbers {
            result = PAGE_NUMBER_RE.replace_all(&result, "").into_owned();
        }

        if self.options.fix_hyphenation {
            result = HYPHENATION_RE.replace_all(&result, "$1$2").into_owned();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_normalization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        let decomposed = "cafe\u{0301}";
        assert_eq!(pipeline.process(decomposed), "caf\u{00E9}");
    }

    #[test]
    fn test_ligature_fix() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("ﬁnding ﬂowers"), "finding flowers");
    }

    #[test]
    fn test_remove_replacement_char() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("Hello\u{FFFD}World"), "HelloWorld");
    }

    #[test]
    fn test_page_number_lines_removed() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        let result = pipeline.process("End of page.\n- 12 -\nNext page.\n7\n1. Item");
        assert!(!result.contains("12"));
        assert!(!result.contains("\n7\n"));
        assert!(result.contains("1. Item"));
    }

    #[test]
    fn test_hyphenation_requires_line_break() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(
            pipeline.process("This is infor-\nmation."),
            "This is information."
        );
        assert_eq!(pipeline.process("state-of-the-art"), "state-of-the-art");
    }

    #[test]
    fn test_blank_lines_survive() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        let result = pipeline.process("# Title\n\nBody text.");
        assert_eq!(result, "# Title\n\nBody text.");
    }
}
