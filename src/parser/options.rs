//! Analysis options and configuration.

use super::CleanupOptions;

/// Options for analyzing extracted text.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Thresholds for headings without a marker
    pub implicit_heading: ImplicitHeadingConfig,

    /// Text cleanup applied before segmentation (off by default)
    pub cleanup: Option<CleanupOptions>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set implicit heading thresholds.
    pub fn with_implicit_heading(mut self, config: ImplicitHeadingConfig) -> Self {
        self.implicit_heading = config;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

/// Configuration for detecting headings from short all-caps blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitHeadingConfig {
    /// Blocks must be shorter than this many characters
    pub max_chars: usize,

    /// Blocks may have at most this many whitespace-separated words
    pub max_words: usize,
}

impl Default for ImplicitHeadingConfig {
    fn default() -> Self {
        Self {
            max_chars: 100,
            max_words: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CleanupPreset;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.implicit_heading.max_chars, 100);
        assert_eq!(options.implicit_heading.max_words, 10);
        assert!(options.cleanup.is_none());
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_implicit_heading(ImplicitHeadingConfig {
                max_chars: 40,
                max_words: 4,
            })
            .with_cleanup_preset(CleanupPreset::Minimal);

        assert_eq!(options.implicit_heading.max_words, 4);
        assert!(options.cleanup.is_some());
    }
}
