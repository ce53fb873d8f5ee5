//! Text analysis: segmentation, cleanup and block classification.

mod classifier;
mod cleanup;
mod options;
pub mod rules;
mod segment;

pub use classifier::{classify, Classifier};
pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use options::{ImplicitHeadingConfig, ParseOptions};
pub use rules::{Rule, RuleSet};
pub use segment::{segment, Block};

use crate::error::Result;
use crate::model::StructureMap;

/// Clean (if configured), segment and classify text.
pub fn analyze_with_options(text: &str, options: &ParseOptions) -> Result<StructureMap> {
    let blocks = match options.cleanup {
        Some(ref cleanup) => segment(&CleanupPipeline::new(cleanup.clone()).process(text)),
        None => segment(text),
    };
    Classifier::new(options.clone()).classify(&blocks)
}
