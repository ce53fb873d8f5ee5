//! Blank-line segmentation of extracted text.

use serde::{Deserialize, Serialize};

/// A maximal run of non-blank, trimmed lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 0-based index in the segmented sequence
    pub index: usize,

    /// Trimmed lines (never empty, none blank)
    pub lines: Vec<String>,
}

impl Block {
    /// Block content with internal line breaks preserved.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Check if the block spans more than one line.
    pub fn is_multi_line(&self) -> bool {
        self.lines.len() > 1
    }

    /// First line of the block.
    pub fn first_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }
}

/// Split text into blocks on one or more blank lines.
///
/// Each line is trimmed before the blank test, so whitespace-only lines count
/// as boundaries. Empty input yields no blocks.
pub fn segment(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(Block {
                    index: blocks.len(),
                    lines: std::mem::take(&mut current),
                });
            }
        } else {
            current.push(line.to_string());
        }
    }

    if !current.is_empty() {
        blocks.push(Block {
            index: blocks.len(),
            lines: current,
        });
    }

    log::debug!("segment: {} blocks", blocks.len());
    blocks
}
