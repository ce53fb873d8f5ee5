//! Inline emphasis parsing.

use crate::model::TextRun;
use crate::parser::rules::EMPHASIS_RE;

/// Split text into plain and strong runs on `**…**` pairs.
///
/// Unmatched markers stay in the plain text. Empty runs are never produced.
pub fn parse_inline(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in EMPHASIS_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            runs.push(TextRun::new(&text[last..whole.start()]));
        }
        runs.push(TextRun::strong(inner.as_str()));
        last = whole.end();
    }

    if last < text.len() {
        runs.push(TextRun::new(&text[last..]));
    }
    runs
}
