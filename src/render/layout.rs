//! Marker text to styled blocks.

use super::inline::parse_inline;
use super::RenderOptions;
use crate::error::Result;
use crate::model::{HeadingLevel, ListEntry, StyledBlock, StyledDocument};
use crate::parser::rules::{is_implicit_heading, level1_heading, level2_heading, numbered_line};
use crate::parser::{segment, Block};

/// Build a styled document from marker text.
///
/// Blocks are recognized with the same predicates the classifier uses, so
/// a list the classifier grouped is grouped again here. The open list is
/// closed before any non-list block and at the end of input.
pub fn layout(text: &str, options: &RenderOptions) -> Result<StyledDocument> {
    let mut builder = StoryBuilder::default();

    for block in segment(text) {
        let joined = block.lines.join(" ");

        if let Some(heading) = level1_heading(&joined) {
            builder.heading(HeadingLevel::Main, heading);
        } else if let Some(heading) = level2_heading(&joined) {
            builder.heading(HeadingLevel::Section, heading);
        } else if options.detect_implicit_headings
            && is_implicit_heading(&block.text(), &options.implicit_heading)
        {
            builder.heading(HeadingLevel::Title, &joined);
        } else if block.lines.iter().any(|line| numbered_line(line).is_some()) {
            builder.numbered_block(&block)?;
        } else {
            builder.paragraph(&joined);
        }
    }

    Ok(builder.finish())
}

/// A list entry whose text may still grow.
#[derive(Debug)]
struct OpenEntry {
    number: u32,
    text: String,
}

impl OpenEntry {
    fn append(&mut self, line: &str) {
        self.text.push(' ');
        self.text.push_str(line);
    }
}

#[derive(Debug, Default)]
struct StoryBuilder {
    document: StyledDocument,
    open_list: Vec<OpenEntry>,
}

impl StoryBuilder {
    fn flush_list(&mut self) {
        if !self.open_list.is_empty() {
            let entries: Vec<ListEntry> = std::mem::take(&mut self.open_list)
                .into_iter()
                .map(|entry| ListEntry {
                    number: entry.number,
                    runs: parse_inline(&entry.text),
                })
                .collect();
            log::debug!("layout: list of {} entries", entries.len());
            self.document.push(StyledBlock::List { entries });
        }
    }

    fn heading(&mut self, level: HeadingLevel, text: &str) {
        self.flush_list();
        self.document.push(StyledBlock::Heading {
            level,
            runs: parse_inline(text),
        });
    }

    fn paragraph(&mut self, text: &str) {
        self.flush_list();
        self.document.push(StyledBlock::Paragraph {
            runs: parse_inline(text),
        });
    }

    /// One entry per numbered line; unnumbered lines continue the entry
    /// before them. Leading unnumbered lines continue the open list's last
    /// entry, or form a paragraph before the list when no list is open.
    fn numbered_block(&mut self, block: &Block) -> Result<()> {
        let mut preamble: Vec<&str> = Vec::new();
        let mut entries: Vec<OpenEntry> = Vec::new();

        for line in &block.lines {
            if let Some(m) = numbered_line(line) {
                entries.push(OpenEntry {
                    number: m.number()?,
                    text: m.text.to_string(),
                });
            } else if let Some(entry) = entries.last_mut() {
                entry.append(line);
            } else {
                preamble.push(line);
            }
        }

        if !preamble.is_empty() {
            match self.open_list.last_mut() {
                Some(entry) => preamble.iter().for_each(|line| entry.append(line)),
                None => self.paragraph(&preamble.join(" ")),
            }
        }
        self.open_list.extend(entries);
        Ok(())
    }

    fn finish(mut self) -> StyledDocument {
        self.flush_list();
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    fn blocks(text: &str) -> Vec<StyledBlock> {
        layout(text, &RenderOptions::default()).unwrap().blocks
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let blocks = blocks("# Title\n\n## Section\n\nBody line one\nline two.");
        assert_eq!(
            blocks,
            vec![
                StyledBlock::Heading {
                    level: HeadingLevel::Main,
                    runs: vec![TextRun::new("Title")],
                },
                StyledBlock::Heading {
                    level: HeadingLevel::Section,
                    runs: vec![TextRun::new("Section")],
                },
                StyledBlock::Paragraph {
                    runs: vec![TextRun::new("Body line one line two.")],
                },
            ]
        );
    }

    #[test]
    fn test_separate_numbered_blocks_group() {
        let blocks = blocks("1. a\n\n2. b\n\n3. c\n\nAfter.");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            StyledBlock::List { entries } => assert_eq!(entries.len(), 3),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_flushes_list() {
        let blocks = blocks("1. a\n\n# Next\n\n1. b");
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].is_list());
        assert!(blocks[1].is_heading());
        assert!(blocks[2].is_list());
    }

    #[test]
    fn test_multi_line_numbered_block() {
        let blocks = blocks("Steps:\n1. Mix\nwell\n2. Bake");
        assert_eq!(
            blocks,
            vec![
                StyledBlock::Paragraph {
                    runs: vec![TextRun::new("Steps:")],
                },
                StyledBlock::List {
                    entries: vec![
                        ListEntry {
                            number: 1,
                            runs: vec![TextRun::new("Mix well")],
                        },
                        ListEntry {
                            number: 2,
                            runs: vec![TextRun::new("Bake")],
                        },
                    ],
                },
            ]
        );
    }

    #[test]
    fn test_emphasis_in_list_items_and_headings() {
        let blocks = blocks("# A **big** deal\n\n1. Use **care**");
        assert_eq!(
            blocks[0],
            StyledBlock::Heading {
                level: HeadingLevel::Main,
                runs: vec![
                    TextRun::new("A "),
                    TextRun::strong("big"),
                    TextRun::new(" deal"),
                ],
            }
        );
        match &blocks[1] {
            StyledBlock::List { entries } => {
                assert_eq!(
                    entries[0].runs,
                    vec![TextRun::new("Use "), TextRun::strong("care")]
                );
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_implicit_headings_are_opt_in() {
        let off = blocks("SUMMARY\n\nText.");
        assert!(off[0].is_paragraph());

        let options = RenderOptions::default().with_implicit_headings(true);
        let on = layout("SUMMARY\n\nText.", &options).unwrap().blocks;
        assert_eq!(
            on[0],
            StyledBlock::Heading {
                level: HeadingLevel::Title,
                runs: vec![TextRun::new("SUMMARY")],
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(layout("", &RenderOptions::default()).unwrap().is_empty());
        assert!(layout("\n\n  \n", &RenderOptions::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_leading_lines_continue_open_list() {
        let blocks = blocks("1. Alpha\n\nSteps continue\n2. Beta");
        assert_eq!(
            blocks,
            vec![StyledBlock::List {
                entries: vec![
                    ListEntry {
                        number: 1,
                        runs: vec![TextRun::new("Alpha Steps continue")],
                    },
                    ListEntry {
                        number: 2,
                        runs: vec![TextRun::new("Beta")],
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_long_digit_run_is_a_paragraph() {
        let blocks = blocks("5551234567. Call the office");
        assert_eq!(
            blocks,
            vec![StyledBlock::Paragraph {
                runs: vec![TextRun::new("5551234567. Call the office")],
            }]
        );
    }

    #[test]
    fn test_implicit_heading_thresholds_follow_options() {
        let options = RenderOptions::default()
            .with_implicit_headings(true)
            .with_implicit_heading_config(crate::parser::ImplicitHeadingConfig {
                max_chars: 100,
                max_words: 2,
            });
        let blocks = layout("TWO WORDS\n\nTHREE WORDS HERE", &options)
            .unwrap()
            .blocks;
        assert!(blocks[0].is_heading());
        assert!(blocks[1].is_paragraph());
    }
}
