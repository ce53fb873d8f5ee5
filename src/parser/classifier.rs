//! Sequential classification of blocks into a [`StructureMap`].

use super::{Block, ParseOptions, RuleSet};
use crate::error::Result;
use crate::model::{
    ElementKind, NumberedItem, NumberedList, StructuralElement, StructureMap,
};

/// Accumulator threaded through one classification pass.
///
/// Holds the last assigned position and the open list group. A fresh value
/// is created per pass; nothing survives between documents.
#[derive(Debug, Default)]
struct Accumulator {
    position: u32,
    elements: Vec<StructuralElement>,
    lists: Vec<NumberedList>,
    open_list: Vec<NumberedItem>,
}

impl Accumulator {
    /// Record one element, assigning the next position.
    fn emit(mut self, block_index: usize, kind: ElementKind) -> Self {
        self.position += 1;
        let position = self.position;

        match &kind {
            ElementKind::ListItem { number, text } => {
                self.open_list.push(NumberedItem {
                    number: *number,
                    text: text.clone(),
                    position,
                });
            }
            _ => self = self.flush(),
        }

        self.elements
            .push(StructuralElement::new(position, block_index, kind));
        self
    }

    /// Close the open list group, if any.
    fn flush(mut self) -> Self {
        let items = std::mem::take(&mut self.open_list);
        if let Some(list) = NumberedList::from_items(items) {
            log::debug!(
                "classify: list closed at positions {}-{} ({} items)",
                list.start_position,
                list.end_position,
                list.len()
            );
            self.lists.push(list);
        }
        self
    }

    fn finish(self) -> StructureMap {
        let done = self.flush();
        StructureMap::new(done.elements, done.lists)
    }
}

/// Block classifier.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RuleSet,
    options: ParseOptions,
}

impl Classifier {
    /// Create a classifier with the standard rules.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            rules: RuleSet::standard(),
            options,
        }
    }

    /// Replace the rule cascade.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Classify blocks in order.
    ///
    /// Positions run 1..=N over emitted elements. A block may emit several
    /// list items; each consumes exactly one position.
    pub fn classify(&self, blocks: &[Block]) -> Result<StructureMap> {
        let acc = blocks
            .iter()
            .try_fold(Accumulator::default(), |acc, block| {
                let (rule, kinds) = self.rules.classify_block(block, &self.options)?;
                log::debug!(
                    "classify: block {} -> {} ({} element(s))",
                    block.index,
                    rule.name(),
                    kinds.len()
                );
                Ok::<_, crate::error::Error>(
                    kinds
                        .into_iter()
                        .fold(acc, |acc, kind| acc.emit(block.index, kind)),
                )
            })?;
        Ok(acc.finish())
    }
}

/// Classify blocks with default options.
pub fn classify(blocks: &[Block]) -> Result<StructureMap> {
    Classifier::default().classify(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;
    use crate::parser::segment;

    fn analyze(text: &str) -> StructureMap {
        classify(&segment(text)).unwrap()
    }

    fn positions(map: &StructureMap) -> Vec<u32> {
        map.elements().iter().map(|e| e.position).collect()
    }

    #[test]
    fn test_worked_example() {
        let map = analyze("# Title\n\nHello world.\n\n1. First\n2. Second\n\nDone.");

        let kinds: Vec<_> = map.elements().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::heading(HeadingLevel::Main, "Title"),
                ElementKind::paragraph("Hello world.", false),
                ElementKind::list_item(1, "First"),
                ElementKind::list_item(2, "Second"),
                ElementKind::paragraph("Done.", false),
            ]
        );
        assert_eq!(positions(&map), vec![1, 2, 3, 4, 5]);

        assert_eq!(map.lists().len(), 1);
        let list = &map.lists()[0];
        assert_eq!((list.start_position, list.end_position), (3, 4));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let map = analyze("");
        assert!(map.is_empty());
        assert!(map.lists().is_empty());
    }

    #[test]
    fn test_plain_paragraphs() {
        let map = analyze("First paragraph.\n\nSecond one\nspans lines.\n\nThird.");
        assert_eq!(map.len(), 3);
        for el in map.elements() {
            assert_eq!(
                el.kind,
                ElementKind::Paragraph {
                    text: el.text().to_string(),
                    has_emphasis: false
                }
            );
        }
        assert_eq!(map.elements()[1].text(), "Second one\nspans lines.");
    }

    #[test]
    fn test_contiguous_single_line_items_form_one_list() {
        let map = analyze("Before.\n\n1. a\n\n2. b\n\n3. c\n\n4. d\n\nAfter.");
        assert_eq!(map.lists().len(), 1);
        let list = &map.lists()[0];
        assert_eq!(list.len(), 4);
        assert_eq!(list.end_position - list.start_position, 3);
    }

    #[test]
    fn test_heading_closes_list() {
        let map = analyze("1. a\n\n2. b\n\n## Next\n\n1. c");
        assert_eq!(map.lists().len(), 2);
        assert_eq!(map.lists()[0].end_position, 2);
        assert_eq!(map.lists()[1].start_position, 4);
        assert_eq!(map.lists()[1].end_position, 4);
    }

    #[test]
    fn test_list_at_end_is_flushed() {
        let map = analyze("Intro.\n\n1. only");
        assert_eq!(map.lists().len(), 1);
        assert_eq!(map.counts().lists, 1);
    }

    #[test]
    fn test_embedded_items_get_consecutive_positions() {
        let map = analyze("# H\n\nSteps below\n1. Alpha\nnoise\n2. Beta\n\nTail.");
        assert_eq!(positions(&map), vec![1, 2, 3, 4]);
        assert!(map.elements()[1].kind.is_list_item());
        assert!(map.elements()[2].kind.is_list_item());
        assert_eq!(map.elements()[1].block_index, 1);
        assert_eq!(map.elements()[2].block_index, 1);
        assert_eq!(map.elements()[3].text(), "Tail.");
    }

    #[test]
    fn test_embedded_block_continues_open_list() {
        let map = analyze("1. a\n\nmore\n2. b\n3. c\n\nend");
        assert_eq!(map.lists().len(), 1);
        assert_eq!(map.lists()[0].len(), 3);
    }

    #[test]
    fn test_implicit_headings() {
        let map = analyze("SUMMARY\n\nONE TWO THREE FOUR FIVE SIX SEVEN EIGHT NINE TEN ELEVEN");
        assert_eq!(map.elements()[0].heading_level(), Some(HeadingLevel::Title));
        assert!(map.elements()[1].kind.is_paragraph());
    }

    #[test]
    fn test_emphasis_flag() {
        let map = analyze("Plain.\n\nThis is **bold** text.");
        assert_eq!(
            map.elements()[1].kind,
            ElementKind::paragraph("This is **bold** text.", true)
        );
    }

    #[test]
    fn test_long_digit_run_is_a_paragraph() {
        let map = analyze("Contact list\n\n5551234567. Call the office\n\n1. First");
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.elements()[1].kind,
            ElementKind::paragraph("5551234567. Call the office", false)
        );
        assert_eq!(map.lists().len(), 1);
        assert_eq!(map.lists()[0].start_position, 3);
    }

    #[test]
    fn test_passes_are_independent() {
        let classifier = Classifier::default();
        let first = classifier.classify(&segment("1. dangling")).unwrap();
        let second = classifier.classify(&segment("Text.")).unwrap();
        assert_eq!(first.lists().len(), 1);
        assert!(second.lists().is_empty());
        assert_eq!(second.elements()[0].position, 1);
    }
}
