//! Block classification predicates and the ordered rule cascade.
//!
//! Each predicate is a pure function over block text returning structured
//! match data. [`Rule`] pairs a predicate with the extraction of element
//! kinds, and [`RuleSet`] evaluates rules in priority order until one
//! matches. The renderer reuses the same predicates so that edited text is
//! grouped the way the classifier assumed.

use std::sync::LazyLock;

use regex::Regex;

use super::{Block, ImplicitHeadingConfig, ParseOptions};
use crate::error::{Error, Result};
use crate::model::{ElementKind, HeadingLevel};

// Nine digits always fit a u32, so a matched line always parses.
static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,9})\.\s+(.+)$").unwrap());
static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,9}\.").unwrap());
pub(crate) static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").unwrap());

/// Level-1 heading marker.
pub const MAIN_HEADING_MARKER: &str = "# ";
/// Level-2 heading marker.
pub const SECTION_HEADING_MARKER: &str = "## ";

/// A line of the form `<digits>. <text>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedLine<'a> {
    /// The full matched line
    pub line: &'a str,
    /// Digits before the dot
    pub digits: &'a str,
    /// Text after the marker and its whitespace
    pub text: &'a str,
}

impl NumberedLine<'_> {
    /// Parse the digits as a list number.
    ///
    /// The pattern admits at most nine ASCII digits, so this only fails for
    /// hand-built values.
    pub fn number(&self) -> Result<u32> {
        self.digits
            .parse::<u32>()
            .map_err(|source| Error::InvalidListNumber {
                line: self.line.to_string(),
                source,
            })
    }
}

/// Heading text if the block starts with `# `.
pub fn level1_heading(text: &str) -> Option<&str> {
    text.strip_prefix(MAIN_HEADING_MARKER).map(str::trim)
}

/// Heading text if the block starts with `## `.
pub fn level2_heading(text: &str) -> Option<&str> {
    text.strip_prefix(SECTION_HEADING_MARKER).map(str::trim)
}

/// Whether a line starts with `<digits>.`, with or without following text.
pub fn starts_with_number_marker(text: &str) -> bool {
    NUMBER_PREFIX_RE.is_match(text)
}

/// Match a single line against the numbered-list pattern.
pub fn numbered_line(line: &str) -> Option<NumberedLine<'_>> {
    let caps = NUMBERED_LINE_RE.captures(line)?;
    Some(NumberedLine {
        line,
        digits: caps.get(1)?.as_str(),
        text: caps.get(2)?.as_str(),
    })
}

/// Numbered lines embedded in a multi-line block, in line order.
///
/// Single-line blocks yield nothing; they are handled by [`numbered_line`].
pub fn embedded_numbered_lines(lines: &[String]) -> Vec<NumberedLine<'_>> {
    if lines.len() < 2 {
        return Vec::new();
    }
    lines.iter().filter_map(|line| numbered_line(line)).collect()
}

/// Upper-case policy for implicit headings.
///
/// True when the text has at least one upper-case letter and no lower-case
/// letter. Uncased characters (digits, punctuation, CJK) are ignored, so text
/// made only of uncased characters is not upper-case.
pub fn is_upper_case(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

/// Whether a block reads as a heading without a marker: short, upper-case,
/// not numbered, and with few words.
pub fn is_implicit_heading(text: &str, config: &ImplicitHeadingConfig) -> bool {
    text.chars().count() < config.max_chars
        && is_upper_case(text)
        && !starts_with_number_marker(text)
        && text.split_whitespace().count() <= config.max_words
}

/// Whether the text contains a well-formed `**…**` pair.
pub fn has_emphasis(text: &str) -> bool {
    EMPHASIS_RE.is_match(text)
}

/// One classification heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `# ` marker
    MainHeading,
    /// `## ` marker
    SectionHeading,
    /// Short all-caps block
    ImplicitHeading,
    /// Single numbered line
    NumberedLine,
    /// Multi-line block with numbered lines inside; other lines are dropped
    EmbeddedNumberedLines,
    /// Fallback
    Paragraph,
}

impl Rule {
    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::MainHeading => "main-heading",
            Rule::SectionHeading => "section-heading",
            Rule::ImplicitHeading => "implicit-heading",
            Rule::NumberedLine => "numbered-line",
            Rule::EmbeddedNumberedLines => "embedded-numbered-lines",
            Rule::Paragraph => "paragraph",
        }
    }

    /// Element kinds for the block, or `None` if the rule does not apply.
    pub fn apply(self, block: &Block, options: &ParseOptions) -> Result<Option<Vec<ElementKind>>> {
        let text = block.text();
        let kinds = match self {
            Rule::MainHeading => level1_heading(&text)
                .map(|heading| vec![ElementKind::heading(HeadingLevel::Main, heading)]),
            Rule::SectionHeading => level2_heading(&text)
                .map(|heading| vec![ElementKind::heading(HeadingLevel::Section, heading)]),
            Rule::ImplicitHeading => is_implicit_heading(&text, &options.implicit_heading)
                .then(|| vec![ElementKind::heading(HeadingLevel::Title, text.clone())]),
            Rule::NumberedLine => {
                if block.is_multi_line() {
                    None
                } else {
                    match numbered_line(block.first_line()) {
                        Some(m) => Some(vec![ElementKind::list_item(m.number()?, m.text)]),
                        None => None,
                    }
                }
            }
            Rule::EmbeddedNumberedLines => {
                let matches = embedded_numbered_lines(&block.lines);
                if matches.is_empty() {
                    None
                } else {
                    let items = matches
                        .iter()
                        .map(|m| Ok(ElementKind::list_item(m.number()?, m.text)))
                        .collect::<Result<Vec<_>>>()?;
                    Some(items)
                }
            }
            Rule::Paragraph => Some(vec![ElementKind::paragraph(
                text.clone(),
                has_emphasis(&text),
            )]),
        };
        Ok(kinds)
    }
}

/// Ordered rules evaluated until the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set with a custom order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The standard cascade: explicit headings, implicit heading, numbered
    /// line, embedded numbered lines, paragraph.
    pub fn standard() -> Self {
        Self::new(vec![
            Rule::MainHeading,
            Rule::SectionHeading,
            Rule::ImplicitHeading,
            Rule::NumberedLine,
            Rule::EmbeddedNumberedLines,
            Rule::Paragraph,
        ])
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify one block. Falls back to a paragraph when no rule matches.
    pub fn classify_block(
        &self,
        block: &Block,
        options: &ParseOptions,
    ) -> Result<(Rule, Vec<ElementKind>)> {
        for rule in &self.rules {
            if let Some(kinds) = rule.apply(block, options)? {
                return Ok((*rule, kinds));
            }
        }
        let fallback = Rule::Paragraph;
        let kinds = fallback.apply(block, options)?.unwrap_or_default();
        Ok((fallback, kinds))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::segment;

    fn block(text: &str) -> Block {
        segment(text).remove(0)
    }

    fn classify(text: &str) -> (Rule, Vec<ElementKind>) {
        RuleSet::standard()
            .classify_block(&block(text), &ParseOptions::default())
            .unwrap()
    }

    #[test]
    fn test_explicit_heading_predicates() {
        assert_eq!(level1_heading("# Title  "), Some("Title"));
        assert_eq!(level1_heading("## Title"), None);
        assert_eq!(level1_heading("#Title"), None);
        assert_eq!(level2_heading("## Section"), Some("Section"));
        assert_eq!(level2_heading("# Section"), None);
    }

    #[test]
    fn test_numbered_line_predicate() {
        let m = numbered_line("12. Twelfth item").unwrap();
        assert_eq!(m.digits, "12");
        assert_eq!(m.text, "Twelfth item");
        assert_eq!(m.number().unwrap(), 12);

        let m = numbered_line("3.   spaced").unwrap();
        assert_eq!(m.text, "spaced");

        assert!(numbered_line("3.14 is pi").is_none());
        assert!(numbered_line("1.").is_none());
        assert!(numbered_line("a. letter").is_none());
        assert!(numbered_line("Step 1. go").is_none());
    }

    #[test]
    fn test_long_digit_run_is_not_numbered() {
        assert_eq!(numbered_line("999999999. max").unwrap().number().unwrap(), 999_999_999);
        assert!(numbered_line("5551234567. Call the office").is_none());
        assert!(!starts_with_number_marker("5551234567. CALL"));
        assert_eq!(classify("5551234567. Call the office").0, Rule::Paragraph);
    }

    #[test]
    fn test_hand_built_overflow_is_an_error() {
        let m = NumberedLine {
            line: "99999999999. too big",
            digits: "99999999999",
            text: "too big",
        };
        assert!(matches!(m.number(), Err(Error::InvalidListNumber { .. })));
    }

    #[test]
    fn test_upper_case_policy() {
        assert!(is_upper_case("SUMMARY"));
        assert!(is_upper_case("PART 2: RESULTS!"));
        assert!(is_upper_case("ÜBERSICHT"));
        assert!(!is_upper_case("Summary"));
        assert!(!is_upper_case("2024"));
        assert!(!is_upper_case("---"));
        assert!(!is_upper_case("概要"));
    }

    #[test]
    fn test_implicit_heading_thresholds() {
        let config = ImplicitHeadingConfig::default();
        assert!(is_implicit_heading("SUMMARY", &config));
        assert!(is_implicit_heading(
            "ONE TWO THREE FOUR FIVE SIX SEVEN EIGHT NINE TEN",
            &config
        ));
        assert!(!is_implicit_heading(
            "ONE TWO THREE FOUR FIVE SIX SEVEN EIGHT NINE TEN ELEVEN",
            &config
        ));
        assert!(!is_implicit_heading("1.INTRODUCTION", &config));
        assert!(!is_implicit_heading(&"A".repeat(100), &config));
        assert!(is_implicit_heading(&"A".repeat(99), &config));
    }

    #[test]
    fn test_has_emphasis() {
        assert!(has_emphasis("some **bold** text"));
        assert!(!has_emphasis("some ** text"));
        assert!(!has_emphasis("****"));
        assert!(!has_emphasis("plain"));
    }

    #[test]
    fn test_cascade_priority() {
        assert_eq!(classify("# Title").0, Rule::MainHeading);
        assert_eq!(classify("## Sub").0, Rule::SectionHeading);
        // An all-caps level-2 heading still resolves by marker first.
        assert_eq!(classify("## SUB").0, Rule::SectionHeading);
        assert_eq!(classify("INTRODUCTION").0, Rule::ImplicitHeading);
        assert_eq!(classify("1. First").0, Rule::NumberedLine);
        assert_eq!(classify("Steps:\n1. a\n2. b").0, Rule::EmbeddedNumberedLines);
        assert_eq!(classify("Just text.").0, Rule::Paragraph);
    }

    #[test]
    fn test_multi_line_numbered_block_splits() {
        let (rule, kinds) = classify("1. First\n2. Second");
        assert_eq!(rule, Rule::EmbeddedNumberedLines);
        assert_eq!(
            kinds,
            vec![
                ElementKind::list_item(1, "First"),
                ElementKind::list_item(2, "Second"),
            ]
        );
    }

    #[test]
    fn test_embedded_rule_drops_other_lines() {
        let (_, kinds) = classify("Intro line\n1. Alpha\nnot numbered\n2. Beta");
        assert_eq!(kinds.len(), 2);
        assert_eq!(kinds[0].text(), "Alpha");
        assert_eq!(kinds[1].text(), "Beta");
    }

    #[test]
    fn test_decimal_line_is_not_a_list() {
        let (rule, _) = classify("Intro\n3.14 is pi");
        assert_eq!(rule, Rule::Paragraph);
    }

    #[test]
    fn test_empty_rule_set_falls_back_to_paragraph() {
        let rules = RuleSet::new(Vec::new());
        let (rule, kinds) = rules
            .classify_block(&block("# Title"), &ParseOptions::default())
            .unwrap();
        assert_eq!(rule, Rule::Paragraph);
        assert_eq!(kinds, vec![ElementKind::paragraph("# Title", false)]);
    }
}
