//! Line breaking and page layout.

use super::metrics::text_width;
use super::{BlockStyle, ListNumbering, RenderOptions};
use crate::model::{
    Alignment, FontFace, ListEntry, Metadata, Page, PaginatedDocument, PlacedLine, PlacedWord,
    StyledBlock, StyledDocument, TextRun,
};

/// Minimum width of the list label column in points.
const MIN_LABEL_COLUMN: f32 = 18.0;
/// Space between a list label and its text in points.
const LABEL_GAP: f32 = 6.0;

/// Lay styled blocks out onto pages.
///
/// Always yields at least one page; an empty document gives one blank page.
pub fn paginate(doc: &StyledDocument, options: &RenderOptions) -> PaginatedDocument {
    let mut metadata = Metadata::now();
    metadata.title = options.title.clone();

    let mut paginator = Paginator::new(options, metadata);
    for block in &doc.blocks {
        match block {
            StyledBlock::Heading { level, runs } => {
                paginator.flow(runs, options.heading_style(*level), None)
            }
            StyledBlock::Paragraph { runs } => paginator.flow(runs, &options.body, None),
            StyledBlock::List { entries } => paginator.list(entries),
        }
    }

    let document = paginator.finish();
    log::debug!("paginate: {} page(s)", document.page_count());
    document
}

/// A piece of a word set in one face.
#[derive(Debug, Clone)]
struct Fragment {
    text: String,
    face: FontFace,
    width: f32,
}

/// Fragments with no whitespace between them.
#[derive(Debug, Clone, Default)]
struct Word {
    fragments: Vec<Fragment>,
    width: f32,
}

impl Word {
    fn push(&mut self, c: char, face: FontFace, size: f32) {
        let mut buf = [0u8; 4];
        let width = text_width(c.encode_utf8(&mut buf), face, size);
        match self.fragments.last_mut() {
            Some(last) if last.face == face => {
                last.text.push(c);
                last.width += width;
            }
            _ => self.fragments.push(Fragment {
                text: c.to_string(),
                face,
                width,
            }),
        }
        self.width += width;
    }

    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// A list label drawn to the left of an entry's first line.
struct Label {
    text: String,
    width: f32,
    column: f32,
}

/// Split runs into words. Whitespace inside or between runs separates words.
fn words_from_runs(runs: &[TextRun], size: f32, all_bold: bool) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::default();

    for run in runs {
        let face = FontFace::for_strong(all_bold || run.strong);
        for c in run.text.chars() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c, face, size);
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Break a word wider than `available` into pieces that fit.
///
/// Each piece holds at least one character.
fn split_word(word: Word, available: f32, size: f32) -> Vec<Word> {
    let mut pieces = Vec::new();
    let mut current = Word::default();

    for fragment in word.fragments {
        for c in fragment.text.chars() {
            let mut buf = [0u8; 4];
            let width = text_width(c.encode_utf8(&mut buf), fragment.face, size);
            if !current.is_empty() && current.width + width > available {
                pieces.push(std::mem::take(&mut current));
            }
            current.push(c, fragment.face, size);
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Greedy line breaking.
fn break_lines(words: Vec<Word>, available: f32, space: f32, size: f32) -> Vec<Vec<Word>> {
    let mut lines = Vec::new();
    let mut line: Vec<Word> = Vec::new();
    let mut line_width = 0.0;

    for word in words {
        let pieces = if word.width > available {
            split_word(word, available, size)
        } else {
            vec![word]
        };

        for piece in pieces {
            let needed = if line.is_empty() {
                piece.width
            } else {
                line_width + space + piece.width
            };
            if needed <= available || line.is_empty() {
                line_width = needed;
                line.push(piece);
            } else {
                lines.push(std::mem::take(&mut line));
                line_width = piece.width;
                line.push(piece);
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Position the words of one line.
fn place_line(
    line: Vec<Word>,
    left: f32,
    available: f32,
    space: f32,
    alignment: Alignment,
    is_last: bool,
    size: f32,
) -> Vec<PlacedWord> {
    let count = line.len();
    if count == 0 {
        return Vec::new();
    }

    let words_width: f32 = line.iter().map(|w| w.width).sum();
    let natural = words_width + space * (count - 1) as f32;
    let slack = (available - natural).max(0.0);

    let (mut x, gap) = match alignment {
        Alignment::Left => (left, space),
        Alignment::Center => (left + slack / 2.0, space),
        Alignment::Right => (left + slack, space),
        // Last line of a justified block is set ragged.
        Alignment::Justify if is_last || count == 1 => (left, space),
        Alignment::Justify => (left, space + slack / (count - 1) as f32),
    };

    let mut placed = Vec::with_capacity(count);
    for word in line {
        for fragment in word.fragments {
            placed.push(PlacedWord {
                x,
                width: fragment.width,
                text: fragment.text,
                face: fragment.face,
                size,
            });
            x += fragment.width;
        }
        x += gap;
    }
    placed
}

struct Paginator<'a> {
    options: &'a RenderOptions,
    width: f32,
    height: f32,
    document: PaginatedDocument,
    page: Page,
    cursor: f32,
}

impl<'a> Paginator<'a> {
    fn new(options: &'a RenderOptions, metadata: Metadata) -> Self {
        let (width, height) = options.page_size.dimensions();
        Self {
            options,
            width,
            height,
            document: PaginatedDocument::new(metadata),
            page: Page::new(1, width, height),
            cursor: height - options.margins.top,
        }
    }

    fn new_page(&mut self) {
        let number = self.page.number + 1;
        let done = std::mem::replace(&mut self.page, Page::new(number, self.width, self.height));
        self.document.add_page(done);
        self.cursor = self.height - self.options.margins.top;
    }

    /// Space above a block, dropped at the top of a page.
    fn space_before(&mut self, space: f32) {
        if !self.page.is_empty() {
            self.cursor -= space;
        }
    }

    fn emit_line(&mut self, style: &BlockStyle, words: Vec<PlacedWord>) {
        // An empty page always takes the line, even if it does not fit.
        if self.cursor - style.leading < self.options.margins.bottom && !self.page.is_empty() {
            self.new_page();
        }
        let baseline = self.cursor - style.font_size;
        self.page.add_line(PlacedLine { baseline, words });
        self.cursor -= style.leading;
    }

    /// Set runs as one block in the given style.
    fn flow(&mut self, runs: &[TextRun], style: &BlockStyle, label: Option<&Label>) {
        let size = style.font_size;
        let space = text_width(" ", FontFace::Regular, size);
        let margins = self.options.margins;
        let left = margins.left + style.left_indent + label.map_or(0.0, |l| l.column);
        let available = (self.width - margins.right - left).max(size);

        let mut lines = break_lines(words_from_runs(runs, size, style.bold), available, space, size);
        if lines.is_empty() {
            if label.is_none() {
                return;
            }
            lines.push(Vec::new());
        }

        self.space_before(style.space_before);
        let count = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            let mut placed = Vec::new();
            if let (0, Some(label)) = (i, label) {
                placed.push(PlacedWord {
                    x: margins.left + style.left_indent,
                    width: label.width,
                    text: label.text.clone(),
                    face: FontFace::Regular,
                    size,
                });
            }
            placed.extend(place_line(
                line,
                left,
                available,
                space,
                style.alignment,
                i + 1 == count,
                size,
            ));
            self.emit_line(style, placed);
        }
        self.cursor -= style.space_after;
    }

    fn list(&mut self, entries: &[ListEntry]) {
        let options = self.options;
        let style = &options.list_item;
        let size = style.font_size;

        let labels: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match options.list_numbering {
                ListNumbering::Sequential => format!("{}.", i + 1),
                ListNumbering::Source => format!("{}.", entry.number),
            })
            .collect();
        let widest = labels
            .iter()
            .map(|label| text_width(label, FontFace::Regular, size))
            .fold(0.0_f32, f32::max);
        let column = (widest + LABEL_GAP).max(MIN_LABEL_COLUMN);

        for (entry, text) in entries.iter().zip(labels) {
            let label = Label {
                width: text_width(&text, FontFace::Regular, size),
                text,
                column,
            };
            self.flow(&entry.runs, style, Some(&label));
        }
    }

    fn finish(mut self) -> PaginatedDocument {
        let last = std::mem::take(&mut self.page);
        if !last.is_empty() || self.document.is_empty() {
            self.document.add_page(last);
        }
        self.document
    }
}
