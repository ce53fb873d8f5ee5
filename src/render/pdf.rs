//! PDF output for paginated documents using lopdf.

use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::Result;
use crate::model::{FontFace, Page, PaginatedDocument};

/// PDF version written in the header.
const PDF_VERSION: &str = "1.5";

/// Write a paginated document as PDF.
pub fn write_pdf<W: Write>(doc: &PaginatedDocument, writer: &mut W) -> Result<()> {
    let mut pdf = build(doc)?;
    pdf.compress();
    pdf.save_to(writer)?;
    Ok(())
}

/// Encode a paginated document as PDF bytes.
pub fn to_pdf_bytes(doc: &PaginatedDocument) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_pdf(doc, &mut bytes)?;
    Ok(bytes)
}

fn build(doc: &PaginatedDocument) -> Result<Document> {
    let mut pdf = Document::with_version(PDF_VERSION);
    let pages_id = pdf.new_object_id();

    let mut fonts = Dictionary::new();
    for face in [FontFace::Regular, FontFace::Bold] {
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = pdf.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(doc.pages.len());
    for page in &doc.pages {
        let page_id = add_page(&mut pdf, page, pages_id)?;
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
    };
    pdf.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    let mut info = Dictionary::new();
    if let Some(ref title) = doc.metadata.title {
        info.set("Title", text_string(title));
    }
    if let Some(ref producer) = doc.metadata.producer {
        info.set("Producer", text_string(producer));
    }
    if let Some(date) = doc.metadata.pdf_creation_date() {
        info.set("CreationDate", Object::string_literal(date));
    }
    if !info.is_empty() {
        let info_id = pdf.add_object(info);
        pdf.trailer.set("Info", info_id);
    }

    Ok(pdf)
}

fn add_page(pdf: &mut Document, page: &Page, parent: ObjectId) -> Result<ObjectId> {
    let mut operations = Vec::new();

    for line in &page.lines {
        if line.words.is_empty() {
            continue;
        }
        operations.push(Operation::new("BT", vec![]));
        let mut current: Option<(FontFace, f32)> = None;
        for word in &line.words {
            if current != Some((word.face, word.size)) {
                operations.push(Operation::new(
                    "Tf",
                    vec![word.face.resource_name().into(), word.size.into()],
                ));
                current = Some((word.face, word.size));
            }
            operations.push(Operation::new(
                "Tm",
                vec![
                    1.into(),
                    0.into(),
                    0.into(),
                    1.into(),
                    word.x.into(),
                    line.baseline.into(),
                ],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(&word.text), StringFormat::Literal)],
            ));
        }
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = pdf.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "MediaBox" => vec![0.into(), 0.into(), page.width.into(), page.height.into()],
        "Contents" => content_id,
    });
    Ok(page_id)
}

/// Info-dictionary text: plain literal when ASCII, UTF-16BE with BOM otherwise.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        Object::string_literal(text)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

/// Encode text for a WinAnsiEncoding font. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            win_ansi_byte(c).unwrap_or_else(|| {
                log::warn!("Character {:?} has no WinAnsi code; writing '?'", c);
                b'?'
            })
        })
        .collect()
}

pub(crate) fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201C}' => Some(0x93),
            '\u{201D}' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}
