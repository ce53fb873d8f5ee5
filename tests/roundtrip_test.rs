//! Markdown written from a structure map reads back as the same structure,
//! and lays out with matching styled blocks.

use repdf::render::{layout, to_markdown};
use repdf::{analyze, ElementKind, HeadingLevel, RenderOptions, StyledBlock, TextRun};

const SOURCE: &str = "\
# Annual Review

## Results

Sales rose in **every** region.

Next steps:
1. Hire staff
2. Open office

## Risks

Costs may grow.
";

#[test]
fn test_markdown_reclassifies_identically() {
    let first = analyze(SOURCE).unwrap();
    let second = analyze(&to_markdown(&first)).unwrap();

    let kinds = |map: &repdf::StructureMap| -> Vec<ElementKind> {
        map.elements().iter().map(|e| e.kind.clone()).collect()
    };
    assert_eq!(kinds(&first), kinds(&second));
    assert_eq!(first.lists(), second.lists());
    assert_eq!(first.counts(), second.counts());
}

#[test]
fn test_layout_of_markdown() {
    let map = analyze(SOURCE).unwrap();
    let story = layout(&to_markdown(&map), &RenderOptions::default()).unwrap();

    let levels: Vec<HeadingLevel> = story
        .blocks
        .iter()
        .filter_map(|b| match b {
            StyledBlock::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(
        levels,
        vec![HeadingLevel::Main, HeadingLevel::Section, HeadingLevel::Section]
    );

    let lists: Vec<&StyledBlock> = story.blocks.iter().filter(|b| b.is_list()).collect();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].plain_text(), "Hire staff\nOpen office");

    let strong = story.blocks.iter().any(|b| match b {
        StyledBlock::Paragraph { runs } => runs.contains(&TextRun::strong("every")),
        _ => false,
    });
    assert!(strong);
}

#[test]
fn test_title_headings_become_paragraphs() {
    let map = analyze("OVERVIEW\n\nBody.").unwrap();
    assert_eq!(map.elements()[0].heading_level(), Some(HeadingLevel::Title));

    let story = layout(&to_markdown(&map), &RenderOptions::default()).unwrap();
    assert!(story.blocks.iter().all(|b| b.is_paragraph()));

    let story = layout(
        &to_markdown(&map),
        &RenderOptions::default().with_implicit_headings(true),
    )
    .unwrap();
    assert!(story.blocks[0].is_heading());
}

#[test]
fn test_renderer_groups_lists_like_classifier() {
    let inputs = [
        "1. Alpha\n\nSteps continue\n2. Beta",
        "Intro.\n\n1. a\n\n2. b\n\n3. c\n\nOutro.",
        "Steps:\n1. Mix\nwell\n2. Bake\n\n## Serve\n\n1. Plate",
        "1. a\n\nmore\n2. b\n3. c\n\nend",
        "5551234567. Call the office\n\n1. First",
        "# Title\n\nNo lists here.",
    ];

    for input in inputs {
        let map = analyze(input).unwrap();
        let story = layout(input, &RenderOptions::default()).unwrap();

        let rendered: Vec<usize> = story
            .blocks
            .iter()
            .filter_map(|b| match b {
                StyledBlock::List { entries } => Some(entries.len()),
                _ => None,
            })
            .collect();
        let classified: Vec<usize> = map.lists().iter().map(|l| l.len()).collect();
        assert_eq!(classified, rendered, "list grouping differs for {:?}", input);
    }
}
