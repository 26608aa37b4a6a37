//! Whole-document fixtures: a mixed document (titles, paragraphs, lists,
//! LaTeX environments, comment blocks, indented groups) reflowed at width 80
//! and compared against its known-good justified form.

use reflow::{
    detect_multiline_prefix, justify, prepend_multiline_prefix, remove_multiline_prefix,
    text_to_blocks,
};

const DOCUMENT: &str = include_str!("fixtures/document.txt");
const DOCUMENT_JUSTIFIED: &str = include_str!("fixtures/document_justified_80.txt");
const INDENTED_LIST: &str = include_str!("fixtures/indented_list.txt");
const INDENTED_LIST_JUSTIFIED: &str = include_str!("fixtures/indented_list_justified_80.txt");

#[test]
fn full_document_at_width_80() {
    assert_eq!(justify(DOCUMENT, 80, 3).unwrap(), DOCUMENT_JUSTIFIED);
}

#[test]
fn indented_list_at_width_80() {
    assert_eq!(justify(INDENTED_LIST, 80, 3).unwrap(), INDENTED_LIST_JUSTIFIED);
}

#[test]
fn segmentation_is_lossless_on_the_document() {
    let blocks = text_to_blocks(DOCUMENT);
    assert_eq!(blocks.join("\n"), DOCUMENT);
}

#[test]
fn indented_list_preserves_every_word() {
    let out = justify(INDENTED_LIST, 80, 3).unwrap();
    let before: Vec<&str> = INDENTED_LIST.split_whitespace().collect();
    let after: Vec<&str> = out.split_whitespace().collect();
    assert_eq!(before, after);
}

#[test]
fn width_bound_holds_across_widths() {
    for width in [60, 80, 100] {
        let out = justify(DOCUMENT, width, 3).unwrap();
        for line in out.split('\n') {
            // A single overlong word may exceed the bound; nothing else can.
            if line.split_whitespace().count() > 1 {
                assert!(
                    line.chars().count() <= width,
                    "width {width} exceeded: {line:?}"
                );
            }
        }
    }
}

#[test]
fn prefix_round_trip_on_document_blocks() {
    for block in text_to_blocks(DOCUMENT) {
        let prefix = detect_multiline_prefix(&block);
        if prefix.is_empty() {
            continue;
        }
        let stripped = remove_multiline_prefix(&block, &prefix);
        assert_eq!(prepend_multiline_prefix(&stripped, &prefix), block);
    }
}
