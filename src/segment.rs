//! Block segmentation
//!
//! Splits a document into an ordered sequence of structural blocks: a
//! paragraph, a single blank separator line, a single LaTeX command line, a
//! list item with its continuation lines, or an indentation-delimited group.
//! Joining the blocks back with `\n` reproduces the input exactly; the
//! segmenter moves boundaries, never characters.
//!
//! The scan is a single left-to-right pass with an integer cursor. Per line,
//! the first matching rule wins:
//!
//! 1. blank or LaTeX command: hard boundary, emitted verbatim as its own
//!    single-line block;
//! 2. list-item start at column zero: opens a fresh accumulator (its wrapped
//!    continuation lines keep appending);
//! 3. indented line: absorbs the following same-indentation run in one jump,
//!    with a list-item exception and a prefix-driven re-scan;
//! 4. anything else: appends to the open accumulator.

use crate::classify::{
    is_blank, is_indented, is_indented_start_of_list_item, is_latex_command,
    is_start_of_list_item,
};
use crate::prefix::detect_multiline_prefix;

/// Split `text` into structural blocks.
///
/// Concatenating the returned blocks with `\n` between them reproduces
/// `text` exactly.
///
/// # Example
///
/// ```
/// use reflow::text_to_blocks;
///
/// let blocks = text_to_blocks("a paragraph\nstill the paragraph\n\n1. an item");
/// assert_eq!(blocks.len(), 3);
/// assert_eq!(blocks[1], "");
/// assert_eq!(blocks[2], "1. an item");
/// ```
#[must_use]
pub fn text_to_blocks(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut open = String::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) || is_latex_command(line) {
            flush(&mut blocks, &mut open);
            blocks.push(line.to_string());
            i += 1;
        } else if is_start_of_list_item(line) {
            flush(&mut blocks, &mut open);
            open.push_str(line);
            i += 1;
        } else if is_indented(line) {
            flush(&mut blocks, &mut open);
            let (block, next) = absorb_indented(&lines, i);
            blocks.push(block);
            i = next;
        } else {
            if !open.is_empty() {
                open.push('\n');
            }
            open.push_str(line);
            i += 1;
        }
    }
    flush(&mut blocks, &mut open);
    blocks
}

fn flush(blocks: &mut Vec<String>, open: &mut String) {
    if !open.is_empty() {
        blocks.push(std::mem::take(open));
    }
}

/// Absorb the indented run starting at `lines[start]`.
///
/// Returns the joined block and the cursor position just past it.
///
/// An indented list item stops at the next indented list item or LaTeX
/// command line, so each entry of an indented list becomes its own block.
/// For other indented groups, if the absorbed lines turn out to share a
/// longer prefix than raw indentation (a comment margin, typically), the run
/// is re-scanned with that prefix as the inclusion test.
fn absorb_indented(lines: &[&str], start: usize) -> (String, usize) {
    let first = lines[start];
    let indent: String = first.chars().take_while(|c| c.is_whitespace()).collect();
    let is_item = is_indented_start_of_list_item(first);

    let mut end = start + 1;
    while end < lines.len() && absorbs(lines[end], &indent, is_item) {
        end += 1;
    }
    let mut block = lines[start..end].join("\n");

    if !is_item && end - start > 1 {
        let prefix = detect_multiline_prefix(&block);
        if !prefix.is_empty() && prefix != indent {
            let mut end2 = start + 1;
            while end2 < lines.len() && !is_blank(lines[end2]) && lines[end2].starts_with(&prefix) {
                end2 += 1;
            }
            end = end2;
            block = lines[start..end].join("\n");
        }
    }
    (block, end)
}

/// Whether `line` belongs to the indented run opened with `indent`.
fn absorbs(line: &str, indent: &str, is_item: bool) -> bool {
    if is_blank(line) || !line.starts_with(indent) {
        return false;
    }
    // Same depth only: a deeper-indented line opens its own block.
    if line[indent.len()..].starts_with(char::is_whitespace) {
        return false;
    }
    if is_item && (is_indented_start_of_list_item(line) || is_latex_command(line)) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(blocks: &[String]) -> String {
        blocks.join("\n")
    }

    #[test]
    fn test_blank_lines_are_their_own_blocks() {
        let text = "para one\n\npara two";
        let blocks = text_to_blocks(text);
        assert_eq!(blocks, vec!["para one", "", "para two"]);
        assert_eq!(rejoin(&blocks), text);
    }

    #[test]
    fn test_latex_commands_are_boundaries() {
        let text = "before\n\\begin{itemize}\nafter";
        let blocks = text_to_blocks(text);
        assert_eq!(blocks, vec!["before", "\\begin{itemize}", "after"]);
    }

    #[test]
    fn test_list_items_split_but_keep_continuations() {
        let text = "1. first item\nwrapped continuation\n2. second item";
        let blocks = text_to_blocks(text);
        assert_eq!(
            blocks,
            vec!["1. first item\nwrapped continuation", "2. second item"]
        );
    }

    #[test]
    fn test_indented_group_absorbed_as_one_block() {
        let text = "    one\n    two\n    three\n\nflush";
        let blocks = text_to_blocks(text);
        assert_eq!(blocks, vec!["    one\n    two\n    three", "", "flush"]);
    }

    #[test]
    fn test_indented_list_items_are_separate_blocks() {
        let text = "    1. first\n    2. second\n    continuation of second";
        let blocks = text_to_blocks(text);
        assert_eq!(
            blocks,
            vec!["    1. first", "    2. second\n    continuation of second"]
        );
    }

    #[test]
    fn test_indented_item_stops_at_latex_command() {
        let text = "    \\item one\n    \\begin{enumerate}";
        let blocks = text_to_blocks(text);
        assert_eq!(blocks, vec!["    \\item one", "    \\begin{enumerate}"]);
    }

    #[test]
    fn test_deeper_indentation_opens_new_block() {
        let text = "  shallow\n      deeper\n  shallow again";
        let blocks = text_to_blocks(text);
        assert_eq!(blocks, vec!["  shallow", "      deeper", "  shallow again"]);
    }

    #[test]
    fn test_comment_block_stays_whole_across_bare_marker_lines() {
        let text = "    // one\n    //\n    // two";
        let blocks = text_to_blocks(text);
        assert_eq!(blocks, vec![text]);
    }

    #[test]
    fn test_trailing_newline_yields_trailing_blank_block() {
        let blocks = text_to_blocks("para\n");
        assert_eq!(blocks, vec!["para", ""]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(text_to_blocks(""), vec![""]);
    }

    #[test]
    fn test_segmentation_is_lossless() {
        let text = "title\n\n    1. a\n    2. b\n    b continued\n\n\\end{x}\n\n  // c\n  // d\n";
        assert_eq!(rejoin(&text_to_blocks(text)), text);
    }
}
