//! Recursive justification
//!
//! The top-level entry points. [`justify`] segments a document into blocks,
//! strips each block's decoration, reflows the bare content, and restores
//! the decoration; nested structure (a LaTeX environment holding a list
//! whose items hold prose, a comment block quoting an indented list) is
//! handled by recursing into the stripped content with a reduced width and a
//! decremented depth budget.
//!
//! # Data flow
//!
//! ```text
//! text -> segmenter -> blocks -> per block:
//!     list item  -> justify_list_item
//!     blank      -> verbatim
//!     otherwise  -> strip prefix -> recurse (depth > 0) or pack -> restore prefix
//! -> blocks rejoined
//! ```
//!
//! The depth budget is a hard cap, not a hint: when it reaches zero the
//! stripped content is packed flat instead of recursed into. That loses
//! nested structure but never loses words, so exhaustion degrades gracefully
//! rather than erroring.

use crate::classify::{is_blank, is_start_of_list_item, list_item_bullet};
use crate::error::{Error, Result};
use crate::pack::justify_block;
use crate::prefix::{
    detect_indentation, detect_multiline_prefix, prepend_multiline_prefix,
    remove_multiline_prefix,
};
use crate::segment::text_to_blocks;

/// Default target width, in chars.
pub const DEFAULT_WIDTH: usize = 80;

/// Default recursion depth budget.
pub const DEFAULT_DEPTH: usize = 3;

/// Options for the recursive justifier.
///
/// # Example
///
/// ```
/// use reflow::JustifyOptions;
///
/// let options = JustifyOptions::default().with_width(72).with_depth(2);
/// let out = reflow::justify_with_options("some prose to reflow", &options).unwrap();
/// assert_eq!(out, "some prose to reflow");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JustifyOptions {
    /// Target line width in chars.
    pub width: usize,

    /// How many levels of nested structure (indented groups, comment
    /// margins, LaTeX environments) are reflowed with their own internal
    /// structure before degrading to flat packing.
    pub depth: usize,
}

impl Default for JustifyOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl JustifyOptions {
    /// Set the target width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the recursion depth budget.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// Justify `text` with [`JustifyOptions`].
pub fn justify_with_options(text: &str, options: &JustifyOptions) -> Result<String> {
    justify(text, options.width, options.depth)
}

/// Reflow a document to `width` chars, preserving its structure.
///
/// Paragraph boundaries, list items, indented and comment-prefixed groups,
/// and LaTeX command lines all survive; prose inside them is rewrapped and
/// fully justified. Nested structure is reflowed recursively up to `depth`
/// levels deep.
///
/// # Example
///
/// ```
/// use reflow::justify;
///
/// let out = justify("- one two three four five six seven eight", 20, 3).unwrap();
/// assert_eq!(out, "- one two three four\n  five   six   seven\n  eight");
/// ```
///
/// # Errors
///
/// Infallible for ordinary string input; the `Result` carries the
/// [`Error::EmptyInput`] contract of the indentation analyzer it delegates
/// to.
pub fn justify(text: &str, width: usize, depth: usize) -> Result<String> {
    let doc_indent = detect_indentation(text)?;
    let stripped;
    let body = if doc_indent.is_empty() {
        text
    } else {
        stripped = remove_multiline_prefix(text, &doc_indent);
        &stripped
    };
    let inner_width = width.saturating_sub(doc_indent.chars().count());

    let blocks = text_to_blocks(body);
    let mut out = Vec::with_capacity(blocks.len());
    for block in &blocks {
        if is_start_of_list_item(block) {
            let item = justify_list_item(block, inner_width)?;
            out.push(prepend_multiline_prefix(&item, &doc_indent));
        } else if is_blank(block) {
            // Separator blocks pass through verbatim.
            out.push(block.clone());
        } else {
            let mut prefix = detect_multiline_prefix(block);
            if prefix.is_empty() {
                prefix = detect_indentation(block)?;
            }
            let prefix_len = prefix.chars().count();
            let reduced = inner_width.saturating_sub(prefix_len);

            let content = if prefix_len > 0 {
                remove_multiline_prefix(block, &prefix)
            } else {
                block.clone()
            };
            let flowed = if depth > 0 && prefix_len > 0 {
                justify(&content, reduced, depth - 1)?
            } else {
                justify_block(&content, reduced)
            };
            let full_prefix = format!("{doc_indent}{prefix}");
            out.push(prepend_multiline_prefix(&flowed, &full_prefix));
        }
    }
    Ok(out.join("\n"))
}

/// Reflow a single list item to `width` chars with a hanging indent.
///
/// The bullet (with its trailing space) defines the indent width: the body
/// is packed at `width` minus that, every line is indented by it, and the
/// first line's padding is replaced by the bullet itself, so continuation
/// lines align under the text, not under the bullet.
///
/// # Errors
///
/// Returns [`Error::NotAListItem`] when `text` does not start with a
/// recognized bullet.
pub fn justify_list_item(text: &str, width: usize) -> Result<String> {
    let bullet = list_item_bullet(text).ok_or_else(|| Error::NotAListItem {
        line: text.split('\n').next().unwrap_or_default().to_string(),
    })?;
    let pad = bullet.chars().count();
    let body = &text[bullet.len()..];

    let packed = justify_block(body, width.saturating_sub(pad));
    let indent = " ".repeat(pad);

    let mut lines = packed.split('\n');
    let first = lines.next().unwrap_or_default();
    let mut out = format!("{bullet}{first}");
    for line in lines {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(line);
    }
    Ok(out)
}
