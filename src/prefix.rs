//! Prefix and indentation analysis
//!
//! A block's *prefix* is the decoration every one of its lines starts with: a
//! run of indentation, a comment marker like `// `, a quote margin. The
//! orchestrator strips it, reflows the bare content, and puts it back, so the
//! decoration survives the reflow unchanged.
//!
//! Detection is literal, character by character, and the result is
//! guaranteed to be an actual prefix of every line. Three heuristics then
//! keep it honest:
//!
//! 1. a candidate that itself looks like an indented list bullet is
//!    discarded — bullets belong to the first line only, not to the block;
//! 2. a candidate that is a bare comment marker (`//`, `--`, `"`, `*`, `#`
//!    after optional indentation) keeps the marker but drops trailing space
//!    padding, so comment blocks with empty comment lines still share it;
//! 3. anything from the first word character onward is cut — content is
//!    never part of a prefix.

use crate::classify::is_indented_start_of_list_item;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn comment_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*(//|--|"|\*|#)\s*$"#)
            .unwrap_or_else(|err| panic!("invalid comment marker regex: {err}"))
    })
}

/// Leading whitespace shared by every line of `text`.
///
/// Returns the first line's leading whitespace run if every other line also
/// starts with that exact run, and the empty string otherwise.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when given zero lines. Splitting a `&str`
/// on `\n` always yields at least one line, so callers passing ordinary
/// strings never see this.
pub fn detect_indentation(text: &str) -> Result<String> {
    let mut lines = text.split('\n');
    let first = lines.next().ok_or(Error::EmptyInput)?;

    let indent: String = first.chars().take_while(|c| c.is_whitespace()).collect();
    if indent.is_empty() {
        return Ok(indent);
    }
    for line in lines {
        if !line.starts_with(&indent) {
            return Ok(String::new());
        }
    }
    Ok(indent)
}

/// Maximal shared leading string of a multi-line block, restricted to
/// non-content characters.
///
/// Extends a candidate one character at a time while every subsequent line
/// matches the first line at that position, then applies the module-level
/// heuristics. Returns the empty string for blocks of fewer than two lines.
///
/// # Example
///
/// ```
/// use reflow::detect_multiline_prefix;
///
/// let block = "    // first comment line\n    // second\n    //";
/// assert_eq!(detect_multiline_prefix(block), "    //");
/// ```
#[must_use]
pub fn detect_multiline_prefix(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return String::new();
    }

    let rest: Vec<Vec<char>> = lines[1..].iter().map(|l| l.chars().collect()).collect();
    let mut prefix = String::new();
    for (i, c) in lines[0].chars().enumerate() {
        if rest.iter().all(|line| line.get(i) == Some(&c)) {
            prefix.push(c);
        } else {
            break;
        }
    }

    // Bullets apply to the first line only, never to the whole block.
    if is_indented_start_of_list_item(&prefix) {
        return String::new();
    }

    if comment_marker_re().is_match(&prefix) {
        return prefix.trim_end_matches(' ').to_string();
    }

    if let Some(pos) = prefix.find(|c: char| c.is_alphanumeric() || c == '_') {
        prefix.truncate(pos);
    }
    prefix
}

/// Remove `prefix` once from every line of `text`.
///
/// Exact inverse of [`prepend_multiline_prefix`] whenever `prefix` is a
/// literal prefix of every line. Lines that do not contain `prefix` are left
/// untouched.
#[must_use]
pub fn remove_multiline_prefix(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| line.replacen(prefix, "", 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepend `prefix` to every line of `text`.
#[must_use]
pub fn prepend_multiline_prefix(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
