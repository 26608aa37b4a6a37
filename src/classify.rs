//! Line role classification
//!
//! Stateless predicates over a single line of text. The segmenter uses these
//! to decide where one structural block ends and the next begins; the
//! orchestrator uses them to route each block to the right justifier.
//!
//! The grammar is deliberately a flat pattern table rather than a type
//! hierarchy: every predicate takes one line and returns a boolean, with no
//! error conditions (the empty string is a valid input to all of them).
//!
//! # Bullet grammar
//!
//! A list item starts with one of:
//!
//! - a decimal index: `1.`, `12)`
//! - a single letter or roman numeral index: `a)`, `B.`, `iv.`, `XI)`
//! - a literal `-` or `*`
//! - the LaTeX `\item` token
//! - a bracketed index: `[3]`
//!
//! followed by a single space. The indented variant allows leading
//! whitespace before the bullet.

use regex::Regex;
use std::sync::OnceLock;

/// Bullet alternatives, without anchors or the trailing space.
const BULLET: &str = r"\d+[.)]|[IVXLCDMivxlcdm]+[.)]|[A-Za-z][.)]|[*-]|\\item|\[\d+\]";

fn regex(pattern: &str, desc: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid {desc} regex: {err}"))
}

fn list_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(&format!("^({BULLET}) "), "list item"))
}

fn indented_list_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(&format!(r"^\s+({BULLET}) "), "indented list item"))
}

fn latex_command_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^\s*\\[a-z]+(\[.*?\])?\{.*?\}$", "latex command"))
}

fn markdown_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex("^#+ .+", "markdown title"))
}

fn man_page_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^(\w ?)+$", "man page title"))
}

/// Line is empty or consists only of whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Line starts with a tab or with at least two consecutive spaces.
///
/// A single leading space is not indentation: comment blocks commonly leave
/// one space after the marker, and treating that as deliberate indentation
/// would misroute the block.
#[must_use]
pub fn is_indented(line: &str) -> bool {
    line.starts_with('\t') || line.starts_with("  ")
}

/// Line starts a list item: a bullet at column zero followed by one space.
#[must_use]
pub fn is_start_of_list_item(line: &str) -> bool {
    list_item_re().is_match(line)
}

/// Line starts a list item after leading whitespace.
#[must_use]
pub fn is_indented_start_of_list_item(line: &str) -> bool {
    indented_list_item_re().is_match(line)
}

/// The matched bullet of a list-item line, including its trailing space.
///
/// Returns `None` when the line does not start a list item. The match length
/// is the hanging-indent width the list-item justifier uses for continuation
/// lines.
#[must_use]
pub(crate) fn list_item_bullet(line: &str) -> Option<&str> {
    list_item_re().find(line).map(|m| m.as_str())
}

/// Line is, in its entirety, a LaTeX command: optional indentation then
/// `\name{...}` or `\name[...]{...}`.
///
/// Such lines (`\begin{itemize}`, `\end{enumerate}`, `\section{...}`) are
/// hard block boundaries and are passed through verbatim.
#[must_use]
pub fn is_latex_command(line: &str) -> bool {
    latex_command_re().is_match(line)
}

/// Line is a markdown heading: one or more `#` then a space then content.
#[must_use]
pub fn is_markdown_title(line: &str) -> bool {
    markdown_title_re().is_match(line)
}

/// Line looks like an all-caps section header, e.g. `NAME` or `S Y N O P S I S`.
///
/// Heuristic: only word characters optionally separated by single spaces,
/// and no lowercase letter anywhere.
#[must_use]
pub fn is_man_page_title(line: &str) -> bool {
    man_page_title_re().is_match(line) && !line.chars().any(char::is_lowercase)
}

/// Line is a title of either kind.
#[must_use]
pub fn is_title(line: &str) -> bool {
    is_markdown_title(line) || is_man_page_title(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t \t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_is_indented() {
        assert!(is_indented("  two spaces"));
        assert!(is_indented("\ttab"));
        assert!(is_indented("        deep"));
        assert!(!is_indented(" one space"));
        assert!(!is_indented("flush"));
        assert!(!is_indented(""));
    }

    #[test]
    fn test_list_item_bullets() {
        for line in [
            "- dash",
            "* star",
            "\\item latex",
            "1. numbered",
            "12) numbered paren",
            "a) lettered",
            "B. lettered",
            "iv. roman",
            "XI) roman",
            "[3] bracketed",
        ] {
            assert!(is_start_of_list_item(line), "expected list item: {line:?}");
        }
    }

    #[test]
    fn test_not_list_items() {
        assert!(!is_start_of_list_item("plain prose line"));
        assert!(!is_start_of_list_item("-no space after dash"));
        assert!(!is_start_of_list_item("1.missing space"));
        assert!(!is_start_of_list_item("  1. indented"));
        assert!(!is_start_of_list_item(""));
    }

    #[test]
    fn test_indented_list_items() {
        assert!(is_indented_start_of_list_item("    1. item"));
        assert!(is_indented_start_of_list_item("\t* item"));
        assert!(is_indented_start_of_list_item("     * "));
        assert!(!is_indented_start_of_list_item("1. not indented"));
        assert!(!is_indented_start_of_list_item("    plain"));
    }

    #[test]
    fn test_list_item_bullet_match() {
        assert_eq!(list_item_bullet("12. item"), Some("12. "));
        assert_eq!(list_item_bullet("\\item text"), Some("\\item "));
        assert_eq!(list_item_bullet("[7] ref"), Some("[7] "));
        assert_eq!(list_item_bullet("prose"), None);
    }

    #[test]
    fn test_latex_commands() {
        assert!(is_latex_command("\\begin{itemize}"));
        assert!(is_latex_command("    \\end{enumerate}"));
        assert!(is_latex_command("\\usepackage[utf8]{inputenc}"));
        assert!(!is_latex_command("\\item trailing text"));
        assert!(!is_latex_command("prose with \\emph{markup}"));
    }

    #[test]
    fn test_titles() {
        assert!(is_markdown_title("# Title"));
        assert!(is_markdown_title("### Deep title"));
        assert!(!is_markdown_title("#missing space"));
        assert!(is_man_page_title("NAME"));
        assert!(is_man_page_title("S Y N O P S I S"));
        assert!(!is_man_page_title("Mixed Case"));
        assert!(!is_man_page_title(""));
        assert!(is_title("# md"));
        assert!(is_title("OPTIONS"));
        assert!(!is_title("prose"));
    }
}
