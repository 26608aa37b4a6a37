//! Error types for reflow
//!
//! Almost every operation in this crate is total: classification, packing,
//! and prefix removal have defined behavior for empty strings, single-line
//! blocks, and words longer than the target width. The two exceptions are
//! indentation analysis over zero lines and handing the list-item justifier
//! text that does not start with a bullet.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for reflow operations
///
/// # Examples
///
/// ```
/// use reflow::Result;
///
/// fn reflow_readme(text: &str) -> Result<String> {
///     reflow::justify(text, 72, 3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for reflow
///
/// Every call into the crate either returns a complete result or fails
/// atomically with one of these variants; there is no partial-failure state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Indentation analysis was given zero lines of input.
    #[error("no lines to analyze")]
    EmptyInput,

    /// The list-item justifier was given text that does not start with a
    /// recognized bullet (`-`, `*`, `\item`, `N.`, `N)`, `[N]`, ...).
    #[error("not a list item: {line:?}")]
    NotAListItem { line: String },
}
