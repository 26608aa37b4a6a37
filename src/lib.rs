//! Structure-preserving plain-text justification.
//!
//! Reflows prose to a fixed column width with full justification (every line
//! except the last padded to exactly the target width) while keeping the
//! document's structure intact: paragraph breaks, list items with hanging
//! indents, comment margins, LaTeX command lines, and nested indentation all
//! survive the reflow.
//!
//! # Pipeline
//!
//! ```text
//!            +----------+     +---------+     +-----------------+
//!  text ---> | segment  | --> | prefix  | --> | pack / recurse  | --> text
//!            | (blocks) |     | (strip) |     | (justify_block) |
//!            +----------+     +---------+     +-----------------+
//!                  ^                                  |
//!                  +------ classify (line roles) -----+
//! ```
//!
//! - [`classify`] holds the stateless line predicates (blank, indented, list
//!   item, LaTeX command, title) the other stages route on.
//! - [`segment`] splits a document into structural blocks; rejoining the
//!   blocks with `\n` reproduces the input exactly.
//! - [`prefix`] detects, strips, and restores per-block decoration such as
//!   indentation and comment margins.
//! - [`pack`] is the greedy word packer and exact-width space distributor.
//! - The top level ties these together, recursing into stripped content up
//!   to a configurable depth so nested structure is reflowed on its own
//!   terms.
//!
//! # Example
//!
//! ```
//! let text = "A rather long paragraph of plain prose that should be \
//!             rewrapped and padded out to the target width.";
//! let out = reflow::justify(text, 30, 3).unwrap();
//! for line in out.split('\n') {
//!     assert!(line.chars().count() <= 30);
//! }
//! ```
//!
//! Widths are measured in `char`s throughout; a single word longer than the
//! target width is emitted on its own line rather than split.

pub mod classify;
pub mod error;
pub mod pack;
pub mod prefix;
pub mod segment;

mod justify;

pub use classify::{
    is_blank, is_indented, is_indented_start_of_list_item, is_latex_command, is_markdown_title,
    is_man_page_title, is_start_of_list_item, is_title,
};
pub use error::{Error, Result};
pub use justify::{
    justify, justify_list_item, justify_with_options, JustifyOptions, DEFAULT_DEPTH,
    DEFAULT_WIDTH,
};
pub use pack::justify_block;
pub use prefix::{
    detect_indentation, detect_multiline_prefix, prepend_multiline_prefix,
    remove_multiline_prefix,
};
pub use segment::text_to_blocks;
