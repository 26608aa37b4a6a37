//! Line packing and full justification
//!
//! Pure greedy word wrap over a single block of prose at a fixed width, with
//! exact-width space distribution. The packer knows nothing about structure:
//! prefixes and bullets are stripped before the text gets here and restored
//! afterwards.
//!
//! # Algorithm
//!
//! 1. Collapse all whitespace (including line breaks) and split into words.
//! 2. Pack greedily: a line is closed as soon as the next word would reach
//!    or exceed the target width.
//! 3. For every line but the last, distribute the missing columns across the
//!    gaps between words: `extra / gaps` added to each gap, with the
//!    remainder widening the rightmost gaps by one more space each.
//! 4. The last line is joined with single spaces and left unpadded.
//!
//! A line holding a single word is emitted as is; an overlong word is never
//! split or hyphenated, so such a line may exceed the target width.
//!
//! Widths are measured in `char`s.

/// One in-progress output line: its words and their length joined by single
/// spaces.
#[derive(Debug, Default)]
struct Sentence<'a> {
    words: Vec<&'a str>,
    len: usize,
}

impl<'a> Sentence<'a> {
    fn push(&mut self, word: &'a str, word_len: usize) {
        if self.words.is_empty() {
            self.len = word_len;
        } else {
            self.len += word_len + 1;
        }
        self.words.push(word);
    }

    /// Render at exactly `width` chars by widening inter-word gaps.
    ///
    /// The remainder of the division goes to the rightmost gaps, one extra
    /// space each.
    fn justified(&self, width: usize) -> String {
        let n_words = self.words.len();
        if n_words <= 1 {
            return self.words.concat();
        }

        let gaps = n_words - 1;
        let extra = width.saturating_sub(self.len);
        let per_gap = extra / gaps;
        let remainder = extra % gaps;

        let mut line = String::with_capacity(width.max(self.len));
        for (i, word) in self.words.iter().enumerate() {
            line.push_str(word);
            if i < gaps {
                let mut spaces = 1 + per_gap;
                if i >= gaps - remainder {
                    spaces += 1;
                }
                for _ in 0..spaces {
                    line.push(' ');
                }
            }
        }
        line
    }
}

/// Rewrap a block of prose to lines of exactly `width` chars.
///
/// Every output line except the final one is padded to exactly `width`;
/// the final line is left-aligned. Word order is preserved and no word is
/// ever dropped, duplicated, or split.
///
/// # Example
///
/// ```
/// use reflow::justify_block;
///
/// let out = justify_block("pack these words to width", 11);
/// assert_eq!(out, "pack  these\nwords    to\nwidth");
/// ```
#[must_use]
pub fn justify_block(text: &str, width: usize) -> String {
    let mut sentences: Vec<Sentence> = Vec::new();
    let mut current = Sentence::default();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        // Strict close: the line ends as soon as the next word would reach
        // the target width, so the padded form never overshoots it.
        if !current.words.is_empty() && current.len + word_len >= width {
            sentences.push(std::mem::take(&mut current));
        }
        current.push(word, word_len);
    }

    let mut out = String::new();
    for sentence in &sentences {
        out.push_str(&sentence.justified(width));
        out.push('\n');
    }
    out.push_str(&current.words.join(" "));
    out
}
