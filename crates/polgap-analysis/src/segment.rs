//! # Policy Segmentation
//!
//! Splits raw policy text into sentence-level [`Segment`]s. A sentence ends
//! at `.`, `!` or `?` followed by at least one whitespace character; the
//! terminator and the whitespace run are consumed by the split.
//!
//! Fragments shorter than [`MIN_SEGMENT_LENGTH`] characters (after trimming)
//! are dropped, not merged. A segment's id is its index among *all* split
//! fragments, so dropped fragments leave gaps in the id sequence and ids are
//! stable regardless of the length filter.

use serde::{Deserialize, Serialize};

use polgap_core::normalize;

/// Minimum length, in characters, of a retained segment.
pub const MIN_SEGMENT_LENGTH: usize = 25;

/// One sentence-level unit of policy text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Index of the fragment in the original split order.
    pub id: usize,
    /// Trimmed original text.
    pub text: String,
    /// Normalized form of `text`.
    pub normalized: String,
}

/// Lazily segment `text` with the default minimum length.
pub fn segment_policy(text: &str) -> Segments<'_> {
    segment_policy_with(text, MIN_SEGMENT_LENGTH)
}

/// Lazily segment `text`, keeping fragments of at least `min_length` characters.
pub fn segment_policy_with(text: &str, min_length: usize) -> Segments<'_> {
    Segments {
        text,
        cursor: if text.is_empty() { None } else { Some(0) },
        index: 0,
        min_length,
    }
}

/// Iterator over the retained segments of a policy text.
///
/// Borrows the text and holds no other state; clone it to restart.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    /// Byte offset of the next fragment, `None` once the text is exhausted.
    cursor: Option<usize>,
    index: usize,
    min_length: usize,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let start = self.cursor?;
            let rest = &self.text[start..];
            let fragment = match find_boundary(rest) {
                Some((end, resume)) => {
                    self.cursor = Some(start + resume);
                    &rest[..end]
                }
                None => {
                    self.cursor = None;
                    rest
                }
            };

            let id = self.index;
            self.index += 1;

            let trimmed = fragment.trim();
            if trimmed.chars().count() < self.min_length {
                continue;
            }
            return Some(Segment {
                id,
                text: trimmed.to_string(),
                normalized: normalize(trimmed),
            });
        }
    }
}

/// Locate the first sentence boundary in `s`.
///
/// Returns `(fragment_end, resume_at)`: the byte offset of the terminator
/// and the byte offset just past the whitespace run that follows it.
fn find_boundary(s: &str) -> Option<(usize, usize)> {
    for (i, c) in s.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let after = i + c.len_utf8();
        let ws_len: usize = s[after..]
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        if ws_len > 0 {
            return Some((i, after + ws_len));
        }
    }
    None
}
