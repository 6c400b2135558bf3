//! Pattern matching over text with code-point offsets

use crate::info_type::InfoTypePattern;
use serde::{Deserialize, Serialize};

/// A span of text recognized by one info type
///
/// Offsets count Unicode scalar values (code points), not bytes.
/// Invariant: `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// First code point of the span
    pub start: usize,

    /// One past the last code point of the span
    pub end: usize,

    /// Name of the info type that produced the span
    pub info_type: String,
}

impl Match {
    /// Number of code points covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the two spans share at least one code point
    pub fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Find all non-overlapping occurrences of `pattern` in `text`, left to right
pub fn find(text: &str, pattern: &InfoTypePattern) -> Vec<Match> {
    let mut matches = Vec::new();
    if text.is_empty() {
        return matches;
    }

    // Hits arrive in ascending byte order, so one cursor converts them all
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for hit in pattern.regex().find_iter(text) {
        if hit.is_empty() || !pattern.accepts(hit.as_str()) {
            continue;
        }

        char_cursor += text[byte_cursor..hit.start()].chars().count();
        let start = char_cursor;
        char_cursor += hit.as_str().chars().count();
        byte_cursor = hit.end();

        matches.push(Match {
            start,
            end: char_cursor,
            info_type: pattern.name().to_string(),
        });
    }

    matches
}
