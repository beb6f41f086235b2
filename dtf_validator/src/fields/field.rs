//! Pattern field representation
//!
//! A field is a maximal run of identical consecutive letters in a format
//! pattern (`MMM` in `dd MMM yyyy`). Fields are the unit of classification:
//! the rule table judges a (letter, count) pair, never individual
//! characters. Quoted literal text never forms a field.

use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check whether a character can begin a pattern field.
///
/// Only ASCII letters are interpreted; every other character outside a
/// quoted literal is separator text emitted verbatim by the formatter.
pub fn is_pattern_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// One maximal run of identical consecutive letters.
///
/// Immutable once produced by the scanner; lives for a single validation
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternField {
    /// The repeated pattern letter
    pub letter: char,
    /// Run length, always >= 1
    pub count: usize,
    /// Location of the run inside the pattern string
    pub span: Span,
}

impl PatternField {
    /// Create a new field
    pub fn new(letter: char, count: usize, span: Span) -> Self {
        debug_assert!(count >= 1, "a field is at least one letter long");
        Self {
            letter,
            count,
            span,
        }
    }

    /// Reconstruct the literal text of this field (`'M'` x 3 -> `"MMM"`)
    pub fn literal(&self) -> String {
        std::iter::repeat(self.letter).take(self.count).collect()
    }
}

impl fmt::Display for PatternField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.literal(), self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_letter_predicate() {
        assert!(is_pattern_letter('a'));
        assert!(is_pattern_letter('Z'));
        assert!(!is_pattern_letter('-'));
        assert!(!is_pattern_letter('\''));
        assert!(!is_pattern_letter('é'));
        assert!(!is_pattern_letter('0'));
    }

    #[test]
    fn test_field_literal() {
        let field = PatternField::new('M', 3, Span::new(3, 6));
        assert_eq!(field.literal(), "MMM");
        assert_eq!(field.to_string(), "MMM at 3-6");
    }

    #[test]
    fn test_single_letter_field() {
        let field = PatternField::new('d', 1, Span::single(8));
        assert_eq!(field.literal(), "d");
        assert_eq!(field.span.len(), 1);
    }
}
