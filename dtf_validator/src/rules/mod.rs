//! Per-field classification rules
//!
//! The rule table decides, for each field the scanner produces, whether
//! the (letter, count) combination is supported, version-gated, or
//! structurally malformed.

pub mod table;

pub use table::{all_rules, lookup, CountBounds, FieldRule, LetterStatus, Overflow};

use crate::fields::PatternField;

/// Classification of a single (letter, count) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Well-formed and supported
    Supported,
    /// Accepted by the legacy engine only; version-compatibility diagnostic
    Legacy,
    /// Letter is never valid
    Forbidden,
    /// Week-based field, removed in favor of EXTRACT
    WeekBased,
    /// Letter has no rule entry in any engine version
    Unknown,
    /// Open upper bound exceeded
    TooMany,
    /// Closed count set missed; `allowed` lists the valid counts
    CountMismatch { allowed: &'static [usize] },
}

/// Classify a (letter, count) pair against the rule table.
pub fn classify(letter: char, count: usize) -> FieldClass {
    let rule = match table::lookup(letter) {
        Some(rule) => rule,
        None => return FieldClass::Unknown,
    };

    match rule.status {
        LetterStatus::Forbidden => FieldClass::Forbidden,
        LetterStatus::WeekBased => FieldClass::WeekBased,
        LetterStatus::LegacyOnly => FieldClass::Legacy,
        LetterStatus::Supported => match rule.counts {
            CountBounds::Any => FieldClass::Supported,
            CountBounds::UpTo { max, overflow } => {
                if count <= max {
                    FieldClass::Supported
                } else {
                    match overflow {
                        Overflow::Legacy => FieldClass::Legacy,
                        Overflow::TooMany => FieldClass::TooMany,
                    }
                }
            }
            CountBounds::Exactly(allowed) => {
                if allowed.contains(&count) {
                    FieldClass::Supported
                } else {
                    FieldClass::CountMismatch { allowed }
                }
            }
        },
    }
}

/// Classify a scanned field.
pub fn classify_field(field: &PatternField) -> FieldClass {
    classify(field.letter, field.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_combinations() {
        assert_eq!(classify('y', 4), FieldClass::Supported);
        assert_eq!(classify('M', 3), FieldClass::Supported);
        assert_eq!(classify('d', 2), FieldClass::Supported);
        assert_eq!(classify('H', 2), FieldClass::Supported);
        assert_eq!(classify('S', 9), FieldClass::Supported);
        assert_eq!(classify('V', 2), FieldClass::Supported);
        assert_eq!(classify('O', 1), FieldClass::Supported);
        assert_eq!(classify('O', 4), FieldClass::Supported);
        assert_eq!(classify('X', 5), FieldClass::Supported);
        assert_eq!(classify('Z', 5), FieldClass::Supported);
    }

    #[test]
    fn test_narrow_text_forms_are_legacy() {
        assert_eq!(classify('G', 5), FieldClass::Legacy);
        assert_eq!(classify('M', 5), FieldClass::Legacy);
        assert_eq!(classify('L', 5), FieldClass::Legacy);
        assert_eq!(classify('E', 5), FieldClass::Legacy);
    }

    #[test]
    fn test_overlong_numeric_runs_are_legacy() {
        assert_eq!(classify('d', 3), FieldClass::Legacy);
        assert_eq!(classify('D', 4), FieldClass::Legacy);
        assert_eq!(classify('H', 3), FieldClass::Legacy);
        assert_eq!(classify('h', 3), FieldClass::Legacy);
        assert_eq!(classify('k', 3), FieldClass::Legacy);
        assert_eq!(classify('K', 3), FieldClass::Legacy);
        assert_eq!(classify('m', 3), FieldClass::Legacy);
        assert_eq!(classify('s', 3), FieldClass::Legacy);
        assert_eq!(classify('S', 10), FieldClass::Legacy);
        assert_eq!(classify('y', 11), FieldClass::Legacy);
        assert_eq!(classify('a', 2), FieldClass::Legacy);
        assert_eq!(classify('F', 2), FieldClass::Legacy);
        assert_eq!(classify('z', 5), FieldClass::Legacy);
        assert_eq!(classify('Z', 6), FieldClass::Legacy);
    }

    #[test]
    fn test_legacy_only_letters_at_any_count() {
        for letter in ['Y', 'w', 'W', 'u'] {
            assert_eq!(classify(letter, 1), FieldClass::Legacy);
            assert_eq!(classify(letter, 5), FieldClass::Legacy);
        }
    }

    #[test]
    fn test_forbidden_letters() {
        for letter in ['A', 'n', 'N', 'p', 'B'] {
            assert_eq!(classify(letter, 1), FieldClass::Forbidden);
            assert_eq!(classify(letter, 3), FieldClass::Forbidden);
        }
    }

    #[test]
    fn test_week_based_letters() {
        assert_eq!(classify('e', 1), FieldClass::WeekBased);
        assert_eq!(classify('c', 2), FieldClass::WeekBased);
    }

    #[test]
    fn test_unknown_letters() {
        assert_eq!(classify('C', 1), FieldClass::Unknown);
        assert_eq!(classify('b', 1), FieldClass::Unknown);
        assert_eq!(classify('T', 2), FieldClass::Unknown);
    }

    #[test]
    fn test_open_bound_violations() {
        assert_eq!(classify('q', 5), FieldClass::TooMany);
        assert_eq!(classify('Q', 5), FieldClass::TooMany);
        assert_eq!(classify('X', 6), FieldClass::TooMany);
        assert_eq!(classify('x', 6), FieldClass::TooMany);
    }

    #[test]
    fn test_closed_set_violations() {
        assert_eq!(classify('V', 1), FieldClass::CountMismatch { allowed: &[2] });
        assert_eq!(classify('V', 3), FieldClass::CountMismatch { allowed: &[2] });
        assert_eq!(
            classify('O', 2),
            FieldClass::CountMismatch { allowed: &[1, 4] }
        );
        assert_eq!(
            classify('O', 5),
            FieldClass::CountMismatch { allowed: &[1, 4] }
        );
    }
}
