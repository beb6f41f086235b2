//! Declarative field rule table
//!
//! One `FieldRule` per recognized pattern letter. The table is the single
//! source of truth for which (letter, count) combinations the engine
//! accepts, which ones changed meaning across engine versions, and which
//! ones are structurally malformed. Built once, read-only for the life of
//! the process; concurrent lookups need no coordination.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Disposition of a pattern letter independent of its repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    /// Valid for the counts described by the rule's bounds
    Supported,
    /// Structurally well-formed but semantics changed across engine
    /// versions; only the legacy engine interprets it
    LegacyOnly,
    /// Never valid, regardless of count
    Forbidden,
    /// Week-based field, removed in favor of EXTRACT
    WeekBased,
}

/// What happens when a supported letter exceeds its maximum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// The legacy engine accepted the longer run: version-gated rejection
    Legacy,
    /// No engine version accepts the longer run: structural rejection
    TooMany,
}

/// Allowed repeat counts for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountBounds {
    /// The letter's status alone decides; count is irrelevant
    Any,
    /// Counts `1..=max` are valid; longer runs degrade per `overflow`
    UpTo { max: usize, overflow: Overflow },
    /// Only the listed counts are valid; anything else is a count mismatch
    Exactly(&'static [usize]),
}

/// Static rule record for one pattern letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub letter: char,
    pub status: LetterStatus,
    pub counts: CountBounds,
}

impl FieldRule {
    const fn new(letter: char, status: LetterStatus, counts: CountBounds) -> Self {
        Self {
            letter,
            status,
            counts,
        }
    }
}

use CountBounds::{Any, Exactly, UpTo};
use LetterStatus::{Forbidden, LegacyOnly, Supported, WeekBased};
use Overflow::{Legacy, TooMany};

/// The complete rule set.
///
/// Width limits follow the strict parser; the `Legacy` overflow marks the
/// widths the old engine still accepted (narrow text forms, unpadded
/// numeric runs), which must surface as a version-compatibility diagnostic
/// rather than a plain rejection.
static RULES: &[FieldRule] = &[
    // Era and year
    FieldRule::new('G', Supported, UpTo { max: 4, overflow: Legacy }),
    FieldRule::new('y', Supported, UpTo { max: 10, overflow: Legacy }),
    // Month and quarter
    FieldRule::new('M', Supported, UpTo { max: 4, overflow: Legacy }),
    FieldRule::new('L', Supported, UpTo { max: 4, overflow: Legacy }),
    FieldRule::new('Q', Supported, UpTo { max: 4, overflow: TooMany }),
    FieldRule::new('q', Supported, UpTo { max: 4, overflow: TooMany }),
    // Day
    FieldRule::new('d', Supported, UpTo { max: 2, overflow: Legacy }),
    FieldRule::new('D', Supported, UpTo { max: 3, overflow: Legacy }),
    FieldRule::new('E', Supported, UpTo { max: 4, overflow: Legacy }),
    FieldRule::new('F', Supported, UpTo { max: 1, overflow: Legacy }),
    // Time of day
    FieldRule::new('a', Supported, UpTo { max: 1, overflow: Legacy }),
    FieldRule::new('h', Supported, UpTo { max: 2, overflow: Legacy }),
    FieldRule::new('H', Supported, UpTo { max: 2, overflow: Legacy }),
    FieldRule::new('k', Supported, UpTo { max: 2, overflow: Legacy }),
    FieldRule::new('K', Supported, UpTo { max: 2, overflow: Legacy }),
    FieldRule::new('m', Supported, UpTo { max: 2, overflow: Legacy }),
    FieldRule::new('s', Supported, UpTo { max: 2, overflow: Legacy }),
    FieldRule::new('S', Supported, UpTo { max: 9, overflow: Legacy }),
    // Zone and offset
    FieldRule::new('V', Supported, Exactly(&[2])),
    FieldRule::new('z', Supported, UpTo { max: 4, overflow: Legacy }),
    FieldRule::new('O', Supported, Exactly(&[1, 4])),
    FieldRule::new('X', Supported, UpTo { max: 5, overflow: TooMany }),
    FieldRule::new('x', Supported, UpTo { max: 5, overflow: TooMany }),
    FieldRule::new('Z', Supported, UpTo { max: 5, overflow: Legacy }),
    // Week-based fields only the legacy engine interprets
    FieldRule::new('Y', LegacyOnly, Any),
    FieldRule::new('w', LegacyOnly, Any),
    FieldRule::new('W', LegacyOnly, Any),
    FieldRule::new('u', LegacyOnly, Any),
    // Week-based fields with a dedicated replacement
    FieldRule::new('e', WeekBased, Any),
    FieldRule::new('c', WeekBased, Any),
    // Never valid
    FieldRule::new('A', Forbidden, Any),
    FieldRule::new('n', Forbidden, Any),
    FieldRule::new('N', Forbidden, Any),
    FieldRule::new('p', Forbidden, Any),
    FieldRule::new('B', Forbidden, Any),
];

/// Rule index keyed by letter, built on first access
static RULE_INDEX: OnceLock<HashMap<char, &'static FieldRule>> = OnceLock::new();

fn rule_index() -> &'static HashMap<char, &'static FieldRule> {
    RULE_INDEX.get_or_init(|| RULES.iter().map(|rule| (rule.letter, rule)).collect())
}

/// Look up the rule for a pattern letter.
///
/// `None` means the letter is unknown to every engine version.
pub fn lookup(letter: char) -> Option<&'static FieldRule> {
    rule_index().get(&letter).copied()
}

/// All rule records, for diagnostics and data-driven tests
pub fn all_rules() -> &'static [FieldRule] {
    RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_letter_has_exactly_one_rule() {
        let mut seen = HashSet::new();
        for rule in all_rules() {
            assert!(
                seen.insert(rule.letter),
                "duplicate rule for letter {}",
                rule.letter
            );
        }
    }

    #[test]
    fn test_lookup_known_letters() {
        assert_eq!(lookup('y').unwrap().status, LetterStatus::Supported);
        assert_eq!(lookup('A').unwrap().status, LetterStatus::Forbidden);
        assert_eq!(lookup('e').unwrap().status, LetterStatus::WeekBased);
        assert_eq!(lookup('Y').unwrap().status, LetterStatus::LegacyOnly);
    }

    #[test]
    fn test_lookup_unknown_letters() {
        assert!(lookup('C').is_none());
        assert!(lookup('b').is_none());
        assert!(lookup('T').is_none());
        assert!(lookup('-').is_none());
    }

    #[test]
    fn test_exact_count_rules() {
        assert_eq!(lookup('V').unwrap().counts, CountBounds::Exactly(&[2]));
        assert_eq!(lookup('O').unwrap().counts, CountBounds::Exactly(&[1, 4]));
    }

    #[test]
    fn test_non_supported_rules_ignore_count() {
        for rule in all_rules() {
            if rule.status != LetterStatus::Supported {
                assert_eq!(
                    rule.counts,
                    CountBounds::Any,
                    "letter {} has count bounds but a status that ignores them",
                    rule.letter
                );
            }
        }
    }

    #[test]
    fn test_concurrent_lookup() {
        // The index is read-only after construction; hammer it from
        // several threads to make sure no coordination is needed.
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    for _ in 0..1_000 {
                        assert!(lookup('y').is_some());
                        assert!(lookup('C').is_none());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
