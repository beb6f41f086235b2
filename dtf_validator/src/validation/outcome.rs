//! Validation outcome types

use super::error::{InvalidPattern, PatternError, UpgradeDiagnostic};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pattern that passed validation, unchanged from the caller's input.
///
/// Scanning never rewrites the pattern; this wrapper only certifies that
/// every field classified as supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatedPattern(String);

impl ValidatedPattern {
    pub(crate) fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidatedPattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every field classified as supported; carries the original pattern
    Accepted(ValidatedPattern),
    /// First disqualifying field was legacy-only; recoverable through the
    /// configuration toggle named in the diagnostic
    LegacyIncompatible(UpgradeDiagnostic),
    /// First disqualifying field was structurally malformed; fatal
    Invalid(InvalidPattern),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_legacy_incompatible(&self) -> bool {
        matches!(self, Self::LegacyIncompatible(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Short label for logging and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accepted(_) => "Accepted",
            Self::LegacyIncompatible(_) => "LegacyIncompatible",
            Self::Invalid(_) => "Invalid",
        }
    }

    /// Convert into a `Result` for pipeline callers
    pub fn into_result(self) -> Result<ValidatedPattern, PatternError> {
        match self {
            Self::Accepted(pattern) => Ok(pattern),
            Self::LegacyIncompatible(diag) => Err(PatternError::Upgrade(diag)),
            Self::Invalid(invalid) => Err(PatternError::Invalid(invalid)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    #[test]
    fn test_accepted_outcome() {
        let outcome = ValidationOutcome::Accepted(ValidatedPattern::new("yyyy"));
        assert!(outcome.is_accepted());
        assert_eq!(outcome.label(), "Accepted");

        let pattern = outcome.into_result().unwrap();
        assert_eq!(pattern.as_str(), "yyyy");
    }

    #[test]
    fn test_legacy_outcome_into_result() {
        let diag = UpgradeDiagnostic::new('G', "GGGGG", Span::new(0, 5));
        let outcome = ValidationOutcome::LegacyIncompatible(diag);
        assert!(outcome.is_legacy_incompatible());

        let error = outcome.into_result().unwrap_err();
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_invalid_outcome_into_result() {
        let invalid = InvalidPattern::unknown_letter('C', Span::single(0));
        let outcome = ValidationOutcome::Invalid(invalid);
        assert!(outcome.is_invalid());

        let error = outcome.into_result().unwrap_err();
        assert!(!error.is_recoverable());
    }
}
