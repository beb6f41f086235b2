//! Error types for pattern validation
//!
//! Two distinct diagnostic channels: [`UpgradeDiagnostic`] for patterns the
//! legacy engine still accepts (recoverable through configuration) and
//! [`InvalidPattern`] for patterns no engine version accepts. The Display
//! strings are bit-exact contracts consumed by downstream error reporting
//! and must not be reworded.

use crate::config::constants::legacy;
use crate::logging::codes;
use crate::scanner::ScanError;
use crate::utils::Span;
use thiserror::Error;

/// Message identifier class for upgrade diagnostics
pub const ERROR_CLASS: &str = "INCONSISTENT_BEHAVIOR_CROSS_VERSION";

/// Message identifier subclass for upgrade diagnostics
pub const SUB_CLASS: &str = "DATETIME_PATTERN_RECOGNITION";

/// Structural rejection: the pattern can never be accepted, regardless of
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPattern {
    /// Letter is never valid
    #[error("Illegal pattern character: {letter}")]
    IllegalPatternCharacter { letter: char, span: Span },

    /// Letter has no rule entry in any engine version
    #[error("Unknown pattern letter: {letter}")]
    UnknownLetter { letter: char, span: Span },

    /// Open upper bound exceeded
    #[error("Too many pattern letters: {letter}")]
    TooManyLetters { letter: char, span: Span },

    /// Letter requires exactly one specific count
    #[error("Pattern letter count must be {required}: {letter}")]
    LetterCountMismatch {
        letter: char,
        required: usize,
        span: Span,
    },

    /// Letter requires one of two specific counts
    #[error("Pattern letter count must be {first} or {second}: {letter}")]
    LetterCountOneOf {
        letter: char,
        first: usize,
        second: usize,
        span: Span,
    },

    /// Week-based field, removed in favor of EXTRACT
    #[error("All week-based patterns are unsupported since Spark 3.0, detected: {letter}, Please use the SQL function EXTRACT instead")]
    WeekBasedUnsupported { letter: char, span: Span },

    /// Structural scanning failure (unterminated literal, length bound)
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl InvalidPattern {
    /// Create an illegal pattern character error
    pub fn illegal_character(letter: char, span: Span) -> Self {
        Self::IllegalPatternCharacter { letter, span }
    }

    /// Create an unknown pattern letter error
    pub fn unknown_letter(letter: char, span: Span) -> Self {
        Self::UnknownLetter { letter, span }
    }

    /// Create a too-many-letters error
    pub fn too_many_letters(letter: char, span: Span) -> Self {
        Self::TooManyLetters { letter, span }
    }

    /// Create a count-mismatch error from a closed count set.
    ///
    /// Closed count sets in the rule table list one or two allowed counts.
    pub fn count_mismatch(letter: char, allowed: &'static [usize], span: Span) -> Self {
        match *allowed {
            [required] => Self::LetterCountMismatch {
                letter,
                required,
                span,
            },
            [first, second, ..] => Self::LetterCountOneOf {
                letter,
                first,
                second,
                span,
            },
            [] => Self::TooManyLetters { letter, span },
        }
    }

    /// Create a week-based rejection
    pub fn week_based(letter: char, span: Span) -> Self {
        Self::WeekBasedUnsupported { letter, span }
    }

    /// Get the offending letter, if the error points at one
    pub fn letter(&self) -> Option<char> {
        match self {
            Self::IllegalPatternCharacter { letter, .. }
            | Self::UnknownLetter { letter, .. }
            | Self::TooManyLetters { letter, .. }
            | Self::LetterCountMismatch { letter, .. }
            | Self::LetterCountOneOf { letter, .. }
            | Self::WeekBasedUnsupported { letter, .. } => Some(*letter),
            Self::Scan(_) => None,
        }
    }

    /// Get error span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::IllegalPatternCharacter { span, .. }
            | Self::UnknownLetter { span, .. }
            | Self::TooManyLetters { span, .. }
            | Self::LetterCountMismatch { span, .. }
            | Self::LetterCountOneOf { span, .. }
            | Self::WeekBasedUnsupported { span, .. } => Some(*span),
            Self::Scan(_) => None,
        }
    }

    /// Get appropriate error code for the logging system
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::IllegalPatternCharacter { .. } => codes::rules::ILLEGAL_LETTER,
            Self::UnknownLetter { .. } => codes::rules::UNKNOWN_LETTER,
            Self::WeekBasedUnsupported { .. } => codes::rules::WEEK_BASED_LETTER,
            Self::TooManyLetters { .. } => codes::validation::TOO_MANY_LETTERS,
            Self::LetterCountMismatch { .. } | Self::LetterCountOneOf { .. } => {
                codes::validation::LETTER_COUNT_MISMATCH
            }
            Self::Scan(scan) => scan.error_code(),
        }
    }

    /// Get reason kind for context
    pub fn reason(&self) -> &'static str {
        match self {
            Self::IllegalPatternCharacter { .. } => "IllegalPatternCharacter",
            Self::UnknownLetter { .. } => "UnknownLetter",
            Self::TooManyLetters { .. } => "TooManyLetters",
            Self::LetterCountMismatch { .. } | Self::LetterCountOneOf { .. } => {
                "LetterCountMismatch"
            }
            Self::WeekBasedUnsupported { .. } => "WeekBasedUnsupported",
            Self::Scan(_) => "Scan",
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }
}

/// Version-compatibility diagnostic: the pattern is structurally
/// well-formed, but its meaning changed across engine versions. The caller
/// may opt back into the old semantics via the named configuration toggle;
/// this is never applied automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("You may get a different result due to the upgrading to Spark >= 3.0: Fail to recognize {pattern} pattern in the DateTimeFormatter. 1) You can set {config} to LEGACY to restore the behavior before Spark 3.0. 2) You can form a valid datetime pattern with the guide from '<docroot>/sql-ref-datetime-pattern.html'")]
pub struct UpgradeDiagnostic {
    /// Name of the configuration toggle restoring legacy behavior
    pub config: &'static str,
    /// The original pattern, quoted as a literal (`'GGGGG'`)
    pub pattern: String,
    /// The letter whose semantics changed
    pub letter: char,
    /// Location of the offending field
    pub span: Span,
}

impl UpgradeDiagnostic {
    /// Create a diagnostic for the given field inside the original pattern
    pub fn new(letter: char, original_pattern: &str, span: Span) -> Self {
        Self {
            config: legacy::TIME_PARSER_POLICY,
            pattern: format!("'{}'", original_pattern),
            letter,
            span,
        }
    }

    /// Message identifier class
    pub fn error_class(&self) -> &'static str {
        ERROR_CLASS
    }

    /// Message identifier subclass
    pub fn sub_class(&self) -> &'static str {
        SUB_CLASS
    }

    /// Get appropriate error code for the logging system
    pub fn error_code(&self) -> crate::logging::Code {
        codes::validation::LEGACY_INCOMPATIBLE
    }
}

/// Caller-facing validation error covering both diagnostic channels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Recoverable: the caller may re-run under the legacy policy
    #[error(transparent)]
    Upgrade(#[from] UpgradeDiagnostic),

    /// Fatal: the pattern can never be accepted
    #[error(transparent)]
    Invalid(#[from] InvalidPattern),
}

impl PatternError {
    /// Whether the caller can recover by enabling the legacy policy
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Upgrade(_))
    }

    /// Get appropriate error code for the logging system
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::Upgrade(diag) => diag.error_code(),
            Self::Invalid(invalid) => invalid.error_code(),
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_shapes() {
        let span = Span::single(0);
        assert_eq!(
            InvalidPattern::illegal_character('A', span).to_string(),
            "Illegal pattern character: A"
        );
        assert_eq!(
            InvalidPattern::unknown_letter('C', span).to_string(),
            "Unknown pattern letter: C"
        );
        assert_eq!(
            InvalidPattern::too_many_letters('q', span).to_string(),
            "Too many pattern letters: q"
        );
        assert_eq!(
            InvalidPattern::count_mismatch('V', &[2], span).to_string(),
            "Pattern letter count must be 2: V"
        );
        assert_eq!(
            InvalidPattern::count_mismatch('O', &[1, 4], span).to_string(),
            "Pattern letter count must be 1 or 4: O"
        );
        assert_eq!(
            InvalidPattern::week_based('e', span).to_string(),
            "All week-based patterns are unsupported since Spark 3.0, detected: e, Please use the SQL function EXTRACT instead"
        );
    }

    #[test]
    fn test_count_mismatch_picks_template_by_set_size() {
        let span = Span::new(0, 1);
        assert!(matches!(
            InvalidPattern::count_mismatch('V', &[2], span),
            InvalidPattern::LetterCountMismatch { required: 2, .. }
        ));
        assert!(matches!(
            InvalidPattern::count_mismatch('O', &[1, 4], span),
            InvalidPattern::LetterCountOneOf {
                first: 1,
                second: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_upgrade_diagnostic_fields() {
        let diag = UpgradeDiagnostic::new('G', "GGGGG", Span::new(0, 5));
        assert_eq!(diag.config, "spark.sql.legacy.timeParserPolicy");
        assert_eq!(diag.pattern, "'GGGGG'");
        assert_eq!(diag.error_class(), "INCONSISTENT_BEHAVIOR_CROSS_VERSION");
        assert_eq!(diag.sub_class(), "DATETIME_PATTERN_RECOGNITION");

        let message = diag.to_string();
        assert!(message.contains("'GGGGG'"));
        assert!(message.contains("spark.sql.legacy.timeParserPolicy"));
    }

    #[test]
    fn test_two_tier_recoverability() {
        let upgrade: PatternError = UpgradeDiagnostic::new('G', "GGGGG", Span::new(0, 5)).into();
        assert!(upgrade.is_recoverable());

        let invalid: PatternError =
            InvalidPattern::illegal_character('A', Span::single(0)).into();
        assert!(!invalid.is_recoverable());
    }

    #[test]
    fn test_scan_error_converts_to_invalid() {
        let scan = ScanError::UnterminatedLiteral {
            pattern: "'oops".to_string(),
        };
        let invalid: InvalidPattern = scan.into();
        assert_eq!(invalid.reason(), "Scan");
        assert_eq!(invalid.span(), None);
        assert_eq!(
            invalid.to_string(),
            "Pattern ends with an incomplete string literal: 'oops"
        );
    }

    #[test]
    fn test_error_codes() {
        let span = Span::single(0);
        assert_eq!(
            InvalidPattern::illegal_character('A', span)
                .error_code()
                .as_str(),
            "E021"
        );
        assert_eq!(
            InvalidPattern::count_mismatch('V', &[2], span)
                .error_code()
                .as_str(),
            "E031"
        );
        assert_eq!(
            UpgradeDiagnostic::new('G', "GGGGG", span).error_code().as_str(),
            "E032"
        );
    }
}
