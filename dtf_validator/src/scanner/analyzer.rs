//! Core field scanner implementation
//!
//! Single-pass, left-to-right scan of a format pattern into fields with
//! compile-time security boundaries. The scanner is lazy: fields are
//! produced on demand, which lets the fail-fast orchestrator stop at the
//! first disqualifying field without touching the rest of the pattern.

use crate::config::constants::compile_time::pattern::*;
use crate::config::runtime::ScannerPreferences;
use crate::fields::{is_pattern_letter, PatternField};
use crate::log_debug;
use crate::logging::codes;
use crate::utils::Span;
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::CharIndices;

/// Field scanning errors with compile-time security boundaries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("Pattern ends with an incomplete string literal: {pattern}")]
    UnterminatedLiteral { pattern: String },

    #[error("Pattern too long: {length} bytes (max {MAX_PATTERN_LENGTH})")]
    PatternTooLong { length: usize },

    #[error("Too many pattern fields: {count} (max {MAX_FIELD_COUNT})")]
    TooManyFields { count: usize },
}

impl ScanError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ScanError::UnterminatedLiteral { .. } => codes::scan::UNTERMINATED_LITERAL,
            ScanError::PatternTooLong { .. } => codes::scan::PATTERN_TOO_LONG,
            ScanError::TooManyFields { .. } => codes::scan::TOO_MANY_FIELDS,
        }
    }
}

/// Essential scan metrics with runtime preferences
#[derive(Debug, Default, Clone)]
pub struct ScanMetrics {
    pub total_fields: usize,
    pub literal_segments: usize,
    pub escaped_quotes: usize,
    pub separator_chars: usize,
    pub max_run_length: usize,

    // Runtime preference-controlled metrics
    pub letter_usage: HashMap<char, usize>,
}

impl ScanMetrics {
    pub(crate) fn record_field(&mut self, field: &PatternField, preferences: &ScannerPreferences) {
        self.total_fields += 1;
        self.max_run_length = self.max_run_length.max(field.count);

        if preferences.track_letter_usage {
            *self.letter_usage.entry(field.letter).or_insert(0) += field.count;
        }
    }

    pub(crate) fn record_literal(&mut self, length: usize, preferences: &ScannerPreferences) {
        self.literal_segments += 1;

        if preferences.log_literal_statistics {
            log_debug!("Quoted literal passed through",
                "length" => length,
                "segments_so_far" => self.literal_segments
            );
        }
    }
}

/// Lazy single-pass field scanner.
///
/// Implements `Iterator<Item = Result<PatternField, ScanError>>`; each call
/// to `next` advances through the pattern until the next field or structural
/// error. The scan is not restartable: once an error is yielded the
/// iterator is exhausted.
pub struct FieldScanner<'a> {
    pattern: &'a str,
    chars: Peekable<CharIndices<'a>>,
    metrics: ScanMetrics,
    preferences: ScannerPreferences,
    // Length violation detected at construction, yielded on first `next`
    pending_error: Option<ScanError>,
    failed: bool,
}

impl<'a> FieldScanner<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self::with_preferences(pattern, ScannerPreferences::default())
    }

    pub fn with_preferences(pattern: &'a str, preferences: ScannerPreferences) -> Self {
        // SECURITY: Check pattern length before the per-character loop runs
        let pending_error = if pattern.len() > MAX_PATTERN_LENGTH {
            Some(ScanError::PatternTooLong {
                length: pattern.len(),
            })
        } else {
            None
        };

        Self {
            pattern,
            chars: pattern.char_indices().peekable(),
            metrics: ScanMetrics::default(),
            preferences,
            pending_error,
            failed: false,
        }
    }

    /// The pattern being scanned
    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// Get current metrics
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    fn fail(&mut self, error: ScanError) -> Option<Result<PatternField, ScanError>> {
        self.failed = true;
        Some(Err(error))
    }

    /// Consume a quoted literal run, opening quote already consumed.
    ///
    /// A doubled quote inside the literal is an escaped quote character and
    /// does not terminate the run.
    fn consume_literal(&mut self, open_offset: usize) -> Result<(), ScanError> {
        loop {
            match self.chars.next() {
                Some((offset, '\'')) => {
                    if self.chars.peek().map(|(_, c)| *c) == Some('\'') {
                        self.chars.next();
                        self.metrics.escaped_quotes += 1;
                    } else {
                        let length = offset - open_offset - 1;
                        self.metrics.record_literal(length, &self.preferences);
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => {
                    return Err(ScanError::UnterminatedLiteral {
                        pattern: self.pattern.to_string(),
                    });
                }
            }
        }
    }
}

impl<'a> Iterator for FieldScanner<'a> {
    type Item = Result<PatternField, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if let Some(error) = self.pending_error.take() {
            return self.fail(error);
        }

        loop {
            let (offset, ch) = self.chars.next()?;

            if ch == '\'' {
                // Doubled quote outside a literal is a single escaped quote
                if self.chars.peek().map(|(_, c)| *c) == Some('\'') {
                    self.chars.next();
                    self.metrics.escaped_quotes += 1;
                    continue;
                }

                match self.consume_literal(offset) {
                    Ok(()) => continue,
                    Err(error) => return self.fail(error),
                }
            }

            if is_pattern_letter(ch) {
                let mut count = 1;
                while let Some((_, next_ch)) = self.chars.peek() {
                    if *next_ch == ch {
                        self.chars.next();
                        count += 1;
                    } else {
                        break;
                    }
                }

                // SECURITY: Check field count to bound the classification loop
                if self.metrics.total_fields >= MAX_FIELD_COUNT {
                    return self.fail(ScanError::TooManyFields {
                        count: self.metrics.total_fields + 1,
                    });
                }

                // Pattern letters are ASCII, one byte per repeat
                let field = PatternField::new(ch, count, Span::new(offset, offset + count));
                self.metrics.record_field(&field, &self.preferences);
                return Some(Ok(field));
            }

            // Any other character is separator text, passed through untouched
            self.metrics.separator_chars += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn scan(pattern: &str) -> Vec<PatternField> {
        FieldScanner::new(pattern)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_scan_simple_pattern() {
        let fields = scan("yyyy-MM-dd");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], PatternField::new('y', 4, Span::new(0, 4)));
        assert_eq!(fields[1], PatternField::new('M', 2, Span::new(5, 7)));
        assert_eq!(fields[2], PatternField::new('d', 2, Span::new(8, 10)));
    }

    #[test]
    fn test_scan_adjacent_runs() {
        let fields = scan("yyyyMMdd");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].span, Span::new(4, 6));
    }

    #[test]
    fn test_case_sensitivity_splits_runs() {
        // 'm' and 'M' are distinct letters, so "mM" is two fields
        let fields = scan("mM");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].letter, 'm');
        assert_eq!(fields[1].letter, 'M');
    }

    #[test]
    fn test_quoted_literal_is_not_scanned() {
        let fields = scan("'yyyy' MM");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].letter, 'M');
        assert_eq!(fields[0].span, Span::new(7, 9));
    }

    #[test]
    fn test_escaped_quote_inside_literal() {
        // 'o''clock' is one literal containing an escaped quote
        let fields = scan("'o''clock' HH");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].letter, 'H');
    }

    #[test]
    fn test_escaped_quote_outside_literal() {
        // '' outside a literal is one literal quote character, not a field
        let fields = scan("HH'' mm");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].letter, 'H');
        assert_eq!(fields[1].letter, 'm');
    }

    #[test]
    fn test_unterminated_literal_is_structural_error() {
        let result: Result<Vec<_>, _> = FieldScanner::new("yyyy 'literal").collect();
        assert_matches!(
            result,
            Err(ScanError::UnterminatedLiteral { ref pattern }) if pattern == "yyyy 'literal"
        );
    }

    #[test]
    fn test_unterminated_literal_message() {
        let error = ScanError::UnterminatedLiteral {
            pattern: "HH:mm '".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Pattern ends with an incomplete string literal: HH:mm '"
        );
    }

    #[test]
    fn test_error_exhausts_iterator() {
        let mut scanner = FieldScanner::new("'open");
        assert_matches!(
            scanner.next(),
            Some(Err(ScanError::UnterminatedLiteral { .. }))
        );
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_empty_pattern_has_no_fields() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_separators_only() {
        let mut scanner = FieldScanner::new(" -:/.");
        assert!(scanner.next().is_none());
        assert_eq!(scanner.metrics().separator_chars, 5);
    }

    #[test]
    fn test_pattern_too_long() {
        let pattern = "y".repeat(MAX_PATTERN_LENGTH + 1);
        let mut scanner = FieldScanner::new(&pattern);
        assert_matches!(
            scanner.next(),
            Some(Err(ScanError::PatternTooLong { length })) if length == MAX_PATTERN_LENGTH + 1
        );
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_metrics_collection() {
        let mut scanner = FieldScanner::new("'at' HH:mm");
        let fields: Vec<_> = scanner.by_ref().collect::<Result<_, _>>().unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(scanner.metrics().total_fields, 2);
        assert_eq!(scanner.metrics().literal_segments, 1);
        assert_eq!(scanner.metrics().max_run_length, 2);
        assert_eq!(scanner.metrics().separator_chars, 2); // ' ' and ':'
    }

    #[test]
    fn test_letter_usage_tracking() {
        let preferences = ScannerPreferences {
            track_letter_usage: true,
            ..ScannerPreferences::default()
        };
        let mut scanner = FieldScanner::with_preferences("yyyy-yy", preferences);
        let _: Vec<_> = scanner.by_ref().collect();

        assert_eq!(scanner.metrics().letter_usage.get(&'y'), Some(&6));
    }

    #[test]
    fn test_lazy_scan_yields_prefix_before_error() {
        // Fields before the structural error are still produced
        let mut scanner = FieldScanner::new("MM 'bad");
        assert_matches!(scanner.next(), Some(Ok(field)) if field.letter == 'M');
        assert_matches!(
            scanner.next(),
            Some(Err(ScanError::UnterminatedLiteral { .. }))
        );
    }
}
