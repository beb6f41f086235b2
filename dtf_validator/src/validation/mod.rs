//! Pattern validation orchestrator
//!
//! Drives the scan → classify → decide loop: fields are classified in
//! pattern order and the first non-supported outcome wins (fail-fast,
//! leftmost-field priority). A pattern whose fields all classify as
//! supported is returned unchanged.

pub mod error;
pub mod outcome;

// Re-export main types
pub use error::{InvalidPattern, PatternError, UpgradeDiagnostic};
pub use outcome::{ValidatedPattern, ValidationOutcome};

use crate::config::runtime::ValidationPreferences;
use crate::rules::{classify_field, FieldClass};
use crate::scanner::FieldScanner;
use crate::{log_debug, log_error, log_info, log_success, logging, logging::codes};
use std::time::Instant;

/// Validation metrics
#[derive(Debug, Clone, Default)]
pub struct ValidationMetrics {
    pub total_duration_ms: f64,
    pub fields_classified: usize,
}

impl ValidationMetrics {
    /// Calculate classification throughput
    pub fn fields_per_second(&self) -> f64 {
        if self.total_duration_ms > 0.0 {
            (self.fields_classified as f64) / (self.total_duration_ms / 1000.0)
        } else {
            0.0
        }
    }
}

/// Validate a format pattern with default preferences.
pub fn validate(pattern: &str) -> ValidationOutcome {
    validate_with_preferences(pattern, &ValidationPreferences::default())
}

/// Validate a format pattern with custom preferences.
pub fn validate_with_preferences(
    pattern: &str,
    preferences: &ValidationPreferences,
) -> ValidationOutcome {
    let start_time = Instant::now();

    logging::with_pattern_context(pattern, || {
        log_debug!("Starting pattern validation", "length" => pattern.len());

        let mut metrics = ValidationMetrics::default();
        let mut scanner = FieldScanner::new(pattern);

        let outcome = loop {
            match scanner.next() {
                None => {
                    break ValidationOutcome::Accepted(ValidatedPattern::new(pattern));
                }
                Some(Err(scan_error)) => {
                    log_error!(scan_error.error_code(), "Pattern scanning failed",
                        "reason" => &scan_error
                    );
                    break ValidationOutcome::Invalid(InvalidPattern::from(scan_error));
                }
                Some(Ok(field)) => {
                    metrics.fields_classified += 1;

                    if preferences.log_classification_details {
                        log_debug!("Classifying field",
                            "letter" => field.letter,
                            "count" => field.count
                        );
                    }

                    match classify_field(&field) {
                        FieldClass::Supported => continue,
                        FieldClass::Legacy => {
                            break ValidationOutcome::LegacyIncompatible(UpgradeDiagnostic::new(
                                field.letter,
                                pattern,
                                field.span,
                            ));
                        }
                        FieldClass::Forbidden => {
                            break ValidationOutcome::Invalid(InvalidPattern::illegal_character(
                                field.letter,
                                field.span,
                            ));
                        }
                        FieldClass::WeekBased => {
                            break ValidationOutcome::Invalid(InvalidPattern::week_based(
                                field.letter,
                                field.span,
                            ));
                        }
                        FieldClass::Unknown => {
                            break ValidationOutcome::Invalid(InvalidPattern::unknown_letter(
                                field.letter,
                                field.span,
                            ));
                        }
                        FieldClass::TooMany => {
                            break ValidationOutcome::Invalid(InvalidPattern::too_many_letters(
                                field.letter,
                                field.span,
                            ));
                        }
                        FieldClass::CountMismatch { allowed } => {
                            break ValidationOutcome::Invalid(InvalidPattern::count_mismatch(
                                field.letter,
                                allowed,
                                field.span,
                            ));
                        }
                    }
                }
            }
        };

        metrics.total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

        log_outcome(&outcome, &metrics, preferences);

        outcome
    })
}

/// Validate and return a `Result` for pipeline callers.
pub fn ensure_supported(pattern: &str) -> Result<ValidatedPattern, PatternError> {
    validate(pattern).into_result()
}

/// Quick validation for simple use cases
pub fn is_supported(pattern: &str) -> bool {
    validate(pattern).is_accepted()
}

fn log_outcome(
    outcome: &ValidationOutcome,
    metrics: &ValidationMetrics,
    preferences: &ValidationPreferences,
) {
    match outcome {
        ValidationOutcome::Accepted(pattern) => {
            log_success!(codes::success::PATTERN_ACCEPTED,
                "Pattern validation passed",
                "fields" => metrics.fields_classified,
                "length" => pattern.as_str().len()
            );
        }
        ValidationOutcome::LegacyIncompatible(diag) => {
            let message = diag.to_string();
            if preferences.include_span_in_errors {
                log_error!(diag.error_code(), &message,
                    span = diag.span,
                    "letter" => diag.letter,
                    "config" => diag.config,
                    "recoverable" => true
                );
            } else {
                log_error!(diag.error_code(), &message,
                    "letter" => diag.letter,
                    "config" => diag.config,
                    "recoverable" => true
                );
            }
        }
        ValidationOutcome::Invalid(invalid) => {
            let message = invalid.to_string();
            match invalid.span().filter(|_| preferences.include_span_in_errors) {
                Some(span) => {
                    log_error!(invalid.error_code(), &message,
                        span = span,
                        "reason" => invalid.reason(),
                        "severity" => invalid.severity()
                    );
                }
                None => {
                    log_error!(invalid.error_code(), &message,
                        "reason" => invalid.reason(),
                        "severity" => invalid.severity()
                    );
                }
            }
        }
    }

    if preferences.log_performance_metrics {
        log_info!("Pattern validation performance",
            "duration_ms" => metrics.total_duration_ms,
            "fields_classified" => metrics.fields_classified,
            "fields_per_second" => metrics.fields_per_second(),
            "outcome" => outcome.label()
        );
    }
}
