//! Field scanning for format patterns
//!
//! Splits a raw pattern string into fields (maximal runs of identical
//! letters) while passing quoted literal text through uninterpreted.

pub mod analyzer;

pub use analyzer::{FieldScanner, ScanError, ScanMetrics};

use crate::fields::PatternField;

/// Scan a pattern into its complete field list.
///
/// Eager convenience over [`FieldScanner`]; stops at the first structural
/// error.
pub fn scan_pattern(pattern: &str) -> Result<Vec<PatternField>, ScanError> {
    FieldScanner::new(pattern).collect()
}
