//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions. Code constants and their behavioral metadata
//! live together so the two cannot drift apart.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Field scanner error codes
pub mod scan {
    use super::Code;

    pub const PATTERN_TOO_LONG: Code = Code::new("E010");
    pub const UNTERMINATED_LITERAL: Code = Code::new("E011");
    pub const TOO_MANY_FIELDS: Code = Code::new("E012");
}

/// Rule table error codes
pub mod rules {
    use super::Code;

    pub const UNKNOWN_LETTER: Code = Code::new("E020");
    pub const ILLEGAL_LETTER: Code = Code::new("E021");
    pub const WEEK_BASED_LETTER: Code = Code::new("E022");
}

/// Validation error codes
pub mod validation {
    use super::Code;

    pub const TOO_MANY_LETTERS: Code = Code::new("E030");
    pub const LETTER_COUNT_MISMATCH: Code = Code::new("E031");
    pub const LEGACY_INCOMPATIBLE: Code = Code::new("E032");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const SCAN_COMPLETE: Code = Code::new("I010");
    pub const PATTERN_ACCEPTED: Code = Code::new("I020");
    pub const VALIDATION_COMPLETE: Code = Code::new("I021");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal system error",
                "Contact system administrator or file bug report",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "System initialization failure",
                "Check system configuration and dependencies",
            ),
        );

        // Scanner errors
        registry.insert(
            "E010",
            ErrorMetadata::new(
                "E010",
                "Scan",
                Severity::Medium,
                false,
                "Pattern exceeds maximum length limit",
                "Shorten the format pattern",
            ),
        );
        registry.insert(
            "E011",
            ErrorMetadata::new(
                "E011",
                "Scan",
                Severity::Medium,
                false,
                "Pattern ends inside a quoted literal",
                "Close the quoted literal with a matching single quote",
            ),
        );
        registry.insert(
            "E012",
            ErrorMetadata::new(
                "E012",
                "Scan",
                Severity::Medium,
                false,
                "Pattern produces too many fields",
                "Reduce the number of fields in the pattern",
            ),
        );

        // Rule table errors
        registry.insert(
            "E020",
            ErrorMetadata::new(
                "E020",
                "Rules",
                Severity::Medium,
                false,
                "Pattern letter has no rule entry",
                "Remove the unknown letter or quote it as literal text",
            ),
        );
        registry.insert(
            "E021",
            ErrorMetadata::new(
                "E021",
                "Rules",
                Severity::Medium,
                false,
                "Pattern letter is never valid",
                "Remove the illegal letter or quote it as literal text",
            ),
        );
        registry.insert(
            "E022",
            ErrorMetadata::new(
                "E022",
                "Rules",
                Severity::Medium,
                false,
                "Week-based pattern letters are unsupported",
                "Use the SQL function EXTRACT instead",
            ),
        );

        // Validation errors
        registry.insert(
            "E030",
            ErrorMetadata::new(
                "E030",
                "Validation",
                Severity::Medium,
                false,
                "Pattern letter repeated beyond its maximum width",
                "Reduce the letter repeat count",
            ),
        );
        registry.insert(
            "E031",
            ErrorMetadata::new(
                "E031",
                "Validation",
                Severity::Medium,
                false,
                "Pattern letter used with a disallowed repeat count",
                "Use one of the letter's allowed repeat counts",
            ),
        );
        registry.insert(
            "E032",
            ErrorMetadata::new(
                "E032",
                "Validation",
                Severity::Medium,
                true,
                "Pattern semantics changed across engine versions",
                "Enable the legacy datetime parser policy to restore the previous behavior, or rewrite the pattern",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get severity for an error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|meta| meta.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if an error code represents a recoverable condition
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|meta| meta.recoverable)
        .unwrap_or(false)
}

/// Get category for an error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|meta| meta.category)
        .unwrap_or("Unknown")
}

/// Get description for an error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|meta| meta.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for an error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|meta| meta.recommended_action)
        .unwrap_or("No specific action available")
}

/// Check that every registered code round-trips through the registry
pub fn validate_registry() -> Result<(), String> {
    let required = [
        system::INTERNAL_ERROR,
        system::INITIALIZATION_FAILURE,
        scan::PATTERN_TOO_LONG,
        scan::UNTERMINATED_LITERAL,
        scan::TOO_MANY_FIELDS,
        rules::UNKNOWN_LETTER,
        rules::ILLEGAL_LETTER,
        rules::WEEK_BASED_LETTER,
        validation::TOO_MANY_LETTERS,
        validation::LETTER_COUNT_MISMATCH,
        validation::LEGACY_INCOMPATIBLE,
    ];

    for code in &required {
        if get_description(code.as_str()) == "Unknown error" {
            return Err(format!(
                "Error code {} not properly configured",
                code.as_str()
            ));
        }
    }

    Ok(())
}
