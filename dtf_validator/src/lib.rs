// Internal modules
pub mod config;
pub mod fields;
#[macro_use]
pub mod logging;
pub mod rules;
pub mod scanner;
pub mod utils;
pub mod validation;

// Re-export key types for library consumers
pub use fields::PatternField;
pub use scanner::{FieldScanner, ScanError};
pub use validation::{
    ensure_supported, is_supported, validate, InvalidPattern, PatternError, UpgradeDiagnostic,
    ValidatedPattern, ValidationOutcome,
};
