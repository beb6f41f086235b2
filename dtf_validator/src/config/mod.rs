//! Configuration module for the pattern validator
//!
//! Compile-time bounds live in `constants`; user-tunable behavior lives in
//! `runtime` and can come from environment variables or a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    ConfigError, LoggingPreferences, ScannerPreferences, ValidationPreferences, ValidatorConfig,
};
