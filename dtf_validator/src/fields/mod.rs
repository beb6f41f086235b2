pub mod field;

pub use field::{is_pattern_letter, PatternField};
