pub mod compile_time {
    pub mod pattern {
        /// Maximum pattern length accepted by the scanner (bytes)
        /// SECURITY: Prevents DoS via enormous pattern strings reaching the
        /// per-character scan loop
        pub const MAX_PATTERN_LENGTH: usize = 10_000;

        /// Maximum number of fields a single pattern may produce
        /// SECURITY: Prevents classification-loop exhaustion on adversarial
        /// input
        pub const MAX_FIELD_COUNT: usize = 1_000;
    }

    pub mod logging {
        /// Log buffer size for the in-memory logger
        /// RESOURCE: Controls memory usage for captured events
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length
        /// RESOURCE: Prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}

/// Names of the version-compatibility toggles surfaced in upgrade
/// diagnostics.
///
/// The validator never reads these switches itself: legacy mode is a
/// caller decision, and the validator only names the toggle so the caller
/// knows which knob restores the old behavior.
pub mod legacy {
    /// Session configuration controlling datetime parse/format policy
    pub const TIME_PARSER_POLICY: &str = "spark.sql.legacy.timeParserPolicy";
}
