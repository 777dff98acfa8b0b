//! PillarsErrorCode trait for structured error reporting.

/// Trait for mapping engine errors to stable error code strings.
/// Every error enum implements this so callers across a serialization
/// boundary can match on the code rather than the message text.
pub trait PillarsErrorCode {
    /// Returns the error code string (e.g., "CHART_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CHART_ERROR: &str = "CHART_ERROR";
pub const MISSING_PILLAR: &str = "MISSING_PILLAR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ANALYSIS_ERROR: &str = "ANALYSIS_ERROR";
pub const RULE_PANIC: &str = "RULE_PANIC";
