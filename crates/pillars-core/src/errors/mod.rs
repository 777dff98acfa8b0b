//! Error handling for the Four Pillars engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod chart_error;
pub mod config_error;
pub mod error_code;

pub use analysis_error::AnalysisError;
pub use chart_error::ChartError;
pub use config_error::ConfigError;
pub use error_code::PillarsErrorCode;
