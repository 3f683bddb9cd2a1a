//! Report error types.

use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Export attempted with no visible vouchers. Informational, not fatal.
    #[error("No vouchers to export")]
    NoData,

    /// A configured strftime pattern is invalid.
    #[error("Invalid date format pattern: {0}")]
    InvalidFormat(String),
}
