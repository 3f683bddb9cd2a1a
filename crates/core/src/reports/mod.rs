//! Voucher report export.
//!
//! This module turns the filtered and sorted voucher table into a
//! comma-delimited document:
//! - Fixed nine-column header
//! - Locale-formatted dates via `ReportFormat`
//! - Derived download file name
//! - Data URI embedding

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::{REPORT_HEADERS, ReportFormat, VoucherReport};
