//! Report data types.

use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Column headers of the voucher report, in output order.
pub const REPORT_HEADERS: [&str; 9] = [
    "Voucher ID",
    "Recipient Name",
    "Recipient Mobile",
    "Outlet",
    "Status",
    "Redemption Bill No",
    "Redeemed Date",
    "Issue Date",
    "Expiry Date",
];

/// A generated report ready for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherReport {
    /// Suggested download file name.
    pub filename: String,
    /// Comma-delimited document.
    pub content: String,
}

impl VoucherReport {
    /// MIME type of the document.
    pub const MIME_TYPE: &'static str = "text/csv";

    /// Returns the document as a percent-encoded data URI.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};charset=utf-8,{}",
            Self::MIME_TYPE,
            urlencoding::encode(&self.content)
        )
    }
}

/// Locale settings used to render report dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    timezone: Tz,
    date_format: String,
    datetime_format: String,
}

impl ReportFormat {
    /// Creates a format, rejecting invalid strftime patterns.
    pub fn new(
        timezone: Tz,
        date_format: impl Into<String>,
        datetime_format: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let date_format = date_format.into();
        let datetime_format = datetime_format.into();
        for pattern in [&date_format, &datetime_format] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(ReportError::InvalidFormat(pattern.clone()));
            }
        }
        Ok(Self {
            timezone,
            date_format,
            datetime_format,
        })
    }

    /// Timezone dates are rendered in.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Pattern for date-only columns.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Pattern for date-time columns.
    #[must_use]
    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }
}

impl Default for ReportFormat {
    /// en-US style in UTC: `1/31/2024` and `1/31/2024, 2:05:09 PM`.
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            date_format: "%-m/%-d/%Y".to_string(),
            datetime_format: "%-m/%-d/%Y, %-I:%M:%S %p".to_string(),
        }
    }
}
