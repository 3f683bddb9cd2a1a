//! Voucher report generation service.

use chrono::{DateTime, NaiveDate, Utc};

use super::error::ReportError;
use super::types::{REPORT_HEADERS, ReportFormat, VoucherReport};
use crate::voucher::{OutletDirectory, OutletSelection, Voucher};

/// File name segment used when no single outlet is selected.
const ALL_OUTLETS_SEGMENT: &str = "all-outlets";

/// Placeholder for absent optional columns.
const EMPTY_CELL: &str = "-";

/// Service for exporting the voucher table.
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    format: ReportFormat,
}

impl ReportService {
    /// Creates a service rendering dates with `format`.
    #[must_use]
    pub const fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Serializes `vouchers` in the given order.
    ///
    /// Every cell is wrapped in double quotes as-is. Embedded quote
    /// characters are not escaped.
    pub fn generate(
        &self,
        vouchers: &[&Voucher],
        directory: &OutletDirectory,
        selected: &OutletSelection,
        today: NaiveDate,
    ) -> Result<VoucherReport, ReportError> {
        if vouchers.is_empty() {
            tracing::info!("export requested with no visible vouchers");
            return Err(ReportError::NoData);
        }

        let mut lines = Vec::with_capacity(vouchers.len() + 1);
        lines.push(REPORT_HEADERS.join(","));
        lines.extend(vouchers.iter().map(|v| self.row(v, directory)));

        let filename = Self::filename(directory, selected, today);
        tracing::info!(rows = vouchers.len(), filename = %filename, "generated voucher report");

        Ok(VoucherReport {
            filename,
            content: lines.join("\n"),
        })
    }

    /// `vouchers-report-{outlet segment}-{YYYY-MM-DD}.csv`
    #[must_use]
    pub fn filename(
        directory: &OutletDirectory,
        selected: &OutletSelection,
        today: NaiveDate,
    ) -> String {
        let segment = match selected {
            OutletSelection::All => ALL_OUTLETS_SEGMENT.to_string(),
            OutletSelection::Outlet(id) => hyphenate_whitespace(directory.name_or_unknown(id)),
        };
        format!("vouchers-report-{segment}-{}.csv", today.format("%Y-%m-%d"))
    }

    fn row(&self, voucher: &Voucher, directory: &OutletDirectory) -> String {
        let bill = voucher
            .redemption_bill_no
            .as_ref()
            .map_or_else(|| EMPTY_CELL.to_string(), |n| format!("Bill {n}"));
        let redeemed = voucher.redeemed_date.map_or_else(
            || EMPTY_CELL.to_string(),
            |at| self.render(at, self.format.datetime_format()),
        );

        let issued = self.render(voucher.issue_date, self.format.date_format());
        let expires = self.render(voucher.expiry_date, self.format.date_format());

        let cells: [&str; 9] = [
            voucher.id.as_str(),
            &voucher.recipient_name,
            &voucher.recipient_mobile,
            directory.name_or_unknown(&voucher.outlet_id),
            voucher.status.as_str(),
            &bill,
            &redeemed,
            &issued,
            &expires,
        ];

        cells
            .iter()
            .map(|cell| format!("\"{cell}\""))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn render(&self, at: DateTime<Utc>, pattern: &str) -> String {
        at.with_timezone(&self.format.timezone())
            .format(pattern)
            .to_string()
    }
}

/// Replaces every run of whitespace with a single hyphen.
fn hyphenate_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('-');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
