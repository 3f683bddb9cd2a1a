//! Fixtures shared by unit tests.

use chrono::{DateTime, Duration, Utc};
use vouchdesk_shared::types::{OutletId, VoucherId};

use super::types::{Outlet, OutletDirectory, Voucher, VoucherStatus};

/// Parses an RFC 3339 timestamp.
pub(crate) fn instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

/// Issued voucher expiring 90 days after issue.
pub(crate) fn voucher(id: &str, outlet: &str, issued: &str) -> Voucher {
    let issue_date = instant(issued);
    Voucher {
        id: VoucherId::new(id),
        recipient_name: format!("Recipient {id}"),
        recipient_mobile: "5550100".to_string(),
        outlet_id: OutletId::new(outlet),
        status: VoucherStatus::Issued,
        issue_date,
        expiry_date: issue_date + Duration::days(90),
        redeemed_date: None,
        redemption_bill_no: None,
    }
}

/// Outlets A, B, C named Alpha, Bravo, Charlie.
pub(crate) fn directory() -> OutletDirectory {
    OutletDirectory::new(vec![
        Outlet::new("A", "Alpha"),
        Outlet::new("B", "Bravo"),
        Outlet::new("C", "Charlie"),
    ])
}
