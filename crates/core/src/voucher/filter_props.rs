//! Property-based tests for filtering and sorting.
//!
//! Vouchers are drawn over outlets A, B, C (plus an unknown outlet Z) with
//! issue instants spread across 2023-2025.

use chrono::{DateTime, Datelike, Utc};
use proptest::prelude::*;
use vouchdesk_shared::types::{OutletId, VoucherId};

use super::filter::{OutletSelection, VoucherFilter};
use super::sort::{SortKey, VoucherSorter};
use super::test_support::directory;
use super::types::{Voucher, VoucherStatus};
use crate::access::{ScopeResolver, User};

/// 2023-01-01T00:00:00Z in milliseconds.
const START_MS: i64 = 1_672_531_200_000;
/// Three years in milliseconds.
const SPAN_MS: i64 = 3 * 365 * 24 * 60 * 60 * 1000;

fn arb_outlet() -> impl Strategy<Value = OutletId> {
    prop_oneof![Just("A"), Just("B"), Just("C"), Just("Z")].prop_map(OutletId::new)
}

fn arb_vouchers() -> impl Strategy<Value = Vec<Voucher>> {
    prop::collection::vec((arb_outlet(), 0..SPAN_MS), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (outlet_id, offset))| {
                let issue_date =
                    DateTime::<Utc>::from_timestamp_millis(START_MS + offset).unwrap();
                Voucher {
                    id: VoucherId::new(format!("V{i}")),
                    recipient_name: format!("Recipient {i}"),
                    recipient_mobile: "5550100".to_string(),
                    outlet_id,
                    status: VoucherStatus::Issued,
                    issue_date,
                    expiry_date: issue_date,
                    redeemed_date: None,
                    redemption_bill_no: None,
                }
            })
            .collect()
    })
}

fn position(voucher: &Voucher) -> usize {
    voucher.id.as_str()[1..].parse().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Outlet-admins over {A, B} see exactly the A and B vouchers, in input order.
    #[test]
    fn prop_outlet_admin_sees_only_permitted(vouchers in arb_vouchers()) {
        let scope = ScopeResolver::resolve(Some(&User::outlet_admin("u", ["A", "B"])));
        let visible = VoucherFilter::apply(&vouchers, &scope, &OutletSelection::All);

        let expected: Vec<&Voucher> = vouchers
            .iter()
            .filter(|v| v.outlet_id.as_str() == "A" || v.outlet_id.as_str() == "B")
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// Outlet-admins without outlets see the full set.
    #[test]
    fn prop_outlet_admin_without_outlets_sees_all(vouchers in arb_vouchers()) {
        let scope = ScopeResolver::resolve(Some(&User::outlet_admin("u", Vec::<&str>::new())));
        let visible = VoucherFilter::apply(&vouchers, &scope, &OutletSelection::All);
        prop_assert_eq!(visible.len(), vouchers.len());
    }

    /// Selecting an outlet outside the scope yields nothing.
    #[test]
    fn prop_selection_outside_scope_is_empty(vouchers in arb_vouchers()) {
        let scope = ScopeResolver::resolve(Some(&User::outlet_admin("u", ["A"])));
        let visible = VoucherFilter::apply(&vouchers, &scope, &OutletSelection::from_param("B"));
        prop_assert!(visible.is_empty());
    }

    /// Date sort is non-increasing by instant and keeps input order on ties.
    #[test]
    fn prop_date_sort_descending_and_stable(vouchers in arb_vouchers()) {
        let directory = directory();
        let refs: Vec<&Voucher> = vouchers.iter().collect();
        let sorted = VoucherSorter::new(&directory).sort(&refs, SortKey::Date);

        prop_assert_eq!(sorted.len(), refs.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.issue_date >= b.issue_date);
            if a.issue_date == b.issue_date {
                prop_assert!(position(a) < position(b));
            }
        }
    }

    /// Month sort is non-increasing by bucket and keeps input order within a bucket.
    #[test]
    fn prop_month_sort_groups_stably(vouchers in arb_vouchers()) {
        let directory = directory();
        let refs: Vec<&Voucher> = vouchers.iter().collect();
        let sorted = VoucherSorter::new(&directory).sort(&refs, SortKey::Month);

        let bucket = |v: &Voucher| i64::from(v.issue_date.year()) * 12 + i64::from(v.issue_date.month0());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(bucket(a) >= bucket(b));
            if bucket(a) == bucket(b) {
                prop_assert!(position(a) < position(b));
            }
        }
    }
}
