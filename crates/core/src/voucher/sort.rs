//! Voucher ordering policies.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::types::{OutletDirectory, Voucher};

/// Sort policy for the voucher table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by outlet display name.
    Outlet,
    /// Most recently issued first.
    Date,
    /// Most recent issue month first, input order kept within a month.
    #[default]
    Month,
}

impl SortKey {
    /// Every key, in selector order.
    pub const ALL: [Self; 3] = [Self::Outlet, Self::Date, Self::Month];

    /// Returns the string representation of the key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Outlet => "outlet",
            Self::Date => "date",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outlet" => Ok(Self::Outlet),
            "date" => Ok(Self::Date),
            "month" => Ok(Self::Month),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Primary comparison key for outlet names: canonical decomposition with
/// combining marks stripped, lowercased.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Stable, non-mutating voucher sorter.
#[derive(Debug, Clone)]
pub struct VoucherSorter<'a> {
    directory: &'a OutletDirectory,
    timezone: Tz,
}

impl<'a> VoucherSorter<'a> {
    /// Creates a sorter that resolves outlet names through `directory` and
    /// buckets months in UTC.
    #[must_use]
    pub const fn new(directory: &'a OutletDirectory) -> Self {
        Self {
            directory,
            timezone: Tz::UTC,
        }
    }

    /// Buckets months in `timezone` instead of UTC.
    #[must_use]
    pub const fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns a new ordering of `vouchers`; the input slice is untouched.
    #[must_use]
    pub fn sort<'v>(&self, vouchers: &[&'v Voucher], key: SortKey) -> Vec<&'v Voucher> {
        let mut ordered = vouchers.to_vec();
        match key {
            SortKey::Outlet => {
                // Accent and case differences only break ties.
                ordered.sort_by_cached_key(|v| {
                    let name = self.directory.name_or_unknown(&v.outlet_id);
                    (collation_key(name), name.to_string())
                });
            }
            SortKey::Date => {
                ordered.sort_by_key(|v| Reverse(v.issue_date.timestamp_millis()));
            }
            SortKey::Month => {
                ordered.sort_by_key(|v| Reverse(self.month_bucket(v)));
            }
        }
        tracing::debug!(count = ordered.len(), key = %key, "sorted vouchers");
        ordered
    }

    /// `year * 12 + month0` of the issue date in the sorter's timezone.
    fn month_bucket(&self, voucher: &Voucher) -> i64 {
        let local = voucher.issue_date.with_timezone(&self.timezone);
        i64::from(local.year()) * 12 + i64::from(local.month0())
    }
}
