//! Voucher and outlet domain types.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use vouchdesk_shared::types::{OutletId, VoucherId};

/// Label used wherever a voucher references an outlet missing from the directory.
pub const UNKNOWN_OUTLET_LABEL: &str = "Unknown Outlet";

/// Voucher lifecycle status.
///
/// Transitions (Issued -> Redeemed, Issued -> Expired) happen in external
/// issuance and redemption flows; this crate only reads the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    /// Issued and redeemable.
    Issued,
    /// Redeemed against a bill.
    Redeemed,
    /// Passed its expiry date without redemption.
    Expired,
}

impl VoucherStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Issued => "ISSUED",
            Self::Redeemed => "REDEEMED",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for VoucherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A retail outlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    /// Outlet ID.
    pub id: OutletId,
    /// Display name.
    pub name: String,
}

impl Outlet {
    /// Creates a new outlet.
    #[must_use]
    pub fn new(id: impl Into<OutletId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A redeemable voucher as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    /// Voucher ID.
    pub id: VoucherId,
    /// Recipient name.
    pub recipient_name: String,
    /// Recipient mobile number.
    pub recipient_mobile: String,
    /// Outlet the voucher was issued at.
    pub outlet_id: OutletId,
    /// Lifecycle status.
    pub status: VoucherStatus,
    /// Issue instant.
    #[serde(deserialize_with = "deserialize_instant")]
    pub issue_date: DateTime<Utc>,
    /// Expiry instant.
    #[serde(deserialize_with = "deserialize_instant")]
    pub expiry_date: DateTime<Utc>,
    /// Redemption instant, if redeemed.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub redeemed_date: Option<DateTime<Utc>>,
    /// Bill number the voucher was redeemed against.
    #[serde(default)]
    pub redemption_bill_no: Option<String>,
}

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date as UTC midnight.
fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| format!("invalid date: {value}"))
}

fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).map_err(serde::de::Error::custom)
}

fn deserialize_optional_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .as_deref()
        .map(parse_instant)
        .transpose()
        .map_err(serde::de::Error::custom)
}

/// Outlet lookup by ID that keeps the supplied order for display.
#[derive(Debug, Clone, Default)]
pub struct OutletDirectory {
    outlets: Vec<Outlet>,
    index: HashMap<OutletId, usize>,
}

impl OutletDirectory {
    /// Builds a directory. When IDs repeat, the first outlet wins lookups.
    #[must_use]
    pub fn new(outlets: Vec<Outlet>) -> Self {
        let mut index = HashMap::with_capacity(outlets.len());
        for (position, outlet) in outlets.iter().enumerate() {
            index.entry(outlet.id.clone()).or_insert(position);
        }
        Self { outlets, index }
    }

    /// Looks up an outlet by ID.
    #[must_use]
    pub fn get(&self, id: &OutletId) -> Option<&Outlet> {
        self.index.get(id).map(|&position| &self.outlets[position])
    }

    /// Returns the outlet's display name, or [`UNKNOWN_OUTLET_LABEL`].
    #[must_use]
    pub fn name_or_unknown(&self, id: &OutletId) -> &str {
        match self.get(id) {
            Some(outlet) => &outlet.name,
            None => {
                tracing::debug!(outlet_id = %id, "unresolved outlet reference");
                UNKNOWN_OUTLET_LABEL
            }
        }
    }

    /// Iterates outlets in their supplied order.
    pub fn iter(&self) -> impl Iterator<Item = &Outlet> {
        self.outlets.iter()
    }

    /// Number of outlets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outlets.len()
    }

    /// Returns true if the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outlets.is_empty()
    }
}
