//! Access scope domain types.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use vouchdesk_shared::types::{OutletId, UserId};

/// A dashboard user as supplied by the session layer.
///
/// The role booleans mirror the session payload; [`RoleTier`] is derived
/// from them once by the scope resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Whether the user administers one or more outlets.
    #[serde(default)]
    pub is_admin: bool,
    /// Whether the user has visibility across every outlet.
    #[serde(default)]
    pub is_super_admin: bool,
    /// Outlets the user administers. Ignored for staff and super-admins.
    #[serde(default)]
    pub outlet_ids: BTreeSet<OutletId>,
}

impl User {
    /// Creates a staff user with no admin flags.
    #[must_use]
    pub fn staff(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Creates an outlet-admin for the given outlets.
    #[must_use]
    pub fn outlet_admin<I, O>(id: impl Into<UserId>, outlets: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OutletId>,
    {
        Self {
            id: id.into(),
            is_admin: true,
            outlet_ids: outlets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates a super-admin.
    #[must_use]
    pub fn super_admin(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            is_admin: true,
            is_super_admin: true,
            ..Self::default()
        }
    }
}

/// Permission tier of a user.
///
/// Ordered from lowest to highest visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleTier {
    /// Front-desk staff.
    Staff,
    /// Administrator of a set of outlets.
    OutletAdmin,
    /// Unrestricted administrator.
    SuperAdmin,
}

impl RoleTier {
    /// Returns the string representation of the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::OutletAdmin => "outlet-admin",
            Self::SuperAdmin => "super-admin",
        }
    }

    /// Returns true for outlet-admins and super-admins.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::OutletAdmin | Self::SuperAdmin)
    }

    /// Returns true if the outlet selector offers an "All Outlets" entry.
    #[must_use]
    pub const fn shows_all_outlets_option(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outlets a scope may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "outlets", rename_all = "snake_case")]
pub enum OutletScope {
    /// Every outlet is visible.
    Unrestricted,
    /// Only the listed outlets are visible.
    Restricted(BTreeSet<OutletId>),
}

impl OutletScope {
    /// Returns true if the outlet is visible under this scope.
    #[must_use]
    pub fn contains(&self, outlet_id: &OutletId) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(ids) => ids.contains(outlet_id),
        }
    }

    /// Returns true if no restriction applies.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }
}

/// Derived access scope for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessScope {
    /// Permission tier.
    pub tier: RoleTier,
    /// Permitted outlets.
    pub outlets: OutletScope,
}

impl AccessScope {
    /// Unrestricted staff scope used when no user is present.
    #[must_use]
    pub const fn staff() -> Self {
        Self {
            tier: RoleTier::Staff,
            outlets: OutletScope::Unrestricted,
        }
    }

    /// Returns true if the scope permits the outlet.
    #[must_use]
    pub fn permits(&self, outlet_id: &OutletId) -> bool {
        self.outlets.contains(outlet_id)
    }
}

impl Default for AccessScope {
    fn default() -> Self {
        Self::staff()
    }
}
