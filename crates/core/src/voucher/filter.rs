//! Scope and outlet filtering for the voucher table.
//!
//! Filtering runs two narrowing passes over the caller's collection:
//! 1. Non-super-admin scopes drop vouchers from outlets they cannot see.
//! 2. A single selected outlet drops every other outlet.
//!
//! The selector surface is built from the same scope so the presentation
//! layer can only offer permitted outlets.

use serde::{Deserialize, Serialize};
use vouchdesk_shared::types::OutletId;

use super::sort::SortKey;
use super::types::{OutletDirectory, Voucher};
use crate::access::{AccessScope, RoleTier};

/// Label of the selector entry that clears the outlet filter.
pub const ALL_OUTLETS_LABEL: &str = "All Outlets";

/// Outlet filter chosen in the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutletSelection {
    /// No single-outlet filter.
    #[default]
    All,
    /// Only this outlet.
    Outlet(OutletId),
}

impl OutletSelection {
    /// Parses a selector value where `"all"` clears the filter.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Outlet(OutletId::new(value))
        }
    }

    /// Returns the selected outlet, if any.
    #[must_use]
    pub const fn outlet_id(&self) -> Option<&OutletId> {
        match self {
            Self::All => None,
            Self::Outlet(id) => Some(id),
        }
    }
}

/// Caller-owned table state: outlet filter plus sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Outlet filter.
    #[serde(default)]
    pub outlet: OutletSelection,
    /// Sort key.
    #[serde(default)]
    pub sort: SortKey,
}

impl FilterSelection {
    /// Creates a selection.
    #[must_use]
    pub const fn new(outlet: OutletSelection, sort: SortKey) -> Self {
        Self { outlet, sort }
    }
}

/// Stateless voucher filter.
pub struct VoucherFilter;

impl VoucherFilter {
    /// Returns the vouchers visible under `scope` and `selected`, in input order.
    ///
    /// A selected outlet outside the scope yields an empty result.
    #[must_use]
    pub fn apply<'a>(
        vouchers: &'a [Voucher],
        scope: &AccessScope,
        selected: &OutletSelection,
    ) -> Vec<&'a Voucher> {
        let visible: Vec<&Voucher> = vouchers
            .iter()
            .filter(|v| scope.tier == RoleTier::SuperAdmin || scope.permits(&v.outlet_id))
            .filter(|v| match selected {
                OutletSelection::All => true,
                OutletSelection::Outlet(id) => &v.outlet_id == id,
            })
            .collect();

        tracing::debug!(
            total = vouchers.len(),
            visible = visible.len(),
            tier = %scope.tier,
            "filtered vouchers"
        );
        visible
    }
}

/// One entry of the outlet selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletOption {
    /// Selection applied when the entry is chosen.
    pub value: OutletSelection,
    /// Display label.
    pub label: String,
}

/// Outlet selector limited to the scope's permitted outlets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletSelector {
    options: Vec<OutletOption>,
}

impl OutletSelector {
    /// Builds the options in directory order, with "All Outlets" first for super-admins.
    #[must_use]
    pub fn new(scope: &AccessScope, directory: &OutletDirectory) -> Self {
        let all = scope
            .tier
            .shows_all_outlets_option()
            .then(|| OutletOption {
                value: OutletSelection::All,
                label: ALL_OUTLETS_LABEL.to_string(),
            });

        let outlets = directory
            .iter()
            .filter(|outlet| scope.permits(&outlet.id))
            .map(|outlet| OutletOption {
                value: OutletSelection::Outlet(outlet.id.clone()),
                label: outlet.name.clone(),
            });

        Self {
            options: all.into_iter().chain(outlets).collect(),
        }
    }

    /// Options to render.
    #[must_use]
    pub fn options(&self) -> &[OutletOption] {
        &self.options
    }

    /// Accepts `choice` only if it is one of the offered options.
    #[must_use]
    pub fn select(&self, choice: &OutletSelection) -> Option<OutletSelection> {
        self.options
            .iter()
            .find(|option| &option.value == choice)
            .map(|option| option.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{ScopeResolver, User};
    use crate::voucher::test_support::{directory, voucher};

    fn sample() -> Vec<Voucher> {
        vec![
            voucher("V1", "A", "2024-01-01T00:00:00Z"),
            voucher("V2", "B", "2024-01-02T00:00:00Z"),
            voucher("V3", "C", "2024-01-03T00:00:00Z"),
            voucher("V4", "A", "2024-01-04T00:00:00Z"),
        ]
    }

    fn ids(vouchers: &[&Voucher]) -> Vec<String> {
        vouchers.iter().map(|v| v.id.to_string()).collect()
    }

    #[test]
    fn test_outlet_admin_sees_only_assigned_outlets() {
        let vouchers = sample();
        let scope = ScopeResolver::resolve(Some(&User::outlet_admin("u", ["A", "B"])));

        let visible = VoucherFilter::apply(&vouchers, &scope, &OutletSelection::All);
        assert_eq!(ids(&visible), ["V1", "V2", "V4"]);
    }

    #[test]
    fn test_outlet_admin_without_outlets_sees_everything() {
        let vouchers = sample();
        let scope = ScopeResolver::resolve(Some(&User::outlet_admin("u", Vec::<&str>::new())));

        let visible = VoucherFilter::apply(&vouchers, &scope, &OutletSelection::All);
        assert_eq!(visible.len(), vouchers.len());
    }

    #[test]
    fn test_selected_outlet_narrows_result() {
        let vouchers = sample();
        let scope = ScopeResolver::resolve(Some(&User::super_admin("root")));

        let visible =
            VoucherFilter::apply(&vouchers, &scope, &OutletSelection::from_param("A"));
        assert_eq!(ids(&visible), ["V1", "V4"]);
    }

    #[test]
    fn test_selection_outside_scope_is_empty() {
        let vouchers = sample();
        let scope = ScopeResolver::resolve(Some(&User::outlet_admin("u", ["A"])));

        let visible =
            VoucherFilter::apply(&vouchers, &scope, &OutletSelection::from_param("C"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_super_admin_ignores_restricted_outlets() {
        let vouchers = sample();
        let scope = AccessScope {
            tier: RoleTier::SuperAdmin,
            outlets: crate::access::OutletScope::Restricted(
                [OutletId::new("A")].into_iter().collect(),
            ),
        };

        let visible = VoucherFilter::apply(&vouchers, &scope, &OutletSelection::All);
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn test_from_param() {
        assert_eq!(OutletSelection::from_param("all"), OutletSelection::All);
        assert_eq!(OutletSelection::from_param("ALL"), OutletSelection::All);
        assert_eq!(
            OutletSelection::from_param("O1").outlet_id(),
            Some(&OutletId::new("O1"))
        );
    }

    #[test]
    fn test_selector_for_super_admin_offers_all() {
        let scope = ScopeResolver::resolve(Some(&User::super_admin("root")));
        let selector = OutletSelector::new(&scope, &directory());

        let labels: Vec<&str> = selector.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["All Outlets", "Alpha", "Bravo", "Charlie"]);
        assert_eq!(
            selector.select(&OutletSelection::All),
            Some(OutletSelection::All)
        );
    }

    #[test]
    fn test_selector_for_outlet_admin_is_scope_filtered() {
        let scope = ScopeResolver::resolve(Some(&User::outlet_admin("u", ["B", "C"])));
        let selector = OutletSelector::new(&scope, &directory());

        let labels: Vec<&str> = selector.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Bravo", "Charlie"]);

        assert!(selector.select(&OutletSelection::from_param("A")).is_none());
        assert!(selector.select(&OutletSelection::All).is_none());
        assert_eq!(
            selector.select(&OutletSelection::from_param("B")),
            Some(OutletSelection::from_param("B"))
        );
    }

    #[test]
    fn test_default_selection() {
        let selection = FilterSelection::default();
        assert_eq!(selection.outlet, OutletSelection::All);
        assert_eq!(selection.sort, SortKey::Month);
    }
}
