//! Property-based tests for ScopeResolver.

use std::collections::BTreeSet;

use proptest::prelude::*;
use vouchdesk_shared::types::{OutletId, UserId};

use super::resolver::ScopeResolver;
use super::types::{OutletScope, RoleTier, User};

/// Strategy for generating sets of outlet IDs, possibly empty.
fn arb_outlet_ids() -> impl Strategy<Value = BTreeSet<OutletId>> {
    prop::collection::btree_set("O[0-9]{1,3}".prop_map(OutletId::new), 0..8)
}

/// Strategy for generating arbitrary users.
fn arb_user() -> impl Strategy<Value = User> {
    ("[a-z]{1,8}", any::<bool>(), any::<bool>(), arb_outlet_ids()).prop_map(
        |(id, is_admin, is_super_admin, outlet_ids)| User {
            id: UserId::new(id),
            is_admin,
            is_super_admin,
            outlet_ids,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Super-admins are unrestricted regardless of `is_admin` or `outlet_ids`.
    #[test]
    fn prop_super_admin_is_unrestricted(mut user in arb_user()) {
        user.is_super_admin = true;
        let scope = ScopeResolver::resolve(Some(&user));
        prop_assert_eq!(scope.tier, RoleTier::SuperAdmin);
        prop_assert_eq!(scope.outlets, OutletScope::Unrestricted);
    }

    /// Outlet-admins with assigned outlets see exactly those outlets.
    #[test]
    fn prop_outlet_admin_scope_matches_assignment(
        id in "[a-z]{1,8}",
        outlet_ids in arb_outlet_ids(),
    ) {
        prop_assume!(!outlet_ids.is_empty());
        let user = User {
            id: UserId::new(id),
            is_admin: true,
            is_super_admin: false,
            outlet_ids: outlet_ids.clone(),
        };
        let scope = ScopeResolver::resolve(Some(&user));
        prop_assert_eq!(scope.tier, RoleTier::OutletAdmin);
        prop_assert_eq!(scope.outlets, OutletScope::Restricted(outlet_ids));
    }

    /// Every resolved scope is either unrestricted or restricted to a non-empty set.
    #[test]
    fn prop_restricted_scope_is_never_empty(user in arb_user()) {
        let scope = ScopeResolver::resolve(Some(&user));
        if let OutletScope::Restricted(ids) = &scope.outlets {
            prop_assert!(!ids.is_empty());
            prop_assert_eq!(scope.tier, RoleTier::OutletAdmin);
        }
    }
}
