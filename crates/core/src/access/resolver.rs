//! Resolves a user's access scope.

use tracing::{debug, warn};

use super::types::{AccessScope, OutletScope, RoleTier, User};

/// Stateless resolver for access scopes.
pub struct ScopeResolver;

impl ScopeResolver {
    /// Computes the permission tier and permitted outlets for a user.
    ///
    /// - Super-admins see every outlet regardless of their other flags.
    /// - Outlet-admins see their assigned outlets. An outlet-admin with no
    ///   assigned outlets falls back to unrestricted visibility.
    /// - Staff, and an absent user, are unrestricted here; staff visibility
    ///   is enforced outside the voucher table.
    #[must_use]
    pub fn resolve(user: Option<&User>) -> AccessScope {
        let Some(user) = user else {
            debug!("no session user, resolving to staff scope");
            return AccessScope::staff();
        };

        let scope = if user.is_super_admin {
            AccessScope {
                tier: RoleTier::SuperAdmin,
                outlets: OutletScope::Unrestricted,
            }
        } else if user.is_admin {
            let outlets = if user.outlet_ids.is_empty() {
                warn!(user_id = %user.id, "outlet admin has no assigned outlets, granting unrestricted scope");
                OutletScope::Unrestricted
            } else {
                OutletScope::Restricted(user.outlet_ids.clone())
            };
            AccessScope {
                tier: RoleTier::OutletAdmin,
                outlets,
            }
        } else {
            AccessScope::staff()
        };

        debug!(user_id = %user.id, tier = %scope.tier, "resolved access scope");
        scope
    }
}
