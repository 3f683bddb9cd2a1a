//! Edit and delete intents forwarded to the data layer.
//!
//! This crate never mutates vouchers. Row actions produce a [`VoucherIntent`]
//! that the caller hands to whatever owns persistence.

use serde::{Deserialize, Serialize};
use vouchdesk_shared::types::VoucherId;

use super::types::Voucher;
use crate::access::AccessScope;

/// Action requested on a voucher row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum VoucherIntent {
    /// Open the voucher for editing.
    Edit {
        /// Voucher as currently displayed.
        voucher: Voucher,
    },
    /// Delete the voucher.
    Delete {
        /// Voucher to delete.
        voucher_id: VoucherId,
    },
}

/// Synchronous yes/no confirmation asked before a delete is forwarded.
pub trait ConfirmationGate {
    /// Returns true if the user confirmed deleting `voucher`.
    fn confirm_delete(&self, voucher: &Voucher) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&Voucher) -> bool,
{
    fn confirm_delete(&self, voucher: &Voucher) -> bool {
        self(voucher)
    }
}

/// Produces intents for vouchers inside an access scope.
#[derive(Debug, Clone, Copy)]
pub struct VoucherActions<'a> {
    scope: &'a AccessScope,
}

impl<'a> VoucherActions<'a> {
    /// Creates actions bound to `scope`.
    #[must_use]
    pub const fn new(scope: &'a AccessScope) -> Self {
        Self { scope }
    }

    /// Edit intent, or `None` if the voucher's outlet is outside the scope.
    #[must_use]
    pub fn edit(&self, voucher: &Voucher) -> Option<VoucherIntent> {
        self.in_scope(voucher).then(|| VoucherIntent::Edit {
            voucher: voucher.clone(),
        })
    }

    /// Delete intent, only when the voucher is in scope and `gate` confirms.
    pub fn delete(&self, voucher: &Voucher, gate: &impl ConfirmationGate) -> Option<VoucherIntent> {
        if !self.in_scope(voucher) {
            return None;
        }
        if !gate.confirm_delete(voucher) {
            tracing::debug!(voucher_id = %voucher.id, "delete declined");
            return None;
        }
        Some(VoucherIntent::Delete {
            voucher_id: voucher.id.clone(),
        })
    }

    fn in_scope(&self, voucher: &Voucher) -> bool {
        let permitted = self.scope.permits(&voucher.outlet_id);
        if !permitted {
            tracing::warn!(
                voucher_id = %voucher.id,
                outlet_id = %voucher.outlet_id,
                "intent requested for voucher outside access scope"
            );
        }
        permitted
    }
}
