//! Voucher table engine.
//!
//! # Modules
//!
//! - `types` - Voucher, outlet, and outlet directory types
//! - `filter` - Scope and single-outlet filtering, outlet selector
//! - `sort` - Outlet, date, and month ordering
//! - `intent` - Edit/delete intents behind a confirmation gate

pub mod filter;
pub mod intent;
pub mod sort;
pub mod types;

#[cfg(test)]
mod filter_props;
#[cfg(test)]
pub(crate) mod test_support;

pub use filter::{
    ALL_OUTLETS_LABEL, FilterSelection, OutletOption, OutletSelection, OutletSelector,
    VoucherFilter,
};
pub use intent::{ConfirmationGate, VoucherActions, VoucherIntent};
pub use sort::{SortKey, VoucherSorter};
pub use types::{Outlet, OutletDirectory, UNKNOWN_OUTLET_LABEL, Voucher, VoucherStatus};
