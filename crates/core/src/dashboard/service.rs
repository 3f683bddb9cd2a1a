//! Voucher table pipeline for one data snapshot.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::access::{AccessScope, ScopeResolver, User};
use crate::reports::{ReportError, ReportService, VoucherReport};
use crate::voucher::{
    FilterSelection, Outlet, OutletDirectory, OutletSelector, Voucher, VoucherActions,
    VoucherFilter, VoucherSorter,
};

/// Snapshot of the data a dashboard session works on.
///
/// The scope and selector are derived once; every [`view`](Self::view)
/// recomputes from the snapshot and the caller's selection.
#[derive(Debug, Clone)]
pub struct VoucherDashboard {
    scope: AccessScope,
    directory: OutletDirectory,
    selector: OutletSelector,
    vouchers: Vec<Voucher>,
    timezone: Tz,
}

impl VoucherDashboard {
    /// Resolves the user's scope and indexes the outlets.
    #[must_use]
    pub fn new(user: Option<&User>, outlets: Vec<Outlet>, vouchers: Vec<Voucher>) -> Self {
        let scope = ScopeResolver::resolve(user);
        let directory = OutletDirectory::new(outlets);
        let selector = OutletSelector::new(&scope, &directory);
        Self {
            scope,
            directory,
            selector,
            vouchers,
            timezone: Tz::UTC,
        }
    }

    /// Buckets months in `timezone`.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Resolved access scope.
    #[must_use]
    pub const fn scope(&self) -> &AccessScope {
        &self.scope
    }

    /// Outlet lookup.
    #[must_use]
    pub const fn directory(&self) -> &OutletDirectory {
        &self.directory
    }

    /// Scope-filtered outlet selector.
    #[must_use]
    pub const fn selector(&self) -> &OutletSelector {
        &self.selector
    }

    /// Row actions bound to this scope.
    #[must_use]
    pub const fn actions(&self) -> VoucherActions<'_> {
        VoucherActions::new(&self.scope)
    }

    /// Filters then sorts the snapshot for `selection`.
    #[must_use]
    pub fn view(&self, selection: &FilterSelection) -> VoucherTable<'_> {
        let visible = VoucherFilter::apply(&self.vouchers, &self.scope, &selection.outlet);
        let rows = VoucherSorter::new(&self.directory)
            .with_timezone(self.timezone)
            .sort(&visible, selection.sort);
        VoucherTable {
            directory: &self.directory,
            selection: selection.clone(),
            rows,
        }
    }
}

/// Ordered rows currently on screen.
#[derive(Debug, Clone)]
pub struct VoucherTable<'a> {
    directory: &'a OutletDirectory,
    selection: FilterSelection,
    rows: Vec<&'a Voucher>,
}

impl<'a> VoucherTable<'a> {
    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[&'a Voucher] {
        &self.rows
    }

    /// Selection the table was built for.
    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Display name of a row's outlet.
    #[must_use]
    pub fn outlet_name(&self, voucher: &Voucher) -> &'a str {
        self.directory.name_or_unknown(&voucher.outlet_id)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exports the rows in their current order.
    pub fn export(
        &self,
        service: &ReportService,
        today: NaiveDate,
    ) -> Result<VoucherReport, ReportError> {
        service.generate(&self.rows, self.directory, &self.selection.outlet, today)
    }
}
