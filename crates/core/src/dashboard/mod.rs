//! Voucher dashboard pipeline.
//!
//! Wires scope resolution, filtering, sorting, row actions, and export
//! together for one data snapshot.

pub mod service;

pub use service::{VoucherDashboard, VoucherTable};
