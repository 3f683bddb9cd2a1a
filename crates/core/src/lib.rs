//! Core business logic for Vouchdesk.
//!
//! This crate contains pure voucher-table logic with ZERO web or database
//! dependencies. Callers supply the session user, outlets, and vouchers;
//! everything here is a deterministic function of that snapshot.
//!
//! # Modules
//!
//! - `access` - Role tiers and outlet access scopes
//! - `voucher` - Voucher types, filtering, sorting, and row intents
//! - `reports` - Comma-delimited report export
//! - `dashboard` - Scope, filter, sort, and export wired per snapshot

pub mod access;
pub mod dashboard;
pub mod reports;
pub mod voucher;
