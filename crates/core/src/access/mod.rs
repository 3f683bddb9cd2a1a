//! Role-scoped outlet visibility.
//!
//! This module provides:
//! - The session `User` shape
//! - The closed `RoleTier` enumeration
//! - `OutletScope` / `AccessScope` derived once per session
//! - `ScopeResolver` that applies the tier and fallback rules

pub mod resolver;
pub mod types;

#[cfg(test)]
mod resolver_props;

pub use resolver::ScopeResolver;
pub use types::{AccessScope, OutletScope, RoleTier, User};
