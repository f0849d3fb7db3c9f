//! Domain layer for license-aware version checks: value objects, the
//! version comparison policy, and pure reconciliation services.
pub mod domain;
pub mod policies;
pub mod services;
