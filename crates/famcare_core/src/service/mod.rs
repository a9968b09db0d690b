//! Screen-level use-case services.
//!
//! # Responsibility
//! - Own one entity store and one form buffer per screen.
//! - Expose commit/toggle/query operations to UI and FFI layers.
//!
//! # Invariants
//! - A service never reads or writes another service's store.
//! - Derived summaries are recomputed from the store on every call.

pub mod appointment_service;
pub mod dashboard_service;
pub mod family_service;
pub mod medication_service;
