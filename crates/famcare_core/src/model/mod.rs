//! Domain model for the family health dashboard.
//!
//! # Responsibility
//! - Define the record shapes rendered by each dashboard screen.
//! - Map categorical fields onto explicit enums with total tone mappings.
//!
//! # Invariants
//! - Every stored record is identified by a `RecordId` unique within its store.
//! - Records are never deleted; only `Medication::taken` changes after creation.

pub mod appointment;
pub mod dashboard;
pub mod family;
pub mod medication;
pub mod record;
pub mod screen;
pub mod tone;
