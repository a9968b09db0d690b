//! In-memory entity stores and the commit operation.
//!
//! # Responsibility
//! - Hold one ordered sequence of records per screen.
//! - Turn validated drafts into records and notify the UI either way.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Identifiers come from a monotonic counter, never from `len + 1`.
//! - A rejected commit leaves both the store and the draft untouched.

pub mod commit;
pub mod draft;
pub mod entity_store;
