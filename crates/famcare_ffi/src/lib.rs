//! Flutter-facing bindings for famcare core.

pub mod api;
