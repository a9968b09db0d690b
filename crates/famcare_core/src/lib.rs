//! Core domain logic for the famcare family health dashboard.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod home;
pub mod logging;
pub mod model;
pub mod notify;
pub mod seed;
pub mod service;
pub mod store;

pub use config::SessionOptions;
pub use home::CareHome;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::{Appointment, AppointmentDraft, AppointmentStatus, AppointmentType};
pub use model::dashboard::{
    ActivityEntry, ActivityStatus, DashboardOverview, HealthMetric, Reminder, ReminderKind,
};
pub use model::family::{FamilyMember, FamilyMemberDraft, Relationship};
pub use model::medication::{Medication, MedicationDraft, MedicationStatus};
pub use model::record::{EntityKind, Record, RecordId};
pub use model::screen::{Screen, ScreenError};
pub use model::tone::BadgeTone;
pub use notify::{Notification, NotificationQueue, NotificationSink, Severity};
pub use service::appointment_service::{AppointmentService, AppointmentSummary};
pub use service::dashboard_service::{DashboardService, DashboardSummary};
pub use service::family_service::{FamilyMemberService, FamilySummary};
pub use service::medication_service::{MedicationService, MedicationSummary};
pub use store::draft::{Draft, ValidationError};
pub use store::entity_store::EntityStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
