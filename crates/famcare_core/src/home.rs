//! One UI session: the four screens plus tab selection.
//!
//! # Responsibility
//! - Construct every screen service from `SessionOptions`.
//! - Track which tab is active.
//!
//! # Invariants
//! - Each screen owns its own store; `CareHome` never copies records between
//!   them.
//! - All services share the session's notification sink.

use crate::config::SessionOptions;
use crate::model::screen::{Screen, ScreenError};
use crate::notify::NotificationSink;
use crate::seed;
use crate::service::appointment_service::AppointmentService;
use crate::service::dashboard_service::DashboardService;
use crate::service::family_service::FamilyMemberService;
use crate::service::medication_service::MedicationService;
use log::info;

/// Session-level controller owning every screen view-model.
pub struct CareHome<N: NotificationSink + Clone> {
    active_screen: Screen,
    pub family: FamilyMemberService<N>,
    pub medications: MedicationService<N>,
    pub appointments: AppointmentService<N>,
    pub dashboard: DashboardService,
}

impl<N: NotificationSink + Clone> CareHome<N> {
    /// Opens a session; stores are seeded when `options.seed_sample_data`.
    pub fn open(options: SessionOptions, notifier: N) -> Self {
        let home = if options.seed_sample_data {
            Self {
                active_screen: Screen::default(),
                family: FamilyMemberService::with_records(
                    seed::sample_family_members(),
                    notifier.clone(),
                ),
                medications: MedicationService::with_records(
                    seed::sample_medications(),
                    notifier.clone(),
                ),
                appointments: AppointmentService::with_records(
                    seed::sample_appointments(),
                    notifier,
                ),
                dashboard: DashboardService::with_samples(),
            }
        } else {
            Self {
                active_screen: Screen::default(),
                family: FamilyMemberService::new(notifier.clone()),
                medications: MedicationService::new(notifier.clone()),
                appointments: AppointmentService::new(notifier),
                dashboard: DashboardService::empty(),
            }
        };

        info!(
            "event=session_open module=home status=ok seeded={} members={} medications={} appointments={}",
            options.seed_sample_data,
            home.family.members().len(),
            home.medications.medications().len(),
            home.appointments.appointments().len()
        );
        home
    }

    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    pub fn select(&mut self, screen: Screen) {
        self.active_screen = screen;
    }

    /// Switches tabs by router key; the active tab is unchanged on error.
    pub fn select_screen(&mut self, key: &str) -> Result<Screen, ScreenError> {
        let screen = Screen::parse(key)?;
        self.select(screen);
        Ok(screen)
    }
}
