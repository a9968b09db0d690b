//! Summary dashboard.
//!
//! Every collection here is a static sample; nothing is committed or toggled.

use crate::model::dashboard::{
    ActivityEntry, ActivityStatus, DashboardOverview, HealthMetric, Reminder, ReminderKind,
};
use crate::seed;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub medication_reminders: usize,
    pub appointment_reminders: usize,
    pub completed_activity: usize,
    pub pending_activity: usize,
}

/// View-model for the dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardService {
    overview: DashboardOverview,
    reminders: Vec<Reminder>,
    metrics: Vec<HealthMetric>,
    activity: Vec<ActivityEntry>,
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::empty()
    }
}

impl DashboardService {
    /// Dashboard populated with the built-in samples.
    pub fn with_samples() -> Self {
        Self {
            overview: seed::sample_overview(),
            reminders: seed::sample_reminders(),
            metrics: seed::sample_metrics(),
            activity: seed::sample_activity(),
        }
    }

    /// Dashboard with zeroed counters and no entries.
    pub fn empty() -> Self {
        Self {
            overview: DashboardOverview {
                todays_medications: 0,
                upcoming_appointments: 0,
                active_reminders: 0,
            },
            reminders: Vec::new(),
            metrics: Vec::new(),
            activity: Vec::new(),
        }
    }

    pub fn overview(&self) -> DashboardOverview {
        self.overview
    }

    /// Today's reminders in display order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn metrics(&self) -> &[HealthMetric] {
        &self.metrics
    }

    /// Recent activity, newest first.
    pub fn recent_activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    pub fn summary(&self) -> DashboardSummary {
        let reminders_of = |kind: ReminderKind| {
            self.reminders
                .iter()
                .filter(|reminder| reminder.kind == kind)
                .count()
        };
        let activity_with = |status: ActivityStatus| {
            self.activity
                .iter()
                .filter(|entry| entry.status == status)
                .count()
        };
        DashboardSummary {
            medication_reminders: reminders_of(ReminderKind::Medication),
            appointment_reminders: reminders_of(ReminderKind::Appointment),
            completed_activity: activity_with(ActivityStatus::Completed),
            pending_activity: activity_with(ActivityStatus::Pending),
        }
    }
}
