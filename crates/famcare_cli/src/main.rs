//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `famcare_core` linkage without the Flutter/FFI runtime.
//! - Print the counters of a freshly opened session.

use famcare_core::{CareHome, NotificationQueue, SessionOptions};

fn main() {
    println!("famcare_core ping={}", famcare_core::ping());
    println!("famcare_core version={}", famcare_core::core_version());

    let options = SessionOptions::from_env();
    let home = CareHome::open(options, NotificationQueue::new());
    let today = chrono::Local::now().date_naive();

    let family = home.family.summary();
    let medications = home.medications.summary();
    let appointments = home.appointments.summary(today);
    let overview = home.dashboard.overview();

    println!(
        "session seeded={} screen={}",
        options.seed_sample_data,
        home.active_screen().as_str()
    );
    println!(
        "family total={} with_conditions={} medications={}",
        family.total, family.with_conditions, family.medications
    );
    println!(
        "medications total={} taken={} pending_today={} adherence={}%",
        medications.total,
        medications.taken,
        medications.pending_today,
        medications.adherence_percent
    );
    println!(
        "appointments total={} pending={} this_week={} next={}",
        appointments.total,
        appointments.pending,
        appointments.this_week,
        appointments.next_label()
    );
    println!(
        "dashboard todays_medications={} upcoming_appointments={} active_reminders={}",
        overview.todays_medications, overview.upcoming_appointments, overview.active_reminders
    );
}
