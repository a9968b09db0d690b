//! Medication tracker use-cases.

use crate::model::medication::{Medication, MedicationDraft, FREQUENCY_OPTIONS};
use crate::model::record::RecordId;
use crate::notify::{Notification, NotificationSink};
use crate::seed::FAMILY_MEMBER_OPTIONS;
use crate::store::commit::commit;
use crate::store::draft::ValidationError;
use crate::store::entity_store::EntityStore;
use log::{debug, info};
use serde::Serialize;

pub const TAKEN_TITLE: &str = "Medication taken";
pub const UNMARKED_TITLE: &str = "Medication unmarked";

/// Quick-stat counters for the medication screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationSummary {
    pub total: usize,
    pub taken: usize,
    /// Untaken medications whose next dose is today.
    pub pending_today: usize,
    /// `taken / total` rounded to a whole percent; 0 when empty.
    pub adherence_percent: u32,
}

/// View-model for the medication screen.
pub struct MedicationService<N: NotificationSink> {
    store: EntityStore<Medication>,
    draft: MedicationDraft,
    notifier: N,
}

impl<N: NotificationSink> MedicationService<N> {
    /// Creates a service with an empty store.
    pub fn new(notifier: N) -> Self {
        Self::with_records(Vec::new(), notifier)
    }

    /// Creates a service seeded with existing records.
    pub fn with_records(records: Vec<Medication>, notifier: N) -> Self {
        Self {
            store: EntityStore::with_records(records),
            draft: MedicationDraft::default(),
            notifier,
        }
    }

    pub fn draft(&self) -> &MedicationDraft {
        &self.draft
    }

    /// Form buffer for field-by-field edits.
    pub fn draft_mut(&mut self) -> &mut MedicationDraft {
        &mut self.draft
    }

    /// Commits the current draft as a new medication.
    ///
    /// # Contract
    /// - Requires `name`, `dosage` and `person`.
    /// - New medications are untaken and due today.
    pub fn add_medication(&mut self) -> Result<Medication, ValidationError> {
        commit(&mut self.store, &mut self.draft, &self.notifier)
    }

    /// Flips `taken` on the medication with `id`.
    ///
    /// Returns the updated record, or `None` (without notifying) when no
    /// medication has that id.
    pub fn toggle_taken(&mut self, id: RecordId) -> Option<Medication> {
        let Some(updated) = self
            .store
            .replace_with(id, Medication::with_taken_toggled)
            .cloned()
        else {
            debug!("event=toggle_taken module=service status=noop entity=medication id={id}");
            return None;
        };

        info!(
            "event=toggle_taken module=service status=ok entity=medication id={} taken={}",
            id, updated.taken
        );
        let title = if updated.taken {
            TAKEN_TITLE
        } else {
            UNMARKED_TITLE
        };
        self.notifier.notify(Notification::info(
            title,
            format!("{} for {}", updated.name, updated.person),
        ));
        Some(updated)
    }

    /// Medications in display order.
    pub fn medications(&self) -> &[Medication] {
        self.store.records()
    }

    pub fn get(&self, id: RecordId) -> Option<&Medication> {
        self.store.get(id)
    }

    pub fn summary(&self) -> MedicationSummary {
        let total = self.store.len();
        let taken = self.store.count(|medication| medication.taken);
        MedicationSummary {
            total,
            taken,
            pending_today: self.store.count(Medication::is_pending_today),
            adherence_percent: rounded_percent(taken, total),
        }
    }

    /// Names offered by the person picker.
    pub fn person_options(&self) -> &'static [&'static str] {
        &FAMILY_MEMBER_OPTIONS
    }

    pub fn frequency_options(&self) -> &'static [&'static str] {
        &FREQUENCY_OPTIONS
    }
}

fn rounded_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (part * 200 + total) / (total * 2);
    u32::try_from(percent).unwrap_or(u32::MAX)
}
