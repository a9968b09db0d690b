//! Family member use-cases.

use crate::model::family::{FamilyMember, FamilyMemberDraft, Relationship};
use crate::model::record::RecordId;
use crate::notify::NotificationSink;
use crate::store::commit::commit;
use crate::store::draft::ValidationError;
use crate::store::entity_store::EntityStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilySummary {
    pub total: usize,
    /// Members with at least one recorded health condition.
    pub with_conditions: usize,
    /// Sum of per-member medication counts.
    pub medications: u32,
}

/// View-model for the family screen.
pub struct FamilyMemberService<N: NotificationSink> {
    store: EntityStore<FamilyMember>,
    draft: FamilyMemberDraft,
    notifier: N,
}

impl<N: NotificationSink> FamilyMemberService<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_records(Vec::new(), notifier)
    }

    pub fn with_records(records: Vec<FamilyMember>, notifier: N) -> Self {
        Self {
            store: EntityStore::with_records(records),
            draft: FamilyMemberDraft::default(),
            notifier,
        }
    }

    pub fn draft(&self) -> &FamilyMemberDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FamilyMemberDraft {
        &mut self.draft
    }

    /// Commits the current draft as a new family member.
    ///
    /// # Contract
    /// - Requires `name`, `relationship` and an `age` starting with digits.
    /// - Other screens' person pickers are not updated.
    pub fn add_member(&mut self) -> Result<FamilyMember, ValidationError> {
        commit(&mut self.store, &mut self.draft, &self.notifier)
    }

    pub fn members(&self) -> &[FamilyMember] {
        self.store.records()
    }

    pub fn get(&self, id: RecordId) -> Option<&FamilyMember> {
        self.store.get(id)
    }

    pub fn summary(&self) -> FamilySummary {
        FamilySummary {
            total: self.store.len(),
            with_conditions: self.store.count(FamilyMember::has_conditions),
            medications: self
                .store
                .iter()
                .map(|member| member.medication_count)
                .sum(),
        }
    }

    pub fn relationship_options(&self) -> &'static [Relationship] {
        &Relationship::ALL
    }
}
