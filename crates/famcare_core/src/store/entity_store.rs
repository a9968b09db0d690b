//! Ordered in-memory record store.

use crate::model::record::{Record, RecordId};

/// Ordered sequence of records of one kind, owned by a single screen.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Record> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> {
    /// Creates an empty store whose first id is `1`.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store seeded with existing records.
    ///
    /// The id counter continues after the highest seeded id.
    pub fn with_records(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(|record| record.id().get())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { records, next_id }
    }

    /// Id the next insert will receive.
    pub fn peek_next_id(&self) -> RecordId {
        RecordId::new(self.next_id)
    }

    /// Allocates an id, builds the record with it and appends it.
    pub fn insert_with(&mut self, build: impl FnOnce(RecordId) -> T) -> &T {
        let id = RecordId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let index = self.records.len();
        self.records.push(build(id));
        &self.records[index]
    }

    /// Replaces the record with `id` by `update(old)`.
    ///
    /// Returns the new record, or `None` when no record has that id.
    pub fn replace_with(&mut self, id: RecordId, update: impl FnOnce(&T) -> T) -> Option<&T> {
        let slot = self.records.iter_mut().find(|record| record.id() == id)?;
        *slot = update(slot);
        Some(&*slot)
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.records.iter().filter(|record| predicate(record)).count()
    }
}

impl<'a, T: Record> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::EntityStore;
    use crate::model::record::{EntityKind, Record, RecordId};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        flag: bool,
    }

    impl Record for Row {
        const KIND: EntityKind = EntityKind::Medication;

        fn id(&self) -> RecordId {
            self.id
        }
    }

    #[test]
    fn ids_continue_after_highest_seeded_id() {
        let mut store = EntityStore::with_records(vec![
            Row { id: RecordId::new(1), flag: false },
            Row { id: RecordId::new(5), flag: false },
        ]);
        let inserted = store.insert_with(|id| Row { id, flag: true }).id;
        assert_eq!(inserted, RecordId::new(6));
        assert_eq!(store.peek_next_id(), RecordId::new(7));
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = EntityStore::<Row>::new();
        assert!(store.is_empty());
        let first = store.insert_with(|id| Row { id, flag: false }).id;
        assert_eq!(first, RecordId::new(1));
    }

    #[test]
    fn replace_with_keeps_position_and_ignores_unknown_ids() {
        let mut store = EntityStore::new();
        store.insert_with(|id| Row { id, flag: false });
        store.insert_with(|id| Row { id, flag: false });

        let updated = store
            .replace_with(RecordId::new(2), |row| Row { flag: !row.flag, ..row.clone() })
            .cloned();
        assert_eq!(updated.map(|row| row.flag), Some(true));
        assert_eq!(store.records()[1].id, RecordId::new(2));
        assert!(store.replace_with(RecordId::new(9), Clone::clone).is_none());
        assert_eq!(store.count(|row| row.flag), 1);
    }
}
