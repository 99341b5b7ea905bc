use anyhow::Result;
use std::collections::BTreeMap;
use tracing::debug;

use super::{IdSequence, RecordStore};
use crate::record::{Record, RecordDraft};

/// In-memory store for tests and one-shot runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<u64, Record>,
    ids: IdSequence,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously persisted state.
    pub(crate) fn from_parts(records: Vec<Record>, ids: IdSequence) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id, r)).collect(),
            ids,
        }
    }

    pub(crate) fn ids(&self) -> &IdSequence {
        &self.ids
    }
}

impl RecordStore for MemoryStore {
    fn records(&self) -> Result<Vec<Record>> {
        Ok(self.records.values().cloned().collect())
    }

    fn get(&self, id: u64) -> Result<Option<Record>> {
        Ok(self.records.get(&id).cloned())
    }

    fn insert(&mut self, draft: RecordDraft) -> Result<Record> {
        let id = self.ids.next_id();
        let record = Record::from_draft(id, draft);
        self.records.insert(id, record.clone());

        debug!(id, title = %record.meeting.title, score = record.usefulness_score, "Created record");
        Ok(record)
    }

    fn clear(&mut self) -> Result<()> {
        let removed = self.records.len();
        self.records.clear();
        self.ids.reset();

        debug!(removed, "Cleared records");
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::testing::draft;

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut store = MemoryStore::new();
        let a = store.insert(draft(80, 30)).unwrap();
        let b = store.insert(draft(40, 30)).unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(b.usefulness_score, 40);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_get_missing_is_none() {
        let mut store = MemoryStore::new();
        store.insert(draft(80, 30)).unwrap();

        assert!(store.get(1).unwrap().is_some());
        assert!(store.get(99).unwrap().is_none());
    }

    #[test]
    fn test_clear_resets_ids_and_is_idempotent() {
        let mut store = MemoryStore::new();
        store.insert(draft(80, 30)).unwrap();
        store.insert(draft(80, 30)).unwrap();

        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
        store.clear().unwrap();
        assert!(store.is_empty().unwrap());

        let next = store.insert(draft(10, 30)).unwrap();
        assert_eq!(next.id, 1);
    }

    #[test]
    fn test_insert_batch_replace() {
        let mut store = MemoryStore::new();
        store.insert(draft(80, 30)).unwrap();

        let added = store.insert_batch(vec![draft(20, 30), draft(60, 45)], false).unwrap();
        assert_eq!(added.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);

        let replaced = store.insert_batch(vec![draft(90, 30)], true).unwrap();
        assert_eq!(replaced[0].id, 1);
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.ids().peek(), 2);
    }
}
