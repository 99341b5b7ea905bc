//! Record storage.
//!
//! [`RecordStore`] is the seam between the pipeline and wherever records
//! live. Stores own an [`IdSequence`] so ids stay unique and increasing
//! until an explicit [`RecordStore::clear`].
//! [`MemoryStore`] keeps records in memory; [`JsonFileStore`] persists them
//! to a JSON file between runs.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordDraft};

pub trait RecordStore {
    /// All records in id order.
    fn records(&self) -> Result<Vec<Record>>;

    /// Looks up a record; `None` when the id does not exist.
    fn get(&self, id: u64) -> Result<Option<Record>>;

    /// Persists a draft under the next id and returns the stored record.
    fn insert(&mut self, draft: RecordDraft) -> Result<Record>;

    /// Removes every record and restarts ids at 1.
    fn clear(&mut self) -> Result<()>;

    /// Inserts drafts in order, after clearing the store when `replace` is
    /// set. Persistent stores override this to write once per batch.
    fn insert_batch(&mut self, drafts: Vec<RecordDraft>, replace: bool) -> Result<Vec<Record>> {
        if replace {
            self.clear()?;
        }
        drafts.into_iter().map(|draft| self.insert(draft)).collect()
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Monotonic id generator starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hands out the current id and advances.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`IdSequence::next_id`] returns.
    pub(crate) fn peek(&self) -> u64 {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
