use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{IdSequence, MemoryStore, RecordStore};
use crate::record::{Record, RecordDraft};

/// On-disk layout of a [`JsonFileStore`].
#[derive(Serialize, Deserialize)]
struct StoreFile {
    next_id: IdSequence,
    records: Vec<Record>,
}

/// Record store persisted as a single pretty-printed JSON file.
///
/// The whole file is rewritten after every mutation, or once per
/// [`RecordStore::insert_batch`]. Writes go to a sibling `.tmp` file that is
/// then renamed over the store, so readers never see a partial file. A
/// missing file is an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading existing records if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let inner = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read record store {}", path.display()))?;
            let file: StoreFile = serde_json::from_str(&content)
                .with_context(|| format!("record store {} is corrupt", path.display()))?;
            info!(
                path = %path.display(),
                records = file.records.len(),
                next_id = file.next_id.peek(),
                "Loaded record store"
            );
            MemoryStore::from_parts(file.records, file.next_id)
        } else {
            debug!(path = %path.display(), "Record store not found, starting empty");
            MemoryStore::new()
        };

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let file = StoreFile {
            next_id: self.inner.ids().clone(),
            records: self.inner.records()?,
        };
        let json = serde_json::to_string_pretty(&file)?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .with_context(|| format!("failed to write record store {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .with_context(|| format!("failed to replace record store {}", self.path.display()))?;

        debug!(path = %self.path.display(), records = file.records.len(), "Saved record store");
        Ok(())
    }

    /// Applies `change` to the in-memory copy and saves. If the save fails the
    /// in-memory copy is rolled back so it keeps matching the file.
    fn commit<T>(&mut self, change: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let snapshot = self.inner.clone();
        let result = change(&mut self.inner).and_then(|value| {
            self.save()?;
            Ok(value)
        });
        if result.is_err() {
            self.inner = snapshot;
        }
        result
    }
}

impl RecordStore for JsonFileStore {
    fn records(&self) -> Result<Vec<Record>> {
        self.inner.records()
    }

    fn get(&self, id: u64) -> Result<Option<Record>> {
        self.inner.get(id)
    }

    fn insert(&mut self, draft: RecordDraft) -> Result<Record> {
        self.commit(|inner| inner.insert(draft))
    }

    fn clear(&mut self) -> Result<()> {
        self.commit(|inner| inner.clear())
    }

    fn insert_batch(&mut self, drafts: Vec<RecordDraft>, replace: bool) -> Result<Vec<Record>> {
        let count = drafts.len();
        let records = self.commit(|inner| inner.insert_batch(drafts, replace))?;
        info!(path = %self.path.display(), count, replace, "Saved batch");
        Ok(records)
    }

    fn len(&self) -> Result<usize> {
        self.inner.len()
    }
}
