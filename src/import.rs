//! Record creation: scoring, date assignment and batch import.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::dates::DateSource;
use crate::error::ImportError;
use crate::normalize::normalize_batch;
use crate::parser::RawRow;
use crate::record::{NormalizedInput, Record, RecordDraft};
use crate::scoring::score;
use crate::storage::RecordStore;

/// Outcome of a successful batch import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub created_count: usize,
    /// One message per rejected row, e.g. `Row 3: Participants: ...`.
    pub warnings: Vec<String>,
}

/// Creates a single record, scoring it once and assigning a date from
/// `dates` when `date` is `None`.
pub fn create_record<S, D>(
    store: &mut S,
    input: NormalizedInput,
    date: Option<DateTime<Utc>>,
    dates: &mut D,
) -> anyhow::Result<Record>
where
    S: RecordStore + ?Sized,
    D: DateSource + ?Sized,
{
    store.insert(draft_for(input, date, dates))
}

fn draft_for<D>(input: NormalizedInput, date: Option<DateTime<Utc>>, dates: &mut D) -> RecordDraft
where
    D: DateSource + ?Sized,
{
    RecordDraft {
        usefulness_score: score(&input),
        date: date.unwrap_or_else(|| dates.meeting_date()),
        meeting: input,
    }
}

/// Validates every row, then (optionally) clears the store and creates a
/// record per valid row. The store receives the whole batch in one
/// [`RecordStore::insert_batch`] call.
///
/// Row failures become warnings. If no row validates the batch is rejected
/// before anything is cleared or written.
#[tracing::instrument(skip(store, rows, dates), fields(rows = rows.len()))]
pub fn import_batch<S, D>(
    store: &mut S,
    rows: &[RawRow],
    clear_existing: bool,
    dates: &mut D,
) -> Result<ImportSummary, ImportError>
where
    S: RecordStore + ?Sized,
    D: DateSource + ?Sized,
{
    let (valid, errors) = normalize_batch(rows);

    for error in &errors {
        warn!(row = error.row, message = %error.message, "Row failed validation");
    }

    if valid.is_empty() {
        warn!(errors = errors.len(), "No valid rows, rejecting batch");
        return Err(ImportError::Rejected { errors });
    }

    if clear_existing {
        info!("Replacing existing records");
    }

    let drafts = valid
        .into_iter()
        .map(|row| draft_for(row.input, row.date, dates))
        .collect();
    let created_count = store.insert_batch(drafts, clear_existing)?.len();

    info!(created = created_count, warnings = errors.len(), "Import complete");

    Ok(ImportSummary {
        created_count,
        warnings: errors.iter().map(ToString::to_string).collect(),
    })
}
