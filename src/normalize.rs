//! Row normalization: coerces a [`RawRow`] into a typed [`NormalizedInput`].
//!
//! Header names are trimmed before lookup, and when two headers trim to the
//! same name the later column wins. Missing columns fall back to
//! zero, `false` or an empty title; values that are present but cannot be
//! coerced fail the row with a [`ValidationError`].

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ValidationError;
use crate::parser::{RawRow, RawValue};
use crate::record::NormalizedInput;

pub const MEETING_TITLE: &str = "Meeting_Title";
pub const DURATION_MINUTES: &str = "Duration_Minutes";
pub const PARTICIPANTS: &str = "Participants";
pub const ACTUAL_SPEAKERS: &str = "Actual_Speakers";
pub const DECISION_MADE: &str = "Decision_Made";
pub const AGENDA_PROVIDED: &str = "Agenda_Provided";
pub const FOLLOW_UP_SENT: &str = "Follow_Up_Sent";
pub const COULD_BE_ASYNC: &str = "Could_Be_Async";
/// Optional; undated rows get a date at creation time.
pub const DATE: &str = "Date";

/// The CSV column contract, in export order.
pub const COLUMNS: [&str; 8] = [
    MEETING_TITLE,
    DURATION_MINUTES,
    PARTICIPANTS,
    ACTUAL_SPEAKERS,
    DECISION_MADE,
    AGENDA_PROVIDED,
    FOLLOW_UP_SENT,
    COULD_BE_ASYNC,
];

/// A row that passed validation, with its optional explicit date.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub row: usize,
    pub input: NormalizedInput,
    pub date: Option<DateTime<Utc>>,
}

/// Normalizes one row. `row` is the 1-based data row index used in errors.
pub fn normalize(raw: &RawRow, row: usize) -> Result<NormalizedRow, ValidationError> {
    let fields = Fields::new(raw);
    let fail = |message: String| ValidationError::new(row, message);

    let input = NormalizedInput {
        title: fields.text(MEETING_TITLE),
        duration_minutes: fields.count(DURATION_MINUTES).map_err(fail)?,
        participants: fields.count(PARTICIPANTS).map_err(fail)?,
        actual_speakers: fields.count(ACTUAL_SPEAKERS).map_err(fail)?,
        decision_made: fields.flag(DECISION_MADE).map_err(fail)?,
        agenda_provided: fields.flag(AGENDA_PROVIDED).map_err(fail)?,
        follow_up_sent: fields.flag(FOLLOW_UP_SENT).map_err(fail)?,
        could_be_async: fields.flag(COULD_BE_ASYNC).map_err(fail)?,
    };
    let date = fields.date(DATE).map_err(fail)?;

    Ok(NormalizedRow { row, input, date })
}

/// Normalizes every row, collecting failures instead of stopping at the first.
pub fn normalize_batch(rows: &[RawRow]) -> (Vec<NormalizedRow>, Vec<ValidationError>) {
    let mut valid = Vec::new();
    let mut errors = Vec::new();

    for (index, raw) in rows.iter().enumerate() {
        match normalize(raw, index + 1) {
            Ok(row) => valid.push(row),
            Err(e) => errors.push(e),
        }
    }

    (valid, errors)
}

/// The yes/true/1 rule for boolean text.
pub fn truthy(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower == "yes" || lower == "true" || text == "1"
}

/// Trimmed-key view over a raw row.
struct Fields<'a> {
    values: Vec<(String, &'a RawValue)>,
}

impl<'a> Fields<'a> {
    fn new(raw: &'a RawRow) -> Self {
        Self {
            values: raw.iter().map(|(k, v)| (k.trim().to_string(), v)).collect(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a RawValue> {
        self.values
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(RawValue::Text(s)) => s.clone(),
            Some(RawValue::Number(n)) => n.to_string(),
            Some(RawValue::Bool(b)) => b.to_string(),
            Some(RawValue::Null) | None => String::new(),
        }
    }

    fn count(&self, key: &str) -> Result<u32, String> {
        let n = match self.get(key) {
            None | Some(RawValue::Null) => return Ok(0),
            Some(RawValue::Number(n)) => *n,
            Some(RawValue::Text(s)) if s.trim().is_empty() => return Ok(0),
            Some(RawValue::Text(s)) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => return Err(format!("{key}: expected a number, got {s:?}")),
            },
            Some(RawValue::Bool(b)) => {
                return Err(format!("{key}: expected a number, got boolean {b}"));
            }
        };

        if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
            return Err(format!("{key}: expected a whole non-negative number, got {n}"));
        }
        Ok(n as u32)
    }

    fn flag(&self, key: &str) -> Result<bool, String> {
        match self.get(key) {
            None | Some(RawValue::Null) => Ok(false),
            Some(RawValue::Text(s)) => Ok(truthy(s)),
            Some(RawValue::Bool(b)) => Ok(*b),
            Some(RawValue::Number(n)) if *n == 1.0 => Ok(true),
            Some(RawValue::Number(n)) if *n == 0.0 => Ok(false),
            Some(RawValue::Number(n)) => Err(format!("{key}: expected yes/no, got {n}")),
        }
    }

    fn date(&self, key: &str) -> Result<Option<DateTime<Utc>>, String> {
        let text = match self.get(key) {
            None | Some(RawValue::Null) => return Ok(None),
            Some(RawValue::Text(s)) if s.trim().is_empty() => return Ok(None),
            Some(RawValue::Text(s)) => s.trim(),
            Some(other) => return Err(format!("{key}: expected a date, got {other:?}")),
        };

        if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
            return Ok(Some(ts.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Some(dt.and_utc()))
            .ok_or_else(|| format!("{key}: expected YYYY-MM-DD or RFC 3339, got {text:?}"))
    }
}
