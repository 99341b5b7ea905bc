//! Meeting data types shared by the normalizer, scorer, store and aggregator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated, fully typed meeting row.
///
/// `actual_speakers` is not checked against `participants`; anything that
/// divides by `participants` must guard the zero case itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInput {
    pub title: String,
    pub duration_minutes: u32,
    pub participants: u32,
    pub actual_speakers: u32,
    pub decision_made: bool,
    pub agenda_provided: bool,
    pub follow_up_sent: bool,
    pub could_be_async: bool,
}

/// Everything a store needs to persist a meeting except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub meeting: NormalizedInput,
    pub date: DateTime<Utc>,
    pub usefulness_score: u8,
}

/// A persisted meeting. The score is computed once at creation and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    #[serde(flatten)]
    pub meeting: NormalizedInput,
    pub date: DateTime<Utc>,
    pub usefulness_score: u8,
}

impl Record {
    pub fn from_draft(id: u64, draft: RecordDraft) -> Self {
        Record {
            id,
            meeting: draft.meeting,
            date: draft.date,
            usefulness_score: draft.usefulness_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_serializes_flat_camel_case() {
        let record = Record {
            id: 7,
            meeting: NormalizedInput {
                title: "Standup".to_string(),
                duration_minutes: 15,
                participants: 6,
                actual_speakers: 6,
                decision_made: false,
                agenda_provided: true,
                follow_up_sent: false,
                could_be_async: true,
            },
            date: Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap(),
            usefulness_score: 55,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Standup");
        assert_eq!(json["durationMinutes"], 15);
        assert_eq!(json["couldBeAsync"], true);
        assert_eq!(json["usefulnessScore"], 55);

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
