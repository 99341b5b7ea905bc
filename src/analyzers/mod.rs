//! Meeting record aggregation.
//!
//! Pure functions over a slice of scored records: the headline summary,
//! per-criterion percentages, weekly usefulness trends and categorized
//! recommendations. [`analyzer::get_analytics`] bundles all four.

pub mod aggregate;
pub mod analyzer;
pub mod grade;
pub mod recommend;
pub mod trends;
pub mod types;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::record::{NormalizedInput, Record, RecordDraft};

    pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
    }

    fn meeting(id: u64, duration_minutes: u32) -> NormalizedInput {
        NormalizedInput {
            title: format!("Meeting {id}"),
            duration_minutes,
            participants: 4,
            actual_speakers: 2,
            decision_made: false,
            agenda_provided: false,
            follow_up_sent: false,
            could_be_async: false,
        }
    }

    /// A record with a fixed score; the other fields do not have to agree with it.
    pub fn record(id: u64, usefulness_score: u8, duration_minutes: u32) -> Record {
        Record {
            id,
            meeting: meeting(id, duration_minutes),
            date: at(2026, 3, 3),
            usefulness_score,
        }
    }

    pub fn draft(usefulness_score: u8, duration_minutes: u32) -> RecordDraft {
        RecordDraft {
            meeting: meeting(0, duration_minutes),
            date: at(2026, 3, 3),
            usefulness_score,
        }
    }
}
