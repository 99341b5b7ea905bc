use crate::analyzers::grade::USEFUL_THRESHOLD;
use crate::analyzers::types::{MetricsBreakdown, Summary};
use crate::analyzers::utility::{minutes_to_tenths_of_hours, percentage, round_tenth};
use crate::record::Record;

/// Meetings scoring under this count toward time that could be saved.
const LOW_VALUE_THRESHOLD: u8 = 50;

/// Length of the observation window assumed by `hours_per_week`.
const WEEKS_OBSERVED: f64 = 4.0;

/// Builds the headline [`Summary`]. An empty slice gives all zeros.
pub fn summarize(records: &[Record]) -> Summary {
    let total_meetings = records.len();
    let useful_meetings = records
        .iter()
        .filter(|r| r.usefulness_score >= USEFUL_THRESHOLD)
        .count();
    let async_candidates = records.iter().filter(|r| r.meeting.could_be_async).count();

    let low_value_minutes: u64 = records
        .iter()
        .filter(|r| r.usefulness_score < LOW_VALUE_THRESHOLD)
        .map(|r| u64::from(r.meeting.duration_minutes))
        .sum();
    let total_minutes: u64 = records
        .iter()
        .map(|r| u64::from(r.meeting.duration_minutes))
        .sum();

    Summary {
        total_meetings,
        useful_meetings,
        useful_meetings_percentage: percentage(useful_meetings, total_meetings),
        time_saved_hours: minutes_to_tenths_of_hours(low_value_minutes),
        async_candidates,
        hours_per_week: round_tenth(total_minutes as f64 / 60.0 / WEEKS_OBSERVED),
    }
}

/// Percentages of meetings with decisions, actions, agendas, follow-ups and
/// async eligibility.
///
/// "Actions" counts meetings where a decision was made or a follow-up was
/// sent.
pub fn breakdown_metrics(records: &[Record]) -> MetricsBreakdown {
    let total = records.len();
    let share = |pred: fn(&Record) -> bool| percentage(records.iter().filter(|r| pred(r)).count(), total);

    MetricsBreakdown {
        decisions_percentage: share(|r| r.meeting.decision_made),
        actions_percentage: share(|r| r.meeting.decision_made || r.meeting.follow_up_sent),
        agendas_percentage: share(|r| r.meeting.agenda_provided),
        follow_ups_percentage: share(|r| r.meeting.follow_up_sent),
        async_percentage: share(|r| r.meeting.could_be_async),
    }
}
