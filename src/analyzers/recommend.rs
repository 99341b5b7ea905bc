use crate::analyzers::types::{Recommendation, RecommendationType};
use crate::record::Record;

/// Maximum recommendations emitted per category.
const PER_CATEGORY: usize = 2;

fn is_async_candidate(r: &Record) -> bool {
    r.meeting.could_be_async && r.usefulness_score < 60 && r.meeting.participants > 5
}

fn is_decline_candidate(r: &Record) -> bool {
    r.usefulness_score < 40 && r.meeting.participants > 8 && !r.meeting.decision_made
}

fn is_optimize_candidate(r: &Record) -> bool {
    (40..70).contains(&r.usefulness_score) && r.meeting.duration_minutes > 45
}

/// Minutes suggested for a trimmed-down version of a meeting.
pub fn focused_minutes(duration_minutes: u32) -> u32 {
    (duration_minutes / 2).max(15)
}

fn reason_and_suggestion(kind: RecommendationType, r: &Record) -> (String, String) {
    let m = &r.meeting;
    match kind {
        RecommendationType::Async => (
            format!(
                "Low engagement ({} of {} participants spoke) and no decisions made.",
                m.actual_speakers, m.participants
            ),
            "Use a collaborative document, project task, or chat thread instead.".to_string(),
        ),
        RecommendationType::Decline => (
            format!(
                "Low value score ({}%), too many participants ({}) and no decisions made.",
                r.usefulness_score, m.participants
            ),
            "Request an agenda or clear purpose before accepting".to_string(),
        ),
        RecommendationType::Optimize => (
            format!(
                "Meeting length ({} mins) could be reduced while maintaining its value.",
                m.duration_minutes
            ),
            format!(
                "Suggest a focused {}-minute agenda",
                focused_minutes(m.duration_minutes)
            ),
        ),
    }
}

/// Builds up to two recommendations per category, async first, then
/// decline, then optimize.
///
/// Each category filters the full record set independently in input order,
/// so one meeting can appear under both async and decline (or async and
/// optimize). Ids are assigned 1, 2, 3... across the whole list.
pub fn recommend(records: &[Record]) -> Vec<Recommendation> {
    let categories: [(RecommendationType, fn(&Record) -> bool); 3] = [
        (RecommendationType::Async, is_async_candidate),
        (RecommendationType::Decline, is_decline_candidate),
        (RecommendationType::Optimize, is_optimize_candidate),
    ];

    categories
        .iter()
        .flat_map(move |&(kind, matches)| {
            records
                .iter()
                .filter(move |r| matches(r))
                .take(PER_CATEGORY)
                .map(move |r| (kind, r))
        })
        .zip(1..)
        .map(|((kind, r), id)| {
            let (reason, suggestion) = reason_and_suggestion(kind, r);
            Recommendation {
                id,
                title: r.meeting.title.clone(),
                duration_minutes: r.meeting.duration_minutes,
                participants: r.meeting.participants,
                recommendation_type: kind,
                reason,
                suggestion: Some(suggestion),
            }
        })
        .collect()
}
