//! Output formatting and persistence for analytics and records.
//!
//! Supports JSON serialization, a plain-text dashboard, and CSV export in
//! the same column layout the importer reads.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

use crate::analyzers::grade::ScoreClass;
use crate::analyzers::types::Analytics;
use crate::normalize::{COLUMNS, DATE};
use crate::record::Record;

/// Extra export column carrying the stored score. Ignored on re-import.
pub const USEFULNESS_SCORE: &str = "Usefulness_Score";

/// Serializes a view as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Formats minutes as `"45 min"`, `"1 hour"` or `"2 hours 15 min"`.
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    let plural = if hours > 1 { "s" } else { "" };

    match (hours, rest) {
        (0, _) => format!("{rest} min"),
        (_, 0) => format!("{hours} hour{plural}"),
        _ => format!("{hours} hour{plural} {rest} min"),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// One line per record: id, score band, title and the headline facts.
pub fn render_records(records: &[Record]) -> String {
    let mut output = String::new();

    if records.is_empty() {
        let _ = writeln!(output, "No meetings recorded.");
        return output;
    }

    for r in records {
        let m = &r.meeting;
        let _ = writeln!(
            output,
            "#{:<4} {:>3}% {:<6} {} ({}, {} participants, {} spoke) on {}",
            r.id,
            r.usefulness_score,
            ScoreClass::from_score(r.usefulness_score),
            m.title,
            format_minutes(m.duration_minutes),
            m.participants,
            m.actual_speakers,
            r.date.format("%Y-%m-%d"),
        );
    }

    output
}

/// Full detail for a single record.
pub fn render_record(r: &Record) -> String {
    let m = &r.meeting;
    let mut output = String::new();

    let _ = writeln!(output, "# {} (#{})", m.title, r.id);
    let _ = writeln!(
        output,
        "Usefulness: {}% ({})",
        r.usefulness_score,
        ScoreClass::from_score(r.usefulness_score)
    );
    let _ = writeln!(output, "Date: {}", r.date.format("%Y-%m-%d"));
    let _ = writeln!(output, "Duration: {}", format_minutes(m.duration_minutes));
    let _ = writeln!(
        output,
        "Participants: {} ({} spoke)",
        m.participants, m.actual_speakers
    );
    let _ = writeln!(output, "Decision made: {}", yes_no(m.decision_made));
    let _ = writeln!(output, "Agenda provided: {}", yes_no(m.agenda_provided));
    let _ = writeln!(output, "Follow-up sent: {}", yes_no(m.follow_up_sent));
    let _ = writeln!(output, "Could be async: {}", yes_no(m.could_be_async));

    output
}

/// Plain-text rendering of the dashboard view.
pub fn render_dashboard(analytics: &Analytics) -> String {
    let s = &analytics.summary;
    let m = &analytics.metrics;
    let mut output = String::new();

    let _ = writeln!(output, "# Meeting Usefulness Dashboard");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Summary");
    let _ = writeln!(output, "- Total meetings: {}", s.total_meetings);
    let _ = writeln!(
        output,
        "- Useful meetings: {} ({}%)",
        s.useful_meetings, s.useful_meetings_percentage
    );
    let _ = writeln!(output, "- Time that could be saved: {:.1} hours", s.time_saved_hours);
    let _ = writeln!(output, "- Async candidates: {}", s.async_candidates);
    let _ = writeln!(output, "- Meeting hours per week: {:.1}", s.hours_per_week);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Metrics");
    let _ = writeln!(output, "- Decisions made: {}%", m.decisions_percentage);
    let _ = writeln!(output, "- Actions taken: {}%", m.actions_percentage);
    let _ = writeln!(output, "- Agendas provided: {}%", m.agendas_percentage);
    let _ = writeln!(output, "- Follow-ups sent: {}%", m.follow_ups_percentage);
    let _ = writeln!(output, "- Could be async: {}%", m.async_percentage);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weekly Trend");
    if analytics.trends.is_empty() {
        let _ = writeln!(output, "No meetings recorded.");
    } else {
        for point in &analytics.trends {
            let _ = writeln!(output, "- {}: {}% useful", point.week, point.usefulness_percentage);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommendations");
    if analytics.recommendations.is_empty() {
        let _ = writeln!(output, "Nothing to recommend.");
    } else {
        for rec in &analytics.recommendations {
            let _ = writeln!(
                output,
                "{}. [{}] {} ({}, {} participants)",
                rec.id,
                rec.recommendation_type.to_string().to_uppercase(),
                rec.title,
                format_minutes(rec.duration_minutes),
                rec.participants
            );
            let _ = writeln!(output, "   {}", rec.reason);
            if let Some(suggestion) = &rec.suggestion {
                let _ = writeln!(output, "   -> {}", suggestion);
            }
        }
    }

    output
}

/// Writes records to a CSV file with the importer's column names, plus
/// `Date` and `Usefulness_Score`.
pub fn export_records(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header: Vec<&str> = COLUMNS.to_vec();
    header.push(DATE);
    header.push(USEFULNESS_SCORE);
    writer.write_record(&header)?;

    for r in records {
        let m = &r.meeting;
        writer.write_record([
            m.title.clone(),
            m.duration_minutes.to_string(),
            m.participants.to_string(),
            m.actual_speakers.to_string(),
            yes_no(m.decision_made).to_string(),
            yes_no(m.agenda_provided).to_string(),
            yes_no(m.follow_up_sent).to_string(),
            yes_no(m.could_be_async).to_string(),
            r.date.to_rfc3339(),
            r.usefulness_score.to_string(),
        ])?;
    }

    writer.flush()?;
    info!(path = %path.display(), records = records.len(), "Exported records");
    Ok(())
}
