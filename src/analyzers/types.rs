//! Output views produced by the aggregation pipeline.
//!
//! Every view serializes with camelCase keys for the dashboard.

use serde::Serialize;
use std::fmt;

use crate::record::Record;

/// Headline numbers for the whole record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_meetings: usize,
    /// Meetings scoring 70 or more.
    pub useful_meetings: usize,
    pub useful_meetings_percentage: u32,
    /// Hours spent in meetings scoring under 50, to one decimal.
    pub time_saved_hours: f64,
    pub async_candidates: usize,
    /// Total hours over an assumed four-week window, to one decimal.
    pub hours_per_week: f64,
}

/// Whole-number percentages over the full record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBreakdown {
    pub decisions_percentage: u32,
    /// Decision made or follow-up sent.
    pub actions_percentage: u32,
    pub agendas_percentage: u32,
    pub follow_ups_percentage: u32,
    pub async_percentage: u32,
}

/// Share of useful meetings within one week bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub week: String,
    pub usefulness_percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Decline,
    Async,
    Optimize,
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecommendationType::Decline => "decline",
            RecommendationType::Async => "async",
            RecommendationType::Optimize => "optimize",
        };
        f.pad(label)
    }
}

/// A suggested action for one meeting. Derived on every call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Position in the recommendation list, starting at 1. Not a record id.
    pub id: u32,
    pub title: String,
    pub duration_minutes: u32,
    pub participants: u32,
    pub recommendation_type: RecommendationType,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// The composite dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub summary: Summary,
    pub metrics: MetricsBreakdown,
    pub trends: Vec<TrendPoint>,
    pub recommendations: Vec<Recommendation>,
    pub records: Vec<Record>,
}
