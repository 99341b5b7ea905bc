use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;

use crate::analyzers::grade::USEFUL_THRESHOLD;
use crate::analyzers::types::TrendPoint;
use crate::analyzers::utility::percentage;
use crate::record::Record;

/// Week of the year with weeks starting on Sunday; January 1st is always in week 1.
///
/// Computed as `ceil((days_since_jan1 + jan1_weekday + 1) / 7)` where
/// `jan1_weekday` is 0 for Sunday. Buckets are keyed on the week number
/// alone, so the same week of different years shares a bucket.
pub fn week_number(date: DateTime<Utc>) -> u32 {
    let days_since_jan1 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - days_since_jan1 % 7) % 7;

    (days_since_jan1 + jan1_weekday + 1).div_ceil(7)
}

/// Share of useful meetings per week, one point per populated week, in
/// ascending week order.
pub fn compute_trends(records: &[Record]) -> Vec<TrendPoint> {
    let mut weeks: BTreeMap<u32, (usize, usize)> = BTreeMap::new();

    for record in records {
        let (useful, total) = weeks.entry(week_number(record.date)).or_default();
        *total += 1;
        if record.usefulness_score >= USEFUL_THRESHOLD {
            *useful += 1;
        }
    }

    weeks
        .into_iter()
        .map(|(week, (useful, total))| TrendPoint {
            week: format!("Week {week}"),
            usefulness_percentage: percentage(useful, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::testing::{at, record};

    #[test]
    fn test_week_number_sunday_weeks() {
        // 2026-01-01 is a Thursday
        assert_eq!(week_number(at(2026, 1, 1)), 1);
        assert_eq!(week_number(at(2026, 1, 3)), 1);
        assert_eq!(week_number(at(2026, 1, 4)), 2);
        assert_eq!(week_number(at(2026, 3, 2)), 10);
        assert_eq!(week_number(at(2026, 3, 9)), 11);
        assert_eq!(week_number(at(2026, 12, 31)), 53);
    }

    #[test]
    fn test_week_number_year_starting_sunday() {
        // 2023-01-01 is a Sunday
        assert_eq!(week_number(at(2023, 1, 1)), 1);
        assert_eq!(week_number(at(2023, 1, 7)), 1);
        assert_eq!(week_number(at(2023, 1, 8)), 2);
    }

    #[test]
    fn test_compute_trends_empty() {
        assert!(compute_trends(&[]).is_empty());
    }

    #[test]
    fn test_compute_trends_two_weeks() {
        let mut records = Vec::new();
        // Listed later-week first to check ordering.
        for id in 0..4 {
            let mut r = record(id, 55, 30);
            r.date = at(2026, 3, 10);
            records.push(r);
        }
        for id in 4..10 {
            let mut r = record(id, 85, 30);
            r.date = at(2026, 3, 3);
            records.push(r);
        }

        let trends = compute_trends(&records);

        assert_eq!(
            trends,
            vec![
                TrendPoint {
                    week: "Week 10".to_string(),
                    usefulness_percentage: 100,
                },
                TrendPoint {
                    week: "Week 11".to_string(),
                    usefulness_percentage: 0,
                },
            ]
        );
        assert_eq!(compute_trends(&records), trends);
    }

    #[test]
    fn test_compute_trends_orders_numerically() {
        let mut early = record(1, 90, 30);
        early.date = at(2026, 1, 20);
        let mut late = record(2, 10, 30);
        late.date = at(2026, 11, 20);
        let mut mixed = record(3, 70, 30);
        mixed.date = at(2026, 1, 21);

        let trends = compute_trends(&[late, early, mixed]);
        let labels: Vec<_> = trends.iter().map(|t| t.week.as_str()).collect();
        assert_eq!(labels, vec!["Week 4", "Week 47"]);
        assert_eq!(trends[0].usefulness_percentage, 100);
    }
}
