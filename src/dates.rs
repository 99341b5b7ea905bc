//! Dates for records imported without one.
//!
//! Undated rows are spread over the last 30 days so weekly trends have
//! something to show. The clock and the random source are both injected.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Days back from "today" that generated dates may fall on.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Supplies a creation date for a record that arrived without one.
pub trait DateSource {
    fn meeting_date(&mut self) -> DateTime<Utc>;
}

/// Midnight UTC of a uniformly random day in `[now - 29 days, now]`.
pub struct RandomRecentDates<R> {
    now: DateTime<Utc>,
    rng: R,
}

impl<R: Rng> RandomRecentDates<R> {
    pub fn new(now: DateTime<Utc>, rng: R) -> Self {
        Self { now, rng }
    }
}

impl RandomRecentDates<rand::rngs::ThreadRng> {
    /// Uses the wall clock and the thread-local generator.
    pub fn from_now() -> Self {
        Self::new(Utc::now(), rand::thread_rng())
    }
}

impl<R: Rng> DateSource for RandomRecentDates<R> {
    fn meeting_date(&mut self) -> DateTime<Utc> {
        let days_ago = self.rng.gen_range(0..RECENT_WINDOW_DAYS);
        let midnight = self.now.date_naive().and_time(chrono::NaiveTime::MIN).and_utc();
        midnight - Duration::days(days_ago)
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub DateTime<Utc>);

impl DateSource for FixedDate {
    fn meeting_date(&mut self) -> DateTime<Utc> {
        self.0
    }
}
