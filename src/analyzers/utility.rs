/// Whole-number percentage of `part` in `total`, rounded half up. Returns 0 for an empty total.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// Converts minutes to hours rounded to one decimal place.
pub fn minutes_to_tenths_of_hours(minutes: u64) -> f64 {
    (minutes as f64 / 6.0).round() / 10.0
}

/// Rounds to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
