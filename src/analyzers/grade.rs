use serde::Serialize;
use std::fmt;

/// Scores at or above this count as useful meetings.
pub const USEFUL_THRESHOLD: u8 = 70;

/// Scores at or above this (and below [`USEFUL_THRESHOLD`]) are middling.
pub const MEDIUM_THRESHOLD: u8 = 40;

/// Coarse band for a usefulness score.
///
/// | Range   | Class  |
/// |---------|--------|
/// | >= 70   | high   |
/// | >= 40   | medium |
/// | < 40    | low    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreClass {
    High,
    Medium,
    Low,
}

impl ScoreClass {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= USEFUL_THRESHOLD => ScoreClass::High,
            s if s >= MEDIUM_THRESHOLD => ScoreClass::Medium,
            _ => ScoreClass::Low,
        }
    }
}

impl fmt::Display for ScoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreClass::High => "high",
            ScoreClass::Medium => "medium",
            ScoreClass::Low => "low",
        };
        f.pad(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_class_boundaries() {
        assert_eq!(ScoreClass::from_score(100), ScoreClass::High);
        assert_eq!(ScoreClass::from_score(70), ScoreClass::High);
        assert_eq!(ScoreClass::from_score(69), ScoreClass::Medium);
        assert_eq!(ScoreClass::from_score(40), ScoreClass::Medium);
        assert_eq!(ScoreClass::from_score(39), ScoreClass::Low);
        assert_eq!(ScoreClass::from_score(0), ScoreClass::Low);
    }

    #[test]
    fn test_score_class_display() {
        assert_eq!(ScoreClass::Medium.to_string(), "medium");
        assert_eq!(format!("{:<6}|", ScoreClass::Low), "low   |");
    }
}
