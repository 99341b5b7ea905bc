//! The usefulness heuristic.
//!
//! Additive model starting at 50. Thresholds stack: a 95-minute meeting
//! takes both the >60 and the >90 penalty. The result is clamped to 0..=100.

use crate::record::NormalizedInput;

const BASE: i32 = 50;

/// Scores a meeting. Deterministic and total; `participants == 0` counts as
/// zero engagement.
pub fn score(input: &NormalizedInput) -> u8 {
    let mut score = BASE;

    score += if input.decision_made { 25 } else { -15 };

    let ratio = speaker_ratio(input.actual_speakers, input.participants);
    score += match ratio {
        r if r > 0.7 => 15,
        r if r > 0.5 => 10,
        r if r > 0.3 => 5,
        _ => -10,
    };

    if input.agenda_provided {
        score += 10;
    }
    if input.follow_up_sent {
        score += 10;
    }

    if input.could_be_async {
        score -= 15;
    }

    if input.duration_minutes > 60 {
        score -= 5;
    }
    if input.duration_minutes > 90 {
        score -= 10;
    }

    if input.participants > 10 {
        score -= 5;
    }
    if input.participants > 15 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

/// Share of participants who spoke; 0.0 when nobody attended.
pub fn speaker_ratio(actual_speakers: u32, participants: u32) -> f64 {
    if participants == 0 {
        0.0
    } else {
        f64::from(actual_speakers) / f64::from(participants)
    }
}
