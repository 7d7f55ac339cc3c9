// crates/relativist-core/src/color/distance.rs
//
// Redmean distance and the 0..=100 match score derived from it.
// The constants here set game difficulty; changing them changes every score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::hsl::{round_half_up, to_rgb, Hsl};

/// Distance at (and beyond) which a guess scores 0.
pub const MAX_SCORE_DISTANCE: f64 = 150.0;

/// A score at or above this counts as a win.
pub const WIN_THRESHOLD: u8 = 80;

/// Redmean-weighted RGB distance. Symmetric; 0 for identical colors.
pub fn redmean_distance(a: Hsl, b: Hsl) -> f64 {
    let p = to_rgb(a);
    let q = to_rgb(b);

    let r_mean = (p.r as f64 + q.r as f64) / 2.0;
    let dr = p.r as f64 - q.r as f64;
    let dg = p.g as f64 - q.g as f64;
    let db = p.b as f64 - q.b as f64;

    let sum = (2.0 + r_mean / 256.0) * dr * dr
        + 4.0 * dg * dg
        + (2.0 + (255.0 - r_mean) / 256.0) * db * db;

    sum.max(0.0).sqrt()
}

/// Linear map: distance 0 -> 100, distance >= 150 -> 0.
pub fn score_for_distance(distance: f64) -> u8 {
    let raw = 100.0 - (distance / MAX_SCORE_DISTANCE) * 100.0;
    round_half_up(raw.clamp(0.0, 100.0)) as u8
}

pub fn match_score(target: Hsl, guess: Hsl) -> u8 {
    score_for_distance(redmean_distance(target, guess))
}

#[inline]
pub fn is_win(score: u8) -> bool {
    score >= WIN_THRESHOLD
}

/// Verdict label shown under a developed score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Feedback {
    Absolute,
    Commendable,
    Acceptable,
    Marginal,
    Dissonant,
}

// First entry whose floor the score reaches wins.
const FEEDBACK_TIERS: [(u8, Feedback); 4] = [
    (98, Feedback::Absolute),
    (90, Feedback::Commendable),
    (75, Feedback::Acceptable),
    (60, Feedback::Marginal),
];

impl Feedback {
    pub fn for_score(score: u8) -> Feedback {
        FEEDBACK_TIERS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|&(_, tier)| tier)
            .unwrap_or(Feedback::Dissonant)
    }

    pub fn label(self) -> &'static str {
        match self {
            Feedback::Absolute => "ABSOLUTE",
            Feedback::Commendable => "COMMENDABLE",
            Feedback::Acceptable => "ACCEPTABLE",
            Feedback::Marginal => "MARGINAL",
            Feedback::Dissonant => "DISSONANT",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_endpoints() {
        assert_eq!(score_for_distance(0.0), 100);
        assert_eq!(score_for_distance(150.0), 0);
        assert_eq!(score_for_distance(1_000.0), 0);
        assert_eq!(score_for_distance(75.0), 50);
        assert_eq!(score_for_distance(-3.0), 100);
    }

    #[test]
    fn feedback_tiers() {
        assert_eq!(Feedback::for_score(100), Feedback::Absolute);
        assert_eq!(Feedback::for_score(98), Feedback::Absolute);
        assert_eq!(Feedback::for_score(97), Feedback::Commendable);
        assert_eq!(Feedback::for_score(90), Feedback::Commendable);
        assert_eq!(Feedback::for_score(80), Feedback::Acceptable);
        assert_eq!(Feedback::for_score(75), Feedback::Acceptable);
        assert_eq!(Feedback::for_score(60), Feedback::Marginal);
        assert_eq!(Feedback::for_score(59), Feedback::Dissonant);
        assert_eq!(Feedback::for_score(0), Feedback::Dissonant);
    }

    #[test]
    fn win_threshold_is_inclusive() {
        assert!(is_win(80));
        assert!(!is_win(79));
    }
}
