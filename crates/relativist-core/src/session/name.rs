// crates/relativist-core/src/session/name.rs
//
// "{ADJECTIVE} {NOUN}" session names. The noun comes from the root hue's
// 30-degree bucket, the adjective from a mood derived from palette averages.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::hsl::wrap_hue;

pub const HUE_BUCKET_DEGREES: f64 = 30.0;
pub const HUE_BUCKETS: usize = 12;

/// Indexed by `floor(wrap(hue) / 30)`.
const HUE_NOUNS: [&[&str]; HUE_BUCKETS] = [
    &["CLAY", "MARS", "HEAT", "PULSE", "SIGNAL"],
    &["RUST", "AMBER", "FLUX", "CANYON"],
    &["RAY", "SULFUR", "GOLD", "ION"],
    &["MOSS", "JADE", "ECHO", "RESIN"],
    &["FERN", "ALGAE", "VINE", "STEM"],
    &["MINT", "AQUA", "FLOW", "SPRING"],
    &["GLASS", "FROST", "ZERO", "ICE"],
    &["VOID", "DEPTH", "OCEAN", "INK"],
    &["INDIGO", "NIGHT", "ARC", "WAVE"],
    &["HAZE", "NEON", "AURA", "PHASE"],
    &["BLUSH", "SILK", "CORAL", "QUARTZ"],
    &["ROSE", "VELVET", "BLOOM", "PULSE"],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    Dark,
    Pale,
    Vivid,
    Neutral,
}

type MoodRule = (fn(f64, f64) -> bool, Mood);

/// Ordered (predicate(avg_s, avg_l), mood); first match wins, else Neutral.
const MOOD_RULES: [MoodRule; 3] = [
    (|_s, l| l < 30.0, Mood::Dark),
    (|s, _l| s < 30.0, Mood::Pale),
    (|s, _l| s > 70.0, Mood::Vivid),
];

impl Mood {
    pub fn classify(avg_saturation: f64, avg_lightness: f64) -> Mood {
        MOOD_RULES
            .iter()
            .find(|(pred, _)| pred(avg_saturation, avg_lightness))
            .map(|&(_, mood)| mood)
            .unwrap_or(Mood::Neutral)
    }

    pub fn adjectives(self) -> &'static [&'static str] {
        match self {
            Mood::Dark => &["DEEP", "SILENT", "MIDNIGHT", "HIDDEN"],
            Mood::Pale => &["SOFT", "DUSTY", "BLEACHED", "PAPER"],
            Mood::Vivid => &["HYPER", "KINETIC", "ELECTRIC", "RADICAL"],
            Mood::Neutral => &["STATIC", "PRIME", "CORE", "RAW"],
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Mood::Dark => "DARK",
            Mood::Pale => "PALE",
            Mood::Vivid => "VIVID",
            Mood::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionName {
    pub name: String,
    pub mood: Mood,
}

/// Bucket index in 0..12 for any hue.
pub fn hue_bucket(hue: f64) -> usize {
    let idx = (wrap_hue(hue) / HUE_BUCKET_DEGREES).floor();
    if idx.is_finite() && idx >= 0.0 {
        (idx as usize).min(HUE_BUCKETS - 1)
    } else {
        0
    }
}

pub fn nouns_for_hue(hue: f64) -> &'static [&'static str] {
    HUE_NOUNS[hue_bucket(hue)]
}

pub fn generate_session_name<R: Rng + ?Sized>(
    rng: &mut R,
    root_hue: f64,
    avg_saturation: f64,
    avg_lightness: f64,
) -> SessionName {
    let noun = pick(rng, nouns_for_hue(root_hue));
    let mood = Mood::classify(avg_saturation, avg_lightness);
    let adjective = pick(rng, mood.adjectives());

    SessionName {
        name: format!("{adjective} {noun}"),
        mood,
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
    // Every table above is non-empty.
    words.choose(rng).copied().unwrap_or_default()
}
