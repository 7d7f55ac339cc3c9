// crates/relativist-core/src/strips.rs
//
// The three context strips the player paints a chip on for each assignment.
// Identical chips read differently against black, white, and a vivid field;
// the assignment score is the rounded mean over all three.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::distance::match_score;
use crate::color::hsl::{round_half_up, Hsl};
use crate::color::perceive::is_bright;

pub const STRIP_COUNT: usize = 3;

/// Background behind the reference card.
pub const TARGET_BACKGROUND: Hsl = Hsl::new(0.0, 0.0, 96.0);
pub const BLACK_STRIP_BACKGROUND: Hsl = Hsl::new(0.0, 0.0, 7.0);
pub const WHITE_STRIP_BACKGROUND: Hsl = Hsl::new(0.0, 0.0, 98.0);

const LABEL_LIGHT_GREY: &str = "#a3a3a3";
const LABEL_MID_GREY: &str = "#737373";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextStrip {
    pub id: usize,
    pub background_color: Hsl,
    pub chip_color: Hsl,
}

pub type StripSet = [ContextStrip; STRIP_COUNT];

/// Slider the player is dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    H,
    S,
    L,
}

impl ContextStrip {
    pub fn set_chip_channel(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::H => self.chip_color.h = value,
            Channel::S => self.chip_color.s = value,
            Channel::L => self.chip_color.l = value,
        }
    }
}

/// Integer HSL with s in [20,100) and l in [20,80): never grey, never extreme.
pub fn random_chip_color<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    Hsl::new(
        rng.gen_range(0..360) as f64,
        (20 + rng.gen_range(0..80)) as f64,
        (20 + rng.gen_range(0..60)) as f64,
    )
}

/// Saturated mid-lightness field for the third strip.
pub fn vivid_background<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    Hsl::new(
        rng.gen_range(0..360) as f64,
        (70 + rng.gen_range(0..30)) as f64,
        (40 + rng.gen_range(0..20)) as f64,
    )
}

pub fn deal_strips<R: Rng + ?Sized>(rng: &mut R) -> StripSet {
    let vivid = vivid_background(rng);
    let backgrounds = [BLACK_STRIP_BACKGROUND, WHITE_STRIP_BACKGROUND, vivid];

    std::array::from_fn(|id| ContextStrip {
        id,
        background_color: backgrounds[id],
        chip_color: random_chip_color(rng),
    })
}

/// Rounded mean of each chip's score against the target; 0 for no strips.
pub fn analyze(target: Hsl, strips: &[ContextStrip]) -> u8 {
    if strips.is_empty() {
        return 0;
    }
    let total: u32 = strips
        .iter()
        .map(|s| match_score(target, s.chip_color) as u32)
        .sum();
    round_half_up(total as f64 / strips.len() as f64) as u8
}

/// `"01"`, `"02"`, ...
pub fn strip_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn label_ink(index: usize, background: Hsl) -> &'static str {
    match index {
        0 => LABEL_LIGHT_GREY,
        1 => LABEL_MID_GREY,
        _ if is_bright(background) => LABEL_MID_GREY,
        _ => LABEL_LIGHT_GREY,
    }
}
