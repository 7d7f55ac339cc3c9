// crates/relativist-core/src/session/palette.rs
//
// 16-color palette in four bands of four. Each band varies exactly one
// dimension so the player can learn to recognise a band by its gestalt.
//
//   0..4   hero    hue + 8i,          s 85,        l 50
//   4..8   shadow  hue,               s 40,        l 10 + 6i
//   8..12  wash    hue,               s 10 + 15i,  l 90
//   12..16 accent  hue + 180 - 15i,   s 90,        l 55

use serde::{Deserialize, Serialize};

use crate::color::hsl::{wrap_hue, Hsl};

pub const PALETTE_LEN: usize = 16;
pub const BAND_LEN: usize = 4;

pub type Palette = [Hsl; PALETTE_LEN];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Hero,
    Shadow,
    Wash,
    Accent,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Hero, Band::Shadow, Band::Wash, Band::Accent];

    /// Band owning a palette index; indices past the palette clamp to the last band.
    pub fn of(index: usize) -> Band {
        Band::ALL[(index / BAND_LEN).min(Band::ALL.len() - 1)]
    }

    /// Color of step `i` (0..4) within this band.
    fn color(self, root_hue: f64, i: usize) -> Hsl {
        let step = i as f64;
        match self {
            Band::Hero => Hsl::new(wrap_hue(root_hue + 8.0 * step), 85.0, 50.0),
            Band::Shadow => Hsl::new(wrap_hue(root_hue), 40.0, 10.0 + 6.0 * step),
            Band::Wash => Hsl::new(wrap_hue(root_hue), 10.0 + 15.0 * step, 90.0),
            Band::Accent => Hsl::new(wrap_hue(root_hue + 180.0 - 15.0 * step), 90.0, 55.0),
        }
    }
}

/// Deterministic in `root_hue`; no randomness.
pub fn generate_palette(root_hue: f64) -> Palette {
    std::array::from_fn(|idx| Band::of(idx).color(root_hue, idx % BAND_LEN))
}

pub fn average_saturation(palette: &[Hsl]) -> f64 {
    mean(palette.iter().map(|c| c.s), palette.len())
}

pub fn average_lightness(palette: &[Hsl]) -> f64 {
    mean(palette.iter().map(|c| c.l), palette.len())
}

fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}
