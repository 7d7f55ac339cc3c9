// crates/relativist-core/src/color/perceive.rs

use serde::{Deserialize, Serialize};

use crate::color::hsl::{to_rgb, Hsl};

/// Above this perceived brightness a background counts as "bright".
pub const BRIGHTNESS_THRESHOLD: f64 = 130.0;

/// Weighted quadratic luminance `sqrt(.299 R^2 + .587 G^2 + .114 B^2)`, in [0,255].
/// Only used for ink selection, never for scoring.
pub fn perceived_brightness(c: Hsl) -> f64 {
    let rgb = to_rgb(c);
    let (r, g, b) = (rgb.r as f64, rgb.g as f64, rgb.b as f64);
    (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).max(0.0).sqrt()
}

#[inline]
pub fn is_bright(c: Hsl) -> bool {
    perceived_brightness(c) > BRIGHTNESS_THRESHOLD
}

/// Overlay ink that stays legible on a given background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ink {
    Dark,
    Light,
}

impl Ink {
    pub fn for_background(bg: Hsl) -> Ink {
        if is_bright(bg) {
            Ink::Dark
        } else {
            Ink::Light
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Ink::Dark => "#121212",
            Ink::Light => "#FFFFFF",
        }
    }
}
