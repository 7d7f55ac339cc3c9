// crates/relativist-core/src/color/hsl.rs
//
// HSL value type and the conversions every other module builds on.
// Hues may arrive un-normalized (accumulated rotations, jitter); they are
// wrapped here at the boundary, never earlier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RelativistError, Result};
use crate::validate::validate_hsl;

/// Neutral mid-grey shown in the middle of the reference card.
pub const FIXED_CENTER_COLOR: Hsl = Hsl::new(0.0, 0.0, 50.0);

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Hsl {
    /// Unchecked constructor. Any f64 is accepted; the conversions below are total.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Checked constructor: rejects NaN and infinities.
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<Self> {
        let c = Self::new(h, s, l);
        validate_hsl(&c)?;
        Ok(c)
    }

    /// Same color with the hue wrapped into [0,360).
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(wrap_hue(self.h), self.s, self.l)
    }

    #[inline]
    pub fn to_rgb(self) -> Rgb {
        to_rgb(self)
    }

    #[inline]
    pub fn to_hex(self) -> String {
        to_hex(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_display_string(*self))
    }
}

/// Parses `"h,s,l"` (whitespace around components is ignored).
impl FromStr for Hsl {
    type Err = RelativistError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(RelativistError::Validation(format!(
                "expected \"h,s,l\", got {s:?}"
            )));
        }

        let mut v = [0.0f64; 3];
        for (slot, part) in v.iter_mut().zip(parts.iter()) {
            *slot = part.parse::<f64>().map_err(|_| {
                RelativistError::Validation(format!("bad color component {part:?} in {s:?}"))
            })?;
        }

        Hsl::try_new(v[0], v[1], v[2])
    }
}

/// `((h mod 360) + 360) mod 360`; always lands in [0,360) for finite input.
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

/// Round-half-up, so 0.5 always goes to 1 and -0.5 to 0.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Standard HSL -> RGB, in the `k = (n + h/30) mod 12` form.
/// Achromatic input (s = 0) has a = 0, so there is no division anywhere.
pub fn to_rgb(c: Hsl) -> Rgb {
    let h = wrap_hue(c.h);
    let s = c.s / 100.0;
    let l = c.l / 100.0;
    let a = s * l.min(1.0 - l);

    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    Rgb::new(channel(f(0.0)), channel(f(8.0)), channel(f(4.0)))
}

#[inline]
fn channel(unit: f64) -> u8 {
    // NaN saturates to 0 on the cast.
    round_half_up(255.0 * unit).clamp(0.0, 255.0) as u8
}

/// `#RRGGBB`, uppercase.
pub fn to_hex(c: Hsl) -> String {
    let Rgb { r, g, b } = to_rgb(c);
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// CSS-style `hsl(H, S%, L%)` with one decimal place.
pub fn to_display_string(c: Hsl) -> String {
    format!("hsl({:.1}, {:.1}%, {:.1}%)", wrap_hue(c.h), c.s, c.l)
}
