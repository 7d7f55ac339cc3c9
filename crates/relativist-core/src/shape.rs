// crates/relativist-core/src/shape.rs
//
// Hue -> geometric shape partition. Ranges are checked in order and the
// first match wins; every range is closed on its upper end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::hsl::wrap_hue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Block,
    Trapezoid,
    Triangle,
    Rhombus,
    LBeam,
    Arch,
    Disc,
    Capsule,
    Cross,
}

impl Shape {
    pub const ALL: [Shape; 9] = [
        Shape::Block,
        Shape::Trapezoid,
        Shape::Triangle,
        Shape::Rhombus,
        Shape::LBeam,
        Shape::Arch,
        Shape::Disc,
        Shape::Capsule,
        Shape::Cross,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Shape::Block => "block",
            Shape::Trapezoid => "trapezoid",
            Shape::Triangle => "triangle",
            Shape::Rhombus => "rhombus",
            Shape::LBeam => "l-beam",
            Shape::Arch => "arch",
            Shape::Disc => "disc",
            Shape::Capsule => "capsule",
            Shape::Cross => "cross",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The red block straddles 0: [341,360) and [0,25].
const WRAP_LOW_MAX: f64 = 25.0;
const WRAP_HIGH_MIN: f64 = 341.0;

/// (inclusive upper bound, shape), evaluated after the wraparound check.
const UPPER_BOUNDS: [(f64, Shape); 8] = [
    (49.0, Shape::Trapezoid),
    (70.0, Shape::Triangle),
    (100.0, Shape::Rhombus),
    (160.0, Shape::LBeam),
    (200.0, Shape::Arch),
    (260.0, Shape::Disc),
    (300.0, Shape::Capsule),
    (340.0, Shape::Cross),
];

pub fn shape_for_hue(hue: f64) -> Shape {
    let h = wrap_hue(hue);

    if h >= WRAP_HIGH_MIN || h <= WRAP_LOW_MAX {
        return Shape::Block;
    }

    UPPER_BOUNDS
        .iter()
        .find(|(upper, _)| h <= *upper)
        .map(|&(_, shape)| shape)
        // (340,341) and NaN land here.
        .unwrap_or(Shape::Block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_upper_inclusive() {
        let cases = [
            (0.0, Shape::Block),
            (25.0, Shape::Block),
            (25.5, Shape::Trapezoid),
            (49.0, Shape::Trapezoid),
            (50.0, Shape::Triangle),
            (70.0, Shape::Triangle),
            (71.0, Shape::Rhombus),
            (100.0, Shape::Rhombus),
            (101.0, Shape::LBeam),
            (160.0, Shape::LBeam),
            (161.0, Shape::Arch),
            (200.0, Shape::Arch),
            (201.0, Shape::Disc),
            (260.0, Shape::Disc),
            (261.0, Shape::Capsule),
            (300.0, Shape::Capsule),
            (301.0, Shape::Cross),
            (340.0, Shape::Cross),
            (341.0, Shape::Block),
            (359.9, Shape::Block),
        ];
        for (h, want) in cases {
            assert_eq!(shape_for_hue(h), want, "hue {h}");
        }
    }

    #[test]
    fn gap_between_cross_and_block_falls_back() {
        assert_eq!(shape_for_hue(340.5), Shape::Block);
        assert_eq!(shape_for_hue(f64::NAN), Shape::Block);
    }

    #[test]
    fn out_of_range_hues_wrap() {
        assert_eq!(shape_for_hue(-100.0), Shape::Disc); // 260
        assert_eq!(shape_for_hue(420.0), Shape::Triangle); // 60
    }

    #[test]
    fn serializes_as_kebab_tags() {
        let s = serde_json::to_string(&Shape::LBeam).unwrap();
        assert_eq!(s, "\"l-beam\"");
    }
}
