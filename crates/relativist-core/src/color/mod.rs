// crates/relativist-core/src/color/mod.rs

pub mod distance;
pub mod hsl;
pub mod perceive;

pub use distance::{is_win, match_score, redmean_distance, Feedback, WIN_THRESHOLD};
pub use hsl::{to_display_string, to_hex, to_rgb, wrap_hue, Hsl, Rgb, FIXED_CENTER_COLOR};
pub use perceive::{is_bright, perceived_brightness, Ink};
