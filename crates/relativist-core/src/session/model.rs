// crates/relativist-core/src/session/model.rs

use serde::{Deserialize, Serialize};

use crate::color::hsl::{round_half_up, Hsl};
use crate::error::{RelativistError, Result};
use crate::session::name::Mood;
use crate::session::order::{identity_order, is_permutation, PlayOrder};
use crate::session::palette::{average_lightness, average_saturation, Palette, PALETTE_LEN};
use crate::validate::validate_score;

/// Score per palette slot (indexed by palette position, not play order).
pub type Progress = [Option<u8>; PALETTE_LEN];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: u32,
    pub name: String,
    pub root_hue: f64,
    pub mood: Mood,
    pub palette: Palette,
    /// Older records have none; they play in palette order.
    #[serde(default = "identity_order")]
    pub play_order: PlayOrder,
    pub progress: Progress,
    pub is_complete: bool,
}

impl Session {
    /// Checks invariants serde cannot: play order is a permutation and scores are <= 100.
    pub fn validate(&self) -> Result<()> {
        if !is_permutation(&self.play_order) {
            return Err(RelativistError::Validation(format!(
                "session {}: play order is not a permutation of 0..{PALETTE_LEN}",
                self.id
            )));
        }
        for score in self.progress.iter().flatten() {
            validate_score(*score)?;
        }
        Ok(())
    }

    /// Palette slot presented at 1-based `level`. Falls back to `level - 1`
    /// when the play order has no entry, and always lands in 0..16.
    pub fn slot_for_level(&self, level: usize) -> usize {
        let fallback = level.saturating_sub(1);
        self.play_order
            .get(fallback)
            .copied()
            .unwrap_or(fallback)
            .min(PALETTE_LEN - 1)
    }

    pub fn target_for_level(&self, level: usize) -> Hsl {
        self.palette[self.slot_for_level(level)]
    }

    /// Writes a score into a palette slot. Complete sessions are frozen.
    pub fn record(&mut self, slot: usize, score: u8) -> Result<()> {
        if self.is_complete {
            return Err(RelativistError::Validation(format!(
                "session {} is complete and can no longer change",
                self.id
            )));
        }
        if slot >= PALETTE_LEN {
            return Err(RelativistError::Validation(format!(
                "slot must be < {PALETTE_LEN}, got {slot}"
            )));
        }
        validate_score(score)?;
        self.progress[slot] = Some(score);
        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.progress.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_fully_played(&self) -> bool {
        self.completed_count() == PALETTE_LEN
    }

    /// Rounded mean of the played slots; `None` before the first score.
    pub fn resonance(&self) -> Option<u8> {
        let played: Vec<f64> = self.progress.iter().flatten().map(|&s| s as f64).collect();
        if played.is_empty() {
            return None;
        }
        let mean = played.iter().sum::<f64>() / played.len() as f64;
        Some(round_half_up(mean) as u8)
    }

    pub fn average_saturation(&self) -> f64 {
        average_saturation(&self.palette)
    }

    pub fn average_lightness(&self) -> f64 {
        average_lightness(&self.palette)
    }
}
