// crates/relativist-core/src/export/artifact.rs
//
// Data behind the shareable session card: a 4x4 grid where only played
// slots are filled, the session number, and the average resonance.
// Drawing the card is the caller's job.

use serde::{Deserialize, Serialize};

use crate::color::hsl::to_hex;
use crate::error::Result;
use crate::export::checksum::palette_fingerprint;
use crate::session::model::Session;

pub const GRID_COLUMNS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactCard {
    pub session_id: u32,
    /// Zero-padded to two digits.
    pub label: String,
    pub name: String,
    pub file_name: String,
    pub resonance: u8,
    /// Hex fill per palette slot; `None` for unplayed slots.
    pub cells: Vec<Option<String>>,
    pub share_text: String,
    pub fingerprint: String,
}

impl ArtifactCard {
    pub fn from_session(session: &Session) -> ArtifactCard {
        let label = format!("{:02}", session.id);
        let resonance = session.resonance().unwrap_or(0);

        let cells = session
            .palette
            .iter()
            .zip(session.progress.iter())
            .map(|(color, played)| played.map(|_| to_hex(*color)))
            .collect();

        ArtifactCard {
            session_id: session.id,
            file_name: format!("relativist-session-{label}.png"),
            share_text: format!("Session {label} \u{b7} {resonance}% Resonance"),
            name: session.name.clone(),
            resonance,
            cells,
            fingerprint: palette_fingerprint(&session.palette),
            label,
        }
    }

    /// Cells as rows of four.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
