// crates/relativist-core/src/game/state.rs
//
// Persistent game loop state: the active session, the 1-based level within
// it, and the archive of completed sessions (newest first, never mutated).

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::color::hsl::{round_half_up, Hsl};
use crate::error::{RelativistError, Result};
use crate::session::generator::SessionGenerator;
use crate::session::model::Session;
use crate::session::palette::PALETTE_LEN;
use crate::store::KvStore;
use crate::validate::{validate_level, validate_score};

pub const GAME_STATE_KEY: &str = "relativist_game_state_v5";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub is_bauhaus_mode: bool,
    pub is_sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_bauhaus_mode: false,
            is_sound_enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub collection: Vec<Session>,
    pub level: usize,
    pub session_count: u32,
    pub current_session: Option<Session>,
    pub settings: Settings,
    pub has_completed_onboarding: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            level: 1,
            session_count: 1,
            current_session: None,
            settings: Settings::default(),
            has_completed_onboarding: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to this level.
    Next(usize),
    /// Level 16 was scored; the session is now complete.
    SessionComplete,
}

impl GameState {
    /// Loads the state persisted next to the deck. A corrupt record starts
    /// fresh; a state without an active session draws one.
    pub fn load<G: KvStore, R: Rng>(generator: &mut SessionGenerator<G, R>) -> Result<GameState> {
        let mut state = match generator.store().get(GAME_STATE_KEY) {
            None => GameState::default(),
            Some(text) => match Self::parse(&text) {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "game state is corrupt, starting fresh");
                    GameState::default()
                }
            },
        };

        if state.current_session.is_none() {
            state.current_session = Some(generator.next_session(state.session_count)?);
        }
        Ok(state)
    }

    /// Strict parse: JSON shape plus session and level invariants.
    pub fn parse(text: &str) -> Result<GameState> {
        let mut state: GameState = serde_json::from_str(text)?;

        // Falsy counters fall back to 1.
        if state.level == 0 {
            state.level = 1;
        }
        if state.session_count == 0 {
            state.session_count = 1;
        }
        validate_level(state.level)?;

        for session in state.collection.iter().chain(state.current_session.iter()) {
            session.validate()?;
        }
        Ok(state)
    }

    pub fn save<S: KvStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let text = serde_json::to_string(self)?;
        store.set(GAME_STATE_KEY, text)
    }

    pub fn session(&self) -> Result<&Session> {
        self.current_session
            .as_ref()
            .ok_or_else(|| RelativistError::Validation("no active session".into()))
    }

    pub fn current_slot(&self) -> Result<usize> {
        Ok(self.session()?.slot_for_level(self.level))
    }

    pub fn current_target(&self) -> Result<Hsl> {
        Ok(self.session()?.target_for_level(self.level))
    }

    /// Records `score` for the current assignment and moves on.
    pub fn advance(&mut self, score: u8) -> Result<Advance> {
        validate_score(score)?;
        validate_level(self.level)?;
        let level = self.level;

        let session = self
            .current_session
            .as_mut()
            .ok_or_else(|| RelativistError::Validation("no active session".into()))?;
        let slot = session.slot_for_level(level);
        session.record(slot, score)?;

        if level >= PALETTE_LEN {
            session.is_complete = true;
            info!(id = session.id, resonance = ?session.resonance(), "session complete");
            Ok(Advance::SessionComplete)
        } else {
            self.level = level + 1;
            Ok(Advance::Next(self.level))
        }
    }

    /// Moves the completed session to the front of the archive and starts the next one.
    pub fn archive_current<G: KvStore, R: Rng>(
        &mut self,
        generator: &mut SessionGenerator<G, R>,
    ) -> Result<&Session> {
        let done = self.session()?;
        if !done.is_complete {
            return Err(RelativistError::Validation(format!(
                "session {} is not complete",
                done.id
            )));
        }

        let next_id = done.id.saturating_add(1);
        let next = generator.next_session(next_id)?;

        if let Some(done) = self.current_session.replace(next) {
            self.collection.insert(0, done);
        }
        self.session_count = next_id;
        self.level = 1;
        self.session()
    }

    /// Abandons everything: fresh session, empty archive, onboarding again.
    pub fn reset<G: KvStore, R: Rng>(&mut self, generator: &mut SessionGenerator<G, R>) -> Result<()> {
        let next_id = self.session_count.saturating_add(1);
        let next = generator.next_session(next_id)?;

        self.session_count = next_id;
        self.current_session = Some(next);
        self.collection.clear();
        self.level = 1;
        self.has_completed_onboarding = false;
        Ok(())
    }

    pub fn archived(&self, id: u32) -> Option<&Session> {
        self.collection.iter().find(|s| s.id == id)
    }

    /// Rounded mean resonance over archived sessions that have one.
    pub fn overall_resonance(&self) -> Option<u8> {
        let values: Vec<f64> = self
            .collection
            .iter()
            .filter_map(Session::resonance)
            .map(f64::from)
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(round_half_up(values.iter().sum::<f64>() / values.len() as f64) as u8)
    }
}
