// crates/relativist-core/src/game/mod.rs

pub mod state;

pub use state::{Advance, GameState, Settings, GAME_STATE_KEY};
