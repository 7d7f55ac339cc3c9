pub mod error;
pub mod validate;

pub mod color;
pub mod export;
pub mod game;
pub mod session;
pub mod shape;
pub mod store;
pub mod strips;

pub use crate::color::{match_score, perceived_brightness, to_display_string, to_rgb, Hsl, Rgb};
pub use crate::error::{RelativistError, Result};
pub use crate::game::GameState;
pub use crate::session::{generate_palette, generate_session_name, Session, SessionGenerator};
pub use crate::shape::{shape_for_hue, Shape};
pub use crate::store::{KvStore, MemoryStore};
