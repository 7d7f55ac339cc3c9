// crates/relativist-core/src/session/mod.rs

pub mod deck;
pub mod generator;
pub mod model;
pub mod name;
pub mod order;
pub mod palette;

pub use deck::Deck;
pub use generator::{session_from_root, SessionGenerator, SharedSessionGenerator};
pub use model::{Progress, Session};
pub use name::{generate_session_name, Mood, SessionName};
pub use order::{generate_play_order, identity_order, PlayOrder};
pub use palette::{generate_palette, Band, Palette, PALETTE_LEN};
