// crates/relativist-core/src/session/generator.rs
//
// Session generation. The deck read-modify-write (load, draw, save) is the
// only persistent side effect and must not interleave between callers:
// `SessionGenerator` takes `&mut self`, and `SharedSessionGenerator` puts it
// behind a mutex for multi-threaded use.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::color::hsl::wrap_hue;
use crate::error::Result;
use crate::session::deck::Deck;
use crate::session::model::Session;
use crate::session::name::generate_session_name;
use crate::session::order::generate_play_order;
use crate::session::palette::{average_lightness, average_saturation, generate_palette, PALETTE_LEN};
use crate::store::KvStore;

/// Root hue = bucket + uniform jitter in [-10, +10).
pub const JITTER_DEGREES: f64 = 10.0;

pub struct SessionGenerator<S, R> {
    store: S,
    rng: R,
}

impl<S: KvStore> SessionGenerator<S, StdRng> {
    pub fn from_entropy(store: S) -> Self {
        Self::new(store, StdRng::from_entropy())
    }
}

impl<S: KvStore, R: Rng> SessionGenerator<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self { store, rng }
    }

    /// Draws the next hue bucket, persists the deck, and builds a fresh
    /// session. Only a failed store write is an error.
    pub fn next_session(&mut self, id: u32) -> Result<Session> {
        let mut deck = Deck::load(&self.store);
        let bucket = deck.draw(&mut self.rng);
        deck.save(&mut self.store)?;

        let jitter = self.rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES);
        let root_hue = wrap_hue(bucket as f64 + jitter);
        debug!(id, bucket, root_hue, cycle = deck.cycle_count, "next session");

        Ok(session_from_root(&mut self.rng, id, root_hue))
    }

    /// Current persisted deck, without drawing.
    pub fn deck(&self) -> Deck {
        Deck::load(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_parts(self) -> (S, R) {
        (self.store, self.rng)
    }
}

/// Palette, name and play order for a root hue. Randomness only touches the
/// name words and the play order; the palette is a pure function of the hue.
pub fn session_from_root<R: Rng + ?Sized>(rng: &mut R, id: u32, root_hue: f64) -> Session {
    let palette = generate_palette(root_hue);
    let name = generate_session_name(
        rng,
        root_hue,
        average_saturation(&palette),
        average_lightness(&palette),
    );
    let play_order = generate_play_order(rng);

    Session {
        id,
        name: name.name,
        root_hue,
        mood: name.mood,
        palette,
        play_order,
        progress: [None; PALETTE_LEN],
        is_complete: false,
    }
}

/// Thread-safe wrapper serializing every deck read-modify-write.
pub struct SharedSessionGenerator<S, R> {
    inner: Mutex<SessionGenerator<S, R>>,
}

impl<S: KvStore, R: Rng> SharedSessionGenerator<S, R> {
    pub fn new(generator: SessionGenerator<S, R>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    pub fn next_session(&self, id: u32) -> Result<Session> {
        // The store write is the last step of a draw, so a poisoned lock
        // still guards a whole deck record.
        let mut generator = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        generator.next_session(id)
    }

    pub fn deck(&self) -> Deck {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .deck()
    }

    pub fn into_inner(self) -> SessionGenerator<S, R> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
