// crates/relativist-core/src/session/deck.rs
//
// Shuffle-bag of the 12 canonical hue buckets. Every bucket is drawn once
// per cycle before any repeats. The persisted record self-heals: absent,
// unparsable or inconsistent data loads as an empty pool with cycle 0.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::session::name::HUE_BUCKETS;
use crate::store::KvStore;

pub const DECK_KEY: &str = "relativist_deck";
pub const BUCKET_STEP: u16 = 30;

/// {0, 30, ..., 330}
pub fn canonical_buckets() -> [u16; HUE_BUCKETS] {
    std::array::from_fn(|i| i as u16 * BUCKET_STEP)
}

#[inline]
pub fn is_canonical_bucket(hue: u16) -> bool {
    hue % BUCKET_STEP == 0 && (hue as usize) < HUE_BUCKETS * BUCKET_STEP as usize
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    #[serde(default)]
    pub available_hues: Vec<u16>,
    #[serde(default)]
    pub cycle_count: u32,
}

impl Deck {
    /// Reads the deck record; never fails.
    pub fn load<S: KvStore + ?Sized>(store: &S) -> Deck {
        let Some(text) = store.get(DECK_KEY) else {
            debug!("no deck record, starting empty");
            return Deck::default();
        };

        match serde_json::from_str::<Deck>(&text) {
            Ok(deck) if deck.is_consistent() => deck,
            Ok(deck) => {
                warn!(hues = ?deck.available_hues, "deck record holds non-canonical buckets, resetting");
                Deck::default()
            }
            Err(e) => {
                warn!(error = %e, "deck record is corrupt, resetting");
                Deck::default()
            }
        }
    }

    pub fn save<S: KvStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let text = serde_json::to_string(self)?;
        store.set(DECK_KEY, text)
    }

    /// At most 12 entries, each a distinct canonical bucket.
    pub fn is_consistent(&self) -> bool {
        if self.available_hues.len() > HUE_BUCKETS {
            return false;
        }
        let mut seen = [false; HUE_BUCKETS];
        self.available_hues.iter().all(|&h| {
            if !is_canonical_bucket(h) {
                return false;
            }
            let i = (h / BUCKET_STEP) as usize;
            !std::mem::replace(&mut seen[i], true)
        })
    }

    pub fn remaining(&self) -> usize {
        self.available_hues.len()
    }

    /// Refill + reshuffle when empty, then pop from the end.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u16 {
        if self.available_hues.is_empty() {
            self.refill(rng);
        }
        // Non-empty after refill.
        self.available_hues.pop().unwrap_or(0)
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut hues = canonical_buckets().to_vec();
        hues.shuffle(rng);
        self.available_hues = hues;
        self.cycle_count = self.cycle_count.saturating_add(1);
        debug!(cycle = self.cycle_count, "deck refilled");
    }
}
