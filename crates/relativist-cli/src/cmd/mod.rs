// crates/relativist-cli/src/cmd/mod.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use relativist_core::SessionGenerator;

use crate::io::store_file::FileStore;

pub mod artifact;
pub mod backup;
pub mod color;
pub mod deck;
pub mod game;
pub mod name;
pub mod next;
pub mod palette;
pub mod score;
pub mod shape;
pub mod strips;

pub const DEFAULT_STORE: &str = "relativist-store.json";

/// Seeded when `--seed` is given, otherwise from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

pub fn open_generator(
    store: &str,
    seed: Option<u64>,
) -> anyhow::Result<SessionGenerator<FileStore, StdRng>> {
    let store = FileStore::open(store)?;
    Ok(SessionGenerator::new(store, rng_from_seed(seed)))
}
