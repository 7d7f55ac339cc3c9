// crates/relativist-core/src/session/order.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::session::palette::PALETTE_LEN;

pub type PlayOrder = [usize; PALETTE_LEN];

/// `[0, 1, ..., 15]`: levels map straight onto palette slots. Stands in for
/// the play order of records saved before it existed.
pub fn identity_order() -> PlayOrder {
    std::array::from_fn(|i| i)
}

/// Uniform random permutation of 0..16 (Fisher-Yates via `SliceRandom::shuffle`).
pub fn generate_play_order<R: Rng + ?Sized>(rng: &mut R) -> PlayOrder {
    let mut order = identity_order();
    order.shuffle(rng);
    order
}

/// True when `order` holds every index in 0..16 exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    if order.len() != PALETTE_LEN {
        return false;
    }
    let mut seen = [false; PALETTE_LEN];
    for &i in order {
        if i >= PALETTE_LEN || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_check() {
        let id: Vec<usize> = (0..16).collect();
        assert!(is_permutation(&id));

        let mut dup = id.clone();
        dup[3] = 4;
        assert!(!is_permutation(&dup));
        assert!(!is_permutation(&id[..15]));

        let mut oob = id;
        oob[0] = 16;
        assert!(!is_permutation(&oob));
    }
}
