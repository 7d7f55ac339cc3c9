use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use relativist_core::session::deck::{canonical_buckets, Deck, DECK_KEY};
use relativist_core::session::{SessionGenerator, SharedSessionGenerator};
use relativist_core::store::{KvStore, MemoryStore};

/// Jitter is under 15 degrees, so the nearest multiple of 30 recovers the bucket.
fn bucket_of(root_hue: f64) -> u16 {
    (((root_hue / 30.0).round() as u16) * 30) % 360
}

#[test]
fn twelve_sessions_visit_every_bucket_once() {
    let mut gen = SessionGenerator::new(MemoryStore::new(), StdRng::seed_from_u64(2024));

    let mut seen = HashSet::new();
    for id in 1..=12 {
        let s = gen.next_session(id).unwrap();
        assert_eq!(s.id, id);
        let b = bucket_of(s.root_hue);
        assert!(seen.insert(b), "bucket {b} repeated within a cycle");
        assert!((s.root_hue - b as f64).abs() <= 10.0 || (s.root_hue - b as f64).abs() >= 350.0);
    }
    assert_eq!(seen.len(), 12);

    let deck = gen.deck();
    assert_eq!(deck.cycle_count, 1);
    assert_eq!(deck.remaining(), 0);

    gen.next_session(13).unwrap();
    let deck = gen.deck();
    assert_eq!(deck.cycle_count, 2);
    assert_eq!(deck.remaining(), 11);
}

#[test]
fn deck_cycles_are_permutations_of_the_buckets() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut deck = Deck::default();
    let want: HashSet<u16> = canonical_buckets().into_iter().collect();

    for cycle in 1..=4 {
        let drawn: HashSet<u16> = (0..12).map(|_| deck.draw(&mut rng)).collect();
        assert_eq!(drawn, want);
        assert_eq!(deck.cycle_count, cycle);
    }
}

#[test]
fn deck_is_written_before_returning() {
    let mut gen = SessionGenerator::new(MemoryStore::new(), StdRng::seed_from_u64(1));
    gen.next_session(1).unwrap();

    let raw = gen.store().get(DECK_KEY).expect("deck persisted");
    let deck: Deck = serde_json::from_str(&raw).unwrap();
    assert_eq!(deck.remaining(), 11);
    assert_eq!(deck.cycle_count, 1);
}

#[test]
fn corrupt_deck_record_self_heals() {
    let mut store = MemoryStore::new();
    store.set(DECK_KEY, "{{{ definitely not json".to_string()).unwrap();

    let mut gen = SessionGenerator::new(store, StdRng::seed_from_u64(3));
    let s = gen.next_session(5).unwrap();
    assert_eq!(s.id, 5);

    let deck = gen.deck();
    assert_eq!(deck.cycle_count, 1);
    assert_eq!(deck.remaining(), 11);
}

#[test]
fn shared_generator_serializes_draws() {
    let gen = SessionGenerator::new(MemoryStore::new(), StdRng::seed_from_u64(77));
    let shared = Arc::new(SharedSessionGenerator::new(gen));

    let handles: Vec<_> = (1..=12u32)
        .map(|id| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.next_session(id).unwrap())
        })
        .collect();

    let buckets: HashSet<u16> = handles
        .into_iter()
        .map(|h| bucket_of(h.join().unwrap().root_hue))
        .collect();
    assert_eq!(buckets.len(), 12, "two callers drew the same bucket");

    let deck = shared.deck();
    assert_eq!(deck.cycle_count, 1);
    assert_eq!(deck.remaining(), 0);
}
