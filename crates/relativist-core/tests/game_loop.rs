use rand::rngs::StdRng;
use rand::SeedableRng;
use relativist_core::game::{Advance, GameState, GAME_STATE_KEY};
use relativist_core::session::SessionGenerator;
use relativist_core::store::{KvStore, MemoryStore};
use relativist_core::RelativistError;

fn generator(seed: u64) -> SessionGenerator<MemoryStore, StdRng> {
    SessionGenerator::new(MemoryStore::new(), StdRng::seed_from_u64(seed))
}

fn play_out(state: &mut GameState, score: u8) {
    for level in 1..16 {
        assert_eq!(state.advance(score).unwrap(), Advance::Next(level + 1));
    }
    assert_eq!(state.advance(score).unwrap(), Advance::SessionComplete);
}

#[test]
fn fresh_load_starts_session_one() {
    let mut gen = generator(1);
    let state = GameState::load(&mut gen).unwrap();
    assert_eq!(state.level, 1);
    assert_eq!(state.session_count, 1);
    assert!(state.settings.is_sound_enabled);
    assert_eq!(state.session().unwrap().id, 1);
    assert!(state.collection.is_empty());
}

#[test]
fn scores_land_in_play_order_slots() {
    let mut gen = generator(2);
    let mut state = GameState::load(&mut gen).unwrap();

    let order = state.session().unwrap().play_order;
    let first_target = state.current_target().unwrap();
    assert_eq!(first_target, state.session().unwrap().palette[order[0]]);

    state.advance(91).unwrap();
    state.advance(42).unwrap();

    let s = state.session().unwrap();
    assert_eq!(s.progress[order[0]], Some(91));
    assert_eq!(s.progress[order[1]], Some(42));
    assert_eq!(s.completed_count(), 2);
    assert_eq!(s.resonance(), Some(67)); // 66.5 rounds up
    assert_eq!(state.current_slot().unwrap(), order[2]);
}

#[test]
fn completing_and_archiving_a_session() {
    let mut gen = generator(3);
    let mut state = GameState::load(&mut gen).unwrap();

    // not complete yet
    assert!(matches!(
        state.archive_current(&mut gen),
        Err(RelativistError::Validation(_))
    ));

    play_out(&mut state, 85);
    let done = state.session().unwrap().clone();
    assert!(done.is_complete);
    assert!(done.is_fully_played());
    assert_eq!(done.resonance(), Some(85));

    // complete sessions are frozen
    assert!(state.advance(10).is_err());

    let next = state.archive_current(&mut gen).unwrap().clone();
    assert_eq!(next.id, 2);
    assert_eq!(state.session_count, 2);
    assert_eq!(state.level, 1);
    assert_eq!(state.collection.len(), 1);
    assert_eq!(state.archived(1), Some(&done));
    assert_eq!(state.overall_resonance(), Some(85));

    // newest first
    play_out(&mut state, 60);
    state.archive_current(&mut gen).unwrap();
    assert_eq!(state.collection[0].id, 2);
    assert_eq!(state.collection[1].id, 1);
    assert_eq!(state.overall_resonance(), Some(73)); // 72.5
}

#[test]
fn state_roundtrips_through_the_store() {
    let mut gen = generator(4);
    let mut state = GameState::load(&mut gen).unwrap();
    state.advance(77).unwrap();
    state.settings.is_bauhaus_mode = true;
    state.has_completed_onboarding = true;
    state.save(gen.store_mut()).unwrap();

    let reloaded = GameState::load(&mut gen).unwrap();
    assert_eq!(reloaded, state);
}

#[test]
fn corrupt_state_starts_fresh() {
    let mut gen = generator(5);
    gen.store_mut()
        .set(GAME_STATE_KEY, r#"{"level": "seven"}"#.to_string())
        .unwrap();

    let state = GameState::load(&mut gen).unwrap();
    assert_eq!(state.level, 1);
    assert_eq!(state.session().unwrap().id, 1);
}

#[test]
fn bad_play_order_is_rejected_on_parse() {
    let mut gen = generator(6);
    let mut state = GameState::load(&mut gen).unwrap();
    if let Some(s) = state.current_session.as_mut() {
        s.play_order[0] = s.play_order[1];
    }
    let text = serde_json::to_string(&state).unwrap();
    assert!(GameState::parse(&text).is_err());
}

#[test]
fn partial_records_fill_defaults() {
    let state = GameState::parse(r#"{"level": 0, "sessionCount": 0}"#).unwrap();
    assert_eq!(state.level, 1);
    assert_eq!(state.session_count, 1);
    assert!(state.settings.is_sound_enabled);
    assert!(state.current_session.is_none());
}

#[test]
fn reset_clears_archive_and_onboarding() {
    let mut gen = generator(7);
    let mut state = GameState::load(&mut gen).unwrap();
    play_out(&mut state, 90);
    state.archive_current(&mut gen).unwrap();
    state.has_completed_onboarding = true;

    state.reset(&mut gen).unwrap();
    assert!(state.collection.is_empty());
    assert_eq!(state.level, 1);
    assert_eq!(state.session_count, 3);
    assert_eq!(state.session().unwrap().id, 3);
    assert!(!state.has_completed_onboarding);
}

#[test]
fn sessions_saved_without_play_order_still_load() {
    let mut gen = generator(11);
    let mut state = GameState::load(&mut gen).unwrap();
    play_out(&mut state, 88);
    state.archive_current(&mut gen).unwrap();
    state.advance(70).unwrap();

    let mut record: serde_json::Value = serde_json::to_value(&state).unwrap();
    record["collection"][0]
        .as_object_mut()
        .unwrap()
        .remove("playOrder");
    record["currentSession"]
        .as_object_mut()
        .unwrap()
        .remove("playOrder");
    gen.store_mut()
        .set(GAME_STATE_KEY, record.to_string())
        .unwrap();

    let loaded = GameState::load(&mut gen).unwrap();
    assert_eq!(loaded.collection.len(), 1);
    assert_eq!(loaded.collection[0].resonance(), Some(88));
    assert_eq!(loaded.level, 2);

    // Without a stored order, level N plays palette slot N-1.
    let current = loaded.session().unwrap();
    assert_eq!(current.play_order, relativist_core::session::identity_order());
    assert_eq!(loaded.current_slot().unwrap(), 1);
    assert_eq!(loaded.current_target().unwrap(), current.palette[1]);
}
