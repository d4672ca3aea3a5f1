//! Core + store integration: the wiring the binary's event loop performs.

use std::fs;

use pretty_assertions::assert_eq;

use memory_matrix::core::GameState;
use memory_matrix::store::BestTimeStore;
use memory_matrix::types::Difficulty;

fn temp_store(name: &str) -> BestTimeStore {
    let path = std::env::temp_dir()
        .join("memory-matrix-tests")
        .join(format!("lifecycle-{}-{}.json", name, std::process::id()));
    let _ = fs::remove_file(&path);
    BestTimeStore::open(path)
}

/// Partner id for a card already face-up, or any face-down pair.
fn next_pair(state: &GameState) -> (usize, usize) {
    let cards = state.cards();
    if let Some(open) = cards.iter().find(|c| c.is_flipped && !c.is_matched) {
        let partner = cards
            .iter()
            .find(|c| c.id != open.id && !c.is_matched && c.symbol == open.symbol)
            .expect("every symbol appears twice");
        return (open.id, partner.id);
    }
    cards
        .iter()
        .filter(|a| !a.is_matched)
        .find_map(|a| {
            cards
                .iter()
                .skip(a.id + 1)
                .find(|b| !b.is_matched && a.symbol == b.symbol)
                .map(|b| (a.id, b.id))
        })
        .expect("an unmatched pair remains")
}

fn play_round_in(state: &mut GameState, seconds: u32) {
    state.flip(0);
    state.tick(seconds * 1000);
    while !state.game_over() {
        let (a, b) = next_pair(state);
        state.flip(a);
        state.flip(b);
    }
}

#[test]
fn test_completion_persists_best_time() {
    let mut store = temp_store("persist");
    let mut state = GameState::new(Difficulty::Easy, 11);
    state.set_best_time(store.load(Difficulty::Easy));

    play_round_in(&mut state, 45);
    let done = state.take_completion().unwrap();
    store.save(done.difficulty, done.elapsed_secs).unwrap();

    assert_eq!(store.load(Difficulty::Easy), Some(45));

    // A slower second round leaves the record alone.
    state.restart();
    state.set_best_time(store.load(Difficulty::Easy));
    play_round_in(&mut state, 50);
    let done = state.take_completion().unwrap();
    assert!(!done.new_best);
    store.save(done.difficulty, done.elapsed_secs).unwrap();
    assert_eq!(store.load(Difficulty::Easy), Some(45));

    // A faster third round moves it.
    state.restart();
    state.set_best_time(store.load(Difficulty::Easy));
    play_round_in(&mut state, 30);
    let done = state.take_completion().unwrap();
    assert!(done.new_best);
    store.save(done.difficulty, done.elapsed_secs).unwrap();
    assert_eq!(store.load(Difficulty::Easy), Some(30));

    let _ = fs::remove_file(store.path());
}

#[test]
fn test_records_survive_reopening() {
    let mut store = temp_store("reopen");
    let mut state = GameState::new(Difficulty::Hard, 23);

    play_round_in(&mut state, 120);
    let done = state.take_completion().unwrap();
    store.save(done.difficulty, done.elapsed_secs).unwrap();

    let reopened = BestTimeStore::open(store.path().to_path_buf());
    assert_eq!(reopened.load(Difficulty::Hard), Some(120));
    assert_eq!(reopened.load(Difficulty::Easy), None);

    let _ = fs::remove_file(store.path());
}

#[test]
fn test_loaded_record_feeds_the_new_round() {
    let mut store = temp_store("feeds");
    store.save(Difficulty::Medium, 99).unwrap();

    let mut state = GameState::new(Difficulty::Medium, 3);
    state.set_best_time(store.load(Difficulty::Medium));
    assert_eq!(state.best_time(), Some(99));
    assert_eq!(state.snapshot().best_time, Some(99));

    let _ = fs::remove_file(store.path());
}
