//! Integration tests for the JSON scoreboard behind a full engine round.

use std::fs;
use std::path::PathBuf;

use tui_yatzy::core::{DiceSource, RoundEngine};
use tui_yatzy::store::{JsonFileStore, ScoreStore};
use tui_yatzy::types::{Category, ScoreRecord, NUM_DICE, THROWS_PER_TURN};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tui-yatzy-it-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn play_scripted_round(store: JsonFileStore, final_spots: [u8; NUM_DICE]) -> RoundEngine<JsonFileStore> {
    let mut script = Vec::new();
    for _ in Category::ALL {
        script.extend_from_slice(&[1; NUM_DICE * 2]);
        script.extend_from_slice(&final_spots);
    }
    let mut engine = RoundEngine::new("Alice", DiceSource::scripted(&script), store);
    for cat in Category::ALL {
        for _ in 0..THROWS_PER_TURN {
            engine.throw_dice().unwrap();
        }
        engine.commit_category(cat).unwrap();
    }
    engine
}

#[test]
fn test_completed_round_lands_in_the_score_file() {
    let dir = scratch_dir("round");
    let mut engine = play_scripted_round(JsonFileStore::new(&dir), [1, 1, 1, 1, 1]);

    let finished = engine.take_finished().expect("round result");
    assert!(finished.persisted());

    // A fresh store handle over the same directory sees the record.
    let reread = JsonFileStore::new(&dir).read_all().unwrap();
    assert_eq!(reread, vec![ScoreRecord::new("Alice", 5)]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_rounds_from_separate_sessions_accumulate() {
    let dir = scratch_dir("accumulate");

    let _ = play_scripted_round(JsonFileStore::new(&dir), [1, 1, 1, 1, 1]);
    let _ = play_scripted_round(JsonFileStore::new(&dir), [6, 6, 6, 6, 6]);

    let records = JsonFileStore::new(&dir).read_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].score, 5);
    assert_eq!(records[1].score, 30);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_scoreboard_reads_empty() {
    let dir = scratch_dir("missing");
    let store = JsonFileStore::new(&dir);
    assert!(store.read_all().unwrap().is_empty());
}

#[test]
fn test_score_file_is_a_plain_json_array() {
    let dir = scratch_dir("shape");
    let mut store = JsonFileStore::new(&dir);
    store.append(ScoreRecord::new("Alice", 113)).unwrap();
    store.append(ScoreRecord::new("Bob", 9)).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            {"name": "Alice", "score": 113},
            {"name": "Bob", "score": 9},
        ])
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_scoreboard_surfaces_an_error() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let store = JsonFileStore::new(&dir);
    fs::write(store.path(), b"not json").unwrap();

    assert!(store.read_all().is_err());

    let _ = fs::remove_dir_all(&dir);
}
