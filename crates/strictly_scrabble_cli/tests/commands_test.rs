//! Tests for the solver subcommands against files on disk.

use std::path::{Path, PathBuf};
use strictly_scrabble_cli::{SolverConfig, commands};
use tempfile::TempDir;

const WORDS: &str = "\
CAT
TO
AT
TA
COT
ACT
";

const DEFINITIONS: &str = "\
Definitions
---
CAT a small \"domesticated\" feline [n CATS]
TO in the direction of [prep]
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn setup() -> (TempDir, SolverConfig) {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "words.txt", WORDS);
    write(dir.path(), "defs.txt", DEFINITIONS);
    let config_path = write(
        dir.path(),
        "solver.toml",
        r#"
words_path = "words.txt"
definitions_path = "defs.txt"

[search]
zone_pruning = true
"#,
    );
    let config = SolverConfig::from_file(config_path).unwrap();
    (dir, config)
}

#[test]
fn test_word_with_definition() {
    let (_dir, config) = setup();
    let out = commands::word(&config, "cat").unwrap();
    assert_eq!(out, "CAT is a valid word.\nDefinition: a small domesticated feline");

    let out = commands::word(&config, "dog").unwrap();
    assert_eq!(out, "DOG is not a valid word.");
}

#[test]
fn test_best_on_opening_position() {
    let (dir, config) = setup();
    let position = write(dir.path(), "game.toml", "rack = \"CAT\"\n");

    let out = commands::best(&config, &position, false).unwrap();
    assert!(out.contains("Best move: cat 6h 8h"));
    assert!(out.contains("Score: 10"));
    assert!(out.contains("Definition: a small domesticated feline"));
}

#[test]
fn test_best_as_json() {
    let (dir, config) = setup();
    let position = write(dir.path(), "game.toml", "rack = \"CAT\"\n");

    let out = commands::best(&config, &position, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["play"], "cat 6h 8h");
    assert_eq!(value["best"]["score"], 10);
    assert_eq!(value["rack"], "CAT");
}

#[test]
fn test_no_move_is_a_pass() {
    let (dir, config) = setup();
    let position = write(
        dir.path(),
        "game.toml",
        r#"
rack = "XYZ"

[[moves]]
player = "opponent"
play = "cat 7h 9h"
"#,
    );

    let out = commands::best(&config, &position, false).unwrap();
    assert!(out.contains("pass this turn"));

    let json = commands::best(&config, &position, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["play"].is_null());
}

#[test]
fn test_board_replays_moves() {
    let (dir, config) = setup();
    let position = write(
        dir.path(),
        "game.toml",
        r#"
[[moves]]
player = "opponent"
play = "cat 7h 9h"

[[moves]]
player = "own"
play = "to 9h 9i"
"#,
    );

    let out = commands::board(&config, &position).unwrap();
    assert!(out.contains("H |   |   |   |   |   |   | C | A | T |"));
    assert!(out.contains("I |   |   |   |   |   |   |   |   | O |"));
}

#[test]
fn test_unknown_opponent_word_is_rejected() {
    let (dir, config) = setup();
    let position = write(
        dir.path(),
        "game.toml",
        r#"
[[moves]]
player = "opponent"
play = "dog 7h 9h"
"#,
    );

    let err = commands::board(&config, &position).unwrap_err();
    assert!(err.to_string().contains("does not spell a known word"));
}
