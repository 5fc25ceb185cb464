//! End-to-end game scenarios against the public engine API.

use std::collections::HashMap;
use strictly_scrabble::{
    Board, Dictionary, GameState, IllegalMove, LegalMove, Move, MoveType, NotRepeated, Position,
    Rack, SearchConfig, SearchError, StandardPoints, WordList, best_move, breakdown, score,
};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn rack(s: &str) -> Rack {
    s.parse().unwrap()
}

/// A dictionary that keeps duplicate entries, unlike [`WordList`].
struct RawWords(Vec<String>);

impl Dictionary for RawWords {
    fn is_valid_word(&self, word: &str) -> bool {
        self.0.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    fn words(&self) -> &[String] {
        &self.0
    }
}

#[test]
fn test_center_word_scores_double() {
    let state = GameState::new();
    let points: HashMap<char, u32> = [('C', 3), ('A', 1), ('T', 2)].into_iter().collect();
    let cat = mv("cat 7h 9h");

    let parts = breakdown(state.board(), &points, &cat);
    assert_eq!(parts.total(), (3 + 1 + 2) * 2);
    assert_eq!(*parts.bingo(), 0);
}

#[test]
fn test_seven_tiles_over_triple_letter_earn_bingo() {
    let board = Board::new();
    // Row F, columns 3-9: only 6F (a triple letter) is a premium.
    let word = Move::new("ABCDEFG", "3F".parse().unwrap(), "9F".parse().unwrap()).unwrap();
    let letters = 1 + 3 + 3 + 2 * 3 + 1 + 4 + 2;
    assert_eq!(score(&board, &StandardPoints, &word), letters + 50);
}

#[test]
fn test_bingo_is_a_flat_bonus_on_plain_squares() {
    let board = Board::new();
    let word = Move::new("ABCDEFG", "3F".parse().unwrap(), "9F".parse().unwrap()).unwrap();
    // D lands on the 6F triple letter and is worth nothing, leaving only plain squares.
    let points: HashMap<char, u32> = [('A', 1), ('B', 3), ('C', 3), ('E', 1), ('F', 4), ('G', 2)]
        .into_iter()
        .collect();

    let parts = breakdown(&board, &points, &word);
    assert_eq!(*parts.letters(), 14);
    assert_eq!(*parts.word_multiplier(), 1);
    assert_eq!(*parts.tiles_used(), 7);
    assert_eq!(*parts.bingo(), 50);
    assert_eq!(parts.total(), 14 + 50);
}

#[test]
fn test_bad_cross_word_rejected_and_board_unchanged() {
    let mut state = GameState::new();
    state.commit_move(mv("cat 7h 9h"), MoveType::Opponent);
    state.commit_move(mv("to 9h 9i"), MoveType::Opponent);
    let before = state.clone();

    let words = WordList::from_words(["CAT", "TO", "AX"]);
    // AX down from the A puts X beside the O, so row I reads XO.
    let result = LegalMove::check(&state, &rack("X"), &words, &mv("ax 8h 8i"));
    assert_eq!(
        result,
        Err(IllegalMove::InvalidCrossWord {
            word: "XO".to_string(),
            square: "8I".parse().unwrap(),
        })
    );
    assert_eq!(state, before);

    let words = WordList::from_words(["CAT", "TO", "AX", "XO"]);
    assert!(LegalMove::check(&state, &rack("X"), &words, &mv("ax 8h 8i")).is_ok());
}

#[test]
fn test_blank_covers_one_missing_letter() {
    let state = GameState::new();
    let words = WordList::from_words(["CAT"]);
    let cat = mv("cat 7h 9h");

    assert!(LegalMove::check(&state, &rack("CA_"), &words, &cat).is_ok());
    assert!(matches!(
        LegalMove::check(&state, &rack("CA"), &words, &cat),
        Err(IllegalMove::MissingLetters { .. })
    ));

    let found = best_move(&state, &rack("CA_"), &words, &StandardPoints, &SearchConfig::default());
    assert_eq!(found.unwrap().mv().word(), "CAT");
    let none = best_move(&state, &rack("CA"), &words, &StandardPoints, &SearchConfig::default());
    assert!(matches!(none, Err(SearchError::NoLegalMove { .. })));
}

#[test]
fn test_committed_move_cannot_be_replayed() {
    let mut state = GameState::new();
    let words = WordList::from_words(["CAT"]);
    state.commit_move(mv("cat 7h 9h"), MoveType::Own);

    assert!(LegalMove::check(&state, &rack("CAT"), &words, &mv("cat 7h 9h")).is_err());
    assert!(matches!(
        NotRepeated::check(&state, &mv("CAT 7H 9H")),
        Err(IllegalMove::Repeated { .. })
    ));
}

#[test]
fn test_duplicate_words_yield_one_placement() {
    let mut state = GameState::new();
    let words = RawWords(vec!["CAT".to_string(), "CAT".to_string()]);
    let config = SearchConfig::default();

    let first = best_move(&state, &rack("CAT"), &words, &StandardPoints, &config).unwrap();
    assert_eq!(first.mv().to_string(), "cat 6h 8h");
    assert_eq!(*first.score(), (3 + 1 + 1) * 2);

    state.commit_move(first.mv().clone(), MoveType::Own);
    assert_eq!(state.history().len(), 1);

    let second = best_move(&state, &rack("CAT"), &words, &StandardPoints, &config).unwrap();
    assert_ne!(second.mv(), first.mv());
    state.commit_move(second.mv().clone(), MoveType::Own);
    assert_eq!(state.history().own().count(), 2);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn test_replay_reproduces_game() {
    let mut state = GameState::new();
    state.commit_move(mv("cat 7h 9h"), MoveType::Opponent);
    state.commit_move(mv("to 9h 9i"), MoveType::Own);
    state.commit_move(mv("ax 8h 8i"), MoveType::Opponent);

    let replayed = GameState::replay(state.history().plays());
    assert_eq!(replayed, state);
    assert_eq!(replayed.board().contents("8I".parse().unwrap()), Some('X'));
    assert_eq!(replayed.board().contents(Position::CENTER), Some('A'));
    assert!(replayed.check_invariants().is_ok());
}
