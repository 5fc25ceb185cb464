//! Read-only word and point capabilities the engine is handed.
//!
//! The engine never loads word lists itself. Callers supply a [`Dictionary`]
//! and a [`PointTable`]; tests use a small [`WordList`] fixture.

use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Word validity and enumeration.
pub trait Dictionary {
    /// True if `word` is playable. Case-insensitive.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Every playable word (uppercase), in the order the search visits them.
    fn words(&self) -> &[String];

    /// Definition of `word`, when one is known.
    fn definition(&self, _word: &str) -> Option<&str> {
        None
    }
}

/// Point value of each letter.
pub trait PointTable {
    /// Points for `letter`. Case-insensitive; unknown characters score 0.
    fn point_value(&self, letter: char) -> u32;
}

/// In-memory dictionary backed by an ordered word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    lookup: HashSet<String>,
    definitions: HashMap<String, String>,
}

impl WordList {
    /// Builds a word list, uppercasing every entry and keeping first-seen order.
    ///
    /// Blank entries and duplicates are dropped.
    #[instrument(skip(words))]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            list.insert(word.as_ref());
        }
        debug!(count = list.len(), "Word list built");
        list
    }

    /// Adds a word if it is new. Returns true when it was added.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        if word.is_empty() || self.lookup.contains(&word) {
            return false;
        }
        self.lookup.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Attaches a definition to `word`. The first definition wins.
    pub fn add_definition(&mut self, word: &str, definition: impl Into<String>) {
        self.definitions
            .entry(word.trim().to_ascii_uppercase())
            .or_insert_with(|| definition.into());
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of definitions.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_ascii_uppercase())
    }

    fn words(&self) -> &[String] {
        &self.words
    }

    fn definition(&self, word: &str) -> Option<&str> {
        self.definitions
            .get(&word.to_ascii_uppercase())
            .map(String::as_str)
    }
}

/// The classic English tile values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPoints;

impl PointTable for StandardPoints {
    fn point_value(&self, letter: char) -> u32 {
        match letter.to_ascii_uppercase() {
            'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
            'D' | 'G' => 2,
            'B' | 'C' | 'M' | 'P' => 3,
            'F' | 'H' | 'V' | 'W' | 'Y' => 4,
            'K' => 5,
            'J' | 'X' => 8,
            'Q' | 'Z' => 10,
            _ => 0,
        }
    }
}

impl PointTable for HashMap<char, u32> {
    fn point_value(&self, letter: char) -> u32 {
        self.get(&letter.to_ascii_uppercase()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_is_case_insensitive() {
        let words = WordList::from_words(["cat", "Dog"]);
        assert!(words.is_valid_word("CAT"));
        assert!(words.is_valid_word("dog"));
        assert!(!words.is_valid_word("cow"));
        assert_eq!(words.words(), &["CAT".to_string(), "DOG".to_string()]);
    }

    #[test]
    fn test_word_list_drops_duplicates_and_blanks() {
        let words = WordList::from_words(["cat", "", "CAT", "  ", "dog"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_definitions() {
        let mut words = WordList::from_words(["cat"]);
        words.add_definition("cat", "a small feline");
        words.add_definition("CAT", "ignored");
        assert_eq!(words.definition("Cat"), Some("a small feline"));
        assert_eq!(words.definition("dog"), None);
    }

    #[test]
    fn test_standard_points() {
        let points = StandardPoints;
        assert_eq!(points.point_value('a'), 1);
        assert_eq!(points.point_value('Q'), 10);
        assert_eq!(points.point_value('K'), 5);
        assert_eq!(points.point_value('_'), 0);
        let total: u32 = ('A'..='Z').map(|c| points.point_value(c)).sum();
        assert_eq!(total, 87);
    }

    #[test]
    fn test_map_point_table() {
        let table: HashMap<char, u32> = [('C', 3), ('A', 1), ('T', 2)].into_iter().collect();
        assert_eq!(table.point_value('c'), 3);
        assert_eq!(table.point_value('Z'), 0);
    }
}
