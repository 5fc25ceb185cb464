//! Word list and definition loading.
//!
//! Both files are plain text. Word lists hold one word per line; definition
//! files hold `WORD definition text` per line, where bracketed segments such
//! as `[n]` and double quotes are dropped from the text.

use crate::config::{ConfigError, SolverConfig};
use std::path::Path;
use strictly_scrabble::WordList;
use tracing::{info, instrument, warn};

/// Loads the word list and, when configured, its definitions.
#[instrument(skip(config))]
pub fn load_dictionary(config: &SolverConfig) -> Result<WordList, ConfigError> {
    let mut words = load_words(config.words_path(), *config.header_lines())?;
    if let Some(path) = config.definitions_path() {
        load_definitions(&mut words, path, *config.header_lines())?;
    }
    Ok(words)
}

/// Reads a word list, skipping `header_lines` leading lines, blank lines
/// and `#` comments.
///
/// Entries containing anything other than letters are skipped with a warning.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_words(path: &Path, header_lines: usize) -> Result<WordList, ConfigError> {
    let content = read(path, "word list")?;
    let mut words = WordList::default();
    let mut skipped = 0;

    for (number, line) in content.lines().enumerate().skip(header_lines) {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        if !entry.chars().all(|c| c.is_ascii_alphabetic()) {
            warn!(line = number + 1, entry, "Skipping word list entry");
            skipped += 1;
            continue;
        }
        words.insert(entry);
    }

    info!(words = words.len(), skipped, "Word list loaded");
    Ok(words)
}

/// Attaches definitions from `path` to `words`.
///
/// Returns the number of lines that produced a definition.
#[instrument(skip(words, path), fields(path = %path.display()))]
pub fn load_definitions(
    words: &mut WordList,
    path: &Path,
    header_lines: usize,
) -> Result<usize, ConfigError> {
    let content = read(path, "definitions file")?;
    let mut loaded = 0;

    for (number, line) in content.lines().enumerate().skip(header_lines) {
        let Some((word, text)) = line.trim().split_once(char::is_whitespace) else {
            if !line.trim().is_empty() {
                warn!(line = number + 1, "Definition line has no text");
            }
            continue;
        };
        let text = clean_definition(text);
        if text.is_empty() {
            continue;
        }
        words.add_definition(word, text);
        loaded += 1;
    }

    info!(
        definitions = loaded,
        distinct = words.definition_count(),
        "Definitions loaded"
    );
    Ok(loaded)
}

/// Drops `[...]` segments and double quotes, then tidies whitespace.
pub fn clean_definition(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '[' => depth += 1,
            ']' if depth > 0 => depth -= 1,
            '"' => {}
            _ if depth == 0 => cleaned.push(c),
            _ => {}
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn read(path: &Path, what: &str) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!(
            "Failed to read {} {}: {}",
            what,
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_scrabble::{Dictionary, SearchConfig};
    use tempfile::TempDir;

    #[test]
    fn test_clean_definition() {
        assert_eq!(
            clean_definition(r#"a small "domestic" feline [n -S]"#),
            "a small domestic feline"
        );
        assert_eq!(clean_definition("[v] to run [adj]"), "to run");
        assert_eq!(clean_definition("plain"), "plain");
    }

    #[test]
    fn test_load_words_skips_headers_and_junk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "Word list v1\n\ncat\n# comment\ndog\nco-op\n\nCAT\n").unwrap();

        let words = load_words(&path, 1).unwrap();
        assert_eq!(words.words(), &["CAT".to_string(), "DOG".to_string()]);
    }

    #[test]
    fn test_load_definitions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("defs.txt");
        std::fs::write(
            &path,
            "header\nheader\nCAT a \"small\" feline [n]\nDOG\nCAT ignored\n",
        )
        .unwrap();

        let mut words = WordList::from_words(["CAT", "DOG"]);
        let loaded = load_definitions(&mut words, &path, 2).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(words.definition_count(), 1);
        assert_eq!(words.definition("cat"), Some("a small feline"));
        assert_eq!(words.definition("dog"), None);
    }

    #[test]
    fn test_load_dictionary_from_built_config() {
        let dir = TempDir::new().unwrap();
        let words_path = dir.path().join("words.txt");
        let defs_path = dir.path().join("defs.txt");
        std::fs::write(&words_path, "CAT\nDOG\n").unwrap();
        std::fs::write(&defs_path, "DOG a loyal canine\n").unwrap();

        let config = SolverConfig::new(&words_path)
            .with_definitions(&defs_path)
            .with_search(SearchConfig::default().with_zone_pruning(true));
        assert!(config.search().zone_pruning);

        let words = load_dictionary(&config).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.definition_count(), 1);
        assert_eq!(words.definition("dog"), Some("a loyal canine"));
    }

    #[test]
    fn test_missing_word_list() {
        let err = load_words(Path::new("/nonexistent/words.txt"), 0).unwrap_err();
        assert!(err.message.contains("word list"));
    }
}
