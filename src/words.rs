//! Plain-text word lists: one word per line, `#` starts a comment line.

use crate::checker::dictionary::DictionaryStore;
use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Read a word list, lowercasing entries and skipping comments and
/// single-letter lines.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.chars().count() > 1 && !word.starts_with('#'))
        .collect();

    debug!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Build the dictionary from the built-in seed plus any readable lists.
///
/// A missing or unreadable list is logged and skipped.
pub fn build_dictionary<'a, I>(paths: I) -> DictionaryStore
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut words = Vec::new();

    for path in paths {
        if !path.exists() {
            warn!(path = %path.display(), "word list not found, using built-in words");
            continue;
        }
        match load_word_list(path) {
            Ok(list) => words.extend(list),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping word list"),
        }
    }

    DictionaryStore::with_words(words)
}

/// Dictionary for a loaded configuration: the word list, if any, plus the
/// personal dictionary once something has been added to it.
pub fn load_dictionary(config: &Config) -> DictionaryStore {
    let personal = config
        .personal_dictionary
        .as_deref()
        .filter(|path| path.exists());
    build_dictionary(config.word_list.as_deref().into_iter().chain(personal))
}

/// Append a word to a personal word list, creating the file and its
/// directory when needed.
pub fn append_personal_word(path: &Path, word: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create personal dictionary directory")?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open personal dictionary: {}", path.display()))?;

    writeln!(file, "{}", word.trim().to_lowercase())
        .with_context(|| format!("Failed to write personal dictionary: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_word_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "# comment\nКвокка\n  тюлень  \nя\n\n").unwrap();

        let words = load_word_list(&path).unwrap();
        assert_eq!(words, vec!["квокка", "тюлень"]);
    }

    #[test]
    fn test_missing_list_falls_back_to_seed() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let store = build_dictionary([missing.as_path()]);
        assert_eq!(store.size(), DictionaryStore::new().size());
        assert!(store.is_valid("привет"));
    }

    #[test]
    fn test_lists_are_merged() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "квокка\n").unwrap();
        fs::write(&second, "тюлень\nквокка\n").unwrap();

        let store = build_dictionary([first.as_path(), second.as_path()]);
        assert_eq!(store.size(), DictionaryStore::new().size() + 2);
        assert!(store.is_valid("тюлень"));
    }

    #[test]
    fn test_load_dictionary_from_config() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("words.txt");
        fs::write(&list, "квокка\n").unwrap();

        let config = Config {
            word_list: Some(list),
            personal_dictionary: Some(dir.path().join("personal.txt")),
            ..Default::default()
        };
        let store = load_dictionary(&config);
        assert!(store.is_valid("квокка"));

        append_personal_word(config.personal_dictionary.as_deref().unwrap(), "тюлень").unwrap();
        assert!(load_dictionary(&config).is_valid("тюлень"));
    }

    #[test]
    fn test_append_personal_word() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("personal.txt");

        append_personal_word(&path, "Квокка").unwrap();
        append_personal_word(&path, "тюлень").unwrap();

        assert_eq!(load_word_list(&path).unwrap(), vec!["квокка", "тюлень"]);
    }
}
