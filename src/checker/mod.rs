pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use crate::{Issue, IssueKind};
use dictionary::DictionaryStore;
use std::fmt;
use std::sync::Arc;

/// Why a word was rejected, judged from the token as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingErrorKind {
    LatinMix,
    NumberMix,
    TooLong,
    UnknownWord,
}

impl SpellingErrorKind {
    /// Latin letters win over digits, digits over length.
    pub fn classify(token: &str, cleaned_len: usize) -> Self {
        if token.chars().any(|c| c.is_ascii_alphabetic()) {
            SpellingErrorKind::LatinMix
        } else if token.chars().any(|c| c.is_ascii_digit()) {
            SpellingErrorKind::NumberMix
        } else if cleaned_len > 20 {
            SpellingErrorKind::TooLong
        } else {
            SpellingErrorKind::UnknownWord
        }
    }

    pub fn code(self) -> String {
        format!("ORPH_{}", self)
    }
}

impl fmt::Display for SpellingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellingErrorKind::LatinMix => write!(f, "LATIN_MIX"),
            SpellingErrorKind::NumberMix => write!(f, "NUMBER_MIX"),
            SpellingErrorKind::TooLong => write!(f, "TOO_LONG"),
            SpellingErrorKind::UnknownWord => write!(f, "UNKNOWN_WORD"),
        }
    }
}

/// Dictionary-backed spelling pass.
#[derive(Clone)]
pub struct SpellChecker {
    dictionary: Arc<DictionaryStore>,
}

impl SpellChecker {
    pub fn new(dictionary: Arc<DictionaryStore>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Arc<DictionaryStore> {
        &self.dictionary
    }

    /// Report every whitespace-separated token the dictionary rejects.
    ///
    /// Positions assume exactly one separator between tokens: the offset of
    /// token `i` is the character length of tokens `0..i` plus `i`. Runs of
    /// several whitespace characters, and leading whitespace, therefore shift
    /// the reported offset left of the true one.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn check(&self, text: &str) -> Vec<Issue> {
        let mut errors = Vec::new();
        let text_len = text.chars().count();
        let mut position = 0;

        for token in tokenizer::words(text) {
            let token_start = position.min(text_len);
            position += token.chars().count() + 1;

            let cleaned = tokenizer::clean(token);
            let cleaned_len = cleaned.chars().count();

            // Skip short and non-Russian words
            if cleaned_len < 2 || !tokenizer::is_alphabetic_token(&cleaned) {
                continue;
            }

            if self.dictionary.is_valid(&cleaned) {
                continue;
            }

            let kind = SpellingErrorKind::classify(token, cleaned_len);
            let suggestions = self.dictionary.suggest(&cleaned);

            errors.push(Issue::new(
                token,
                Some(token_start),
                "Слово не найдено в словаре",
                kind.code(),
                IssueKind::Spelling { suggestions },
            ));
        }

        errors
    }
}
