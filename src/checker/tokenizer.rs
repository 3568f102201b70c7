// Whitespace/sentence tokenization and Cyrillic normalization shared by the
// spell checker, the detectors and the metrics pass.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// True for the 33 lowercase letters of the Russian alphabet.
pub fn is_cyrillic_char(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'ё')
}

/// Split on runs of whitespace. Blank input yields nothing.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split on runs of `.`, `!` and `?`, trimming each piece and dropping the
/// empty ones.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split on runs of `.`, `!` and `?` without trimming. Empty pieces are kept
/// except at the very end, so `"!Привет"` has two pieces and `"Привет."` one.
pub fn raw_sentences(text: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = SENTENCE_BREAK.split(text).collect();
    while pieces.last().is_some_and(|s| s.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Lowercase, then drop everything that is not a Russian letter.
pub fn clean(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|&c| is_cyrillic_char(c))
        .collect()
}

/// True when the token, lowercased, is made of Russian letters only.
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.to_lowercase().chars().all(is_cyrillic_char)
}

/// Cleaned Russian words longer than one letter, in text order.
pub fn extract_russian_words(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .map(clean)
        .filter(|w| w.chars().count() > 1)
        .collect()
}

/// Convert a byte index produced by a regex match into a character offset.
pub fn char_offset(text: &str, byte_idx: usize) -> usize {
    text.get(..byte_idx)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(words("Я  оформил\tзаказ\n"), vec!["Я", "оформил", "заказ"]);
        assert!(words("").is_empty());
        assert!(words("  \n\t ").is_empty());
    }

    #[test]
    fn test_sentences_are_trimmed_and_filtered() {
        assert_eq!(
            sentences("Привет! Как дела?? Хорошо..."),
            vec!["Привет", "Как дела", "Хорошо"]
        );
        assert!(sentences("...!?").is_empty());
    }

    #[test]
    fn test_raw_sentences_keep_inner_pieces() {
        assert_eq!(raw_sentences("Привет. Как дела"), vec!["Привет", " Как дела"]);
        assert_eq!(raw_sentences("Привет."), vec!["Привет"]);
        assert_eq!(raw_sentences("!Привет"), vec!["", "Привет"]);
        assert!(raw_sentences("...").is_empty());
        assert_eq!(raw_sentences("без точки"), vec!["без точки"]);
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("Привет,"), "привет");
        assert_eq!(clean("«Ёлка»"), "ёлка");
        assert_eq!(clean("abc123"), "");
        assert_eq!(clean("кот2b"), "кот");
    }

    #[test]
    fn test_is_alphabetic_token() {
        assert!(is_alphabetic_token("Привет"));
        assert!(is_alphabetic_token("ЁЖ"));
        assert!(!is_alphabetic_token("привет!"));
        assert!(!is_alphabetic_token("hello"));
        assert!(!is_alphabetic_token("кот2"));
        assert!(!is_alphabetic_token(""));
    }

    #[test]
    fn test_extract_russian_words() {
        assert_eq!(
            extract_russian_words("Я купил Пиццу, and cola!"),
            vec!["купил", "пиццу"]
        );
    }

    #[test]
    fn test_char_offset() {
        let text = "Я оформил";
        assert_eq!(char_offset(text, 0), 0);
        assert_eq!(char_offset(text, "Я ".len()), 2);
        assert_eq!(char_offset(text, text.len()), 9);
    }
}
