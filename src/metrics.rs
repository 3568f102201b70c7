//! Size, readability and "water" (filler-word) metrics.

use crate::checker::tokenizer;
use serde::Serialize;

const VOWELS: &str = "аеёиоуыэюя";

/// Words that add bulk without adding meaning.
const FILLER_WORDS: &[&str] = &[
    "является",
    "являются",
    "можно",
    "нужно",
    "должен",
    "какой-то",
    "некоторый",
    "очень",
    "довольно",
    "именно",
    "данный",
    "определенный",
    "некий",
    "собственно",
    "скажем",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    /// 0 (hard) to 100 (easy).
    pub readability_index: f64,
    /// Share of filler words, in percent.
    pub water_percentage: f64,
}

impl Metrics {
    /// Compute all metrics. Blank text yields all zeros.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn compute(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::default();
        }

        Self {
            char_count: text.chars().count(),
            word_count: tokenizer::words(text).len(),
            sentence_count: tokenizer::raw_sentences(text).len(),
            readability_index: readability_index(text),
            water_percentage: water_percentage(text),
        }
    }
}

/// Vowel groups in a word; at least 1 for any non-empty word.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut last_was_vowel = false;

    for ch in word.to_lowercase().chars() {
        let is_vowel = VOWELS.contains(ch);
        if is_vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = is_vowel;
    }

    count.max(1)
}

/// `100 - words per sentence - 100 * share of words with over 3 syllables`,
/// clamped to 0..=100.
///
/// Sentences are counted without dropping empty pieces, see
/// [`tokenizer::raw_sentences`].
pub fn readability_index(text: &str) -> f64 {
    let words = tokenizer::words(text);
    let sentence_count = tokenizer::raw_sentences(text).len();

    if words.is_empty() || sentence_count == 0 {
        return 0.0;
    }

    let avg_sentence_length = words.len() as f64 / sentence_count as f64;
    let complex_words = words.iter().filter(|w| count_syllables(w) > 3).count();
    let complex_word_ratio = complex_words as f64 / words.len() as f64;

    (100.0 - avg_sentence_length - complex_word_ratio * 100.0).clamp(0.0, 100.0)
}

/// Percentage of words longer than two characters that are filler words.
pub fn water_percentage(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = tokenizer::words(&lowered)
        .into_iter()
        .filter(|w| w.chars().count() > 2)
        .collect();

    if words.is_empty() {
        return 0.0;
    }

    let filler = words.iter().filter(|w| FILLER_WORDS.contains(w)).count();
    filler as f64 / words.len() as f64 * 100.0
}
