use crate::checker::tokenizer::{self, char_offset};
use crate::detect::locate;
use crate::{Issue, IssueKind};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Sentences with more words than this are flagged.
pub const LONG_SENTENCE_WORDS: usize = 25;

/// Words used more often than this across the text are flagged.
pub const FREQUENT_WORD_LIMIT: usize = 3;

const REPETITION_SEVERITY: f64 = 0.7;
const LONG_SENTENCE_SEVERITY: f64 = 0.5;
const FREQUENCY_SEVERITY: f64 = 0.6;
const PASSIVE_SEVERITY: f64 = 0.4;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
    static ref PASSIVE: Regex = Regex::new(r"(?i)\b(был|была|было|были)\s+\w+н\w*\b").unwrap();
}

/// Tautologies, long sentences, overused words and passive constructions.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check(text: &str) -> Vec<Issue> {
    let mut issues = check_repeated_words(text);
    issues.extend(check_long_sentences(text));
    issues.extend(check_word_frequency(text));
    issues.extend(check_passive_constructions(text));
    issues
}

/// The same word twice in a row, separated only by whitespace.
///
/// Comparison ignores case. Matches do not overlap: in "да да да" only the
/// first pair is reported.
fn check_repeated_words(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut previous: Option<regex::Match<'_>> = None;

    for current in WORD.find_iter(text) {
        let Some(prev) = previous else {
            previous = Some(current);
            continue;
        };

        let gap = &text[prev.end()..current.start()];
        let repeated = !gap.is_empty()
            && gap.chars().all(char::is_whitespace)
            && prev.as_str().to_lowercase() == current.as_str().to_lowercase();

        if repeated {
            issues.push(style_issue(
                &text[prev.start()..current.end()],
                Some(char_offset(text, prev.start())),
                "Повторение слова - тавтология".to_string(),
                "STYLE_REPETITION",
                REPETITION_SEVERITY,
            ));
            previous = None;
        } else {
            previous = Some(current);
        }
    }

    issues
}

fn check_long_sentences(text: &str) -> Vec<Issue> {
    tokenizer::sentences(text)
        .into_iter()
        .filter_map(|sentence| {
            let word_count = tokenizer::words(sentence).len();
            if word_count <= LONG_SENTENCE_WORDS {
                return None;
            }

            let head: String = sentence.chars().take(30).collect();
            Some(style_issue(
                &format!("{}...", head),
                locate(text, sentence),
                format!("Слишком длинное предложение ({} слов)", word_count),
                "STYLE_LONG_SENTENCE",
                LONG_SENTENCE_SEVERITY,
            ))
        })
        .collect()
}

/// Words longer than three letters used more than three times. Reported in
/// order of first use, without a position.
fn check_word_frequency(text: &str) -> Vec<Issue> {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for word in tokenizer::words(&lowered) {
        if word.chars().count() <= 3 {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|word| {
            let count = counts.get(word).copied().unwrap_or(0);
            (count > FREQUENT_WORD_LIMIT).then(|| {
                style_issue(
                    word,
                    None,
                    format!("Слово повторяется слишком часто ({} раз)", count),
                    "STYLE_FREQUENCY",
                    FREQUENCY_SEVERITY,
                )
            })
        })
        .collect()
}

fn check_passive_constructions(text: &str) -> Vec<Issue> {
    PASSIVE
        .find_iter(text)
        .map(|m| {
            style_issue(
                m.as_str(),
                Some(char_offset(text, m.start())),
                "Пассивная конструкция - рассмотрите активный залог".to_string(),
                "STYLE_PASSIVE",
                PASSIVE_SEVERITY,
            )
        })
        .collect()
}

fn style_issue(
    text: &str,
    position: Option<usize>,
    description: String,
    code: &str,
    severity: f64,
) -> Issue {
    Issue::new(text, position, description, code, IssueKind::Style { severity })
}
