use crate::checker::suggestions;
use crate::checker::tokenizer;
use dashmap::DashSet;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Upper bound on the number of suggestions for one word.
pub const MAX_SUGGESTIONS: usize = 5;

const ADJECTIVE_ENDINGS: &[&str] = &["ый", "ий", "ая", "яя", "ое", "ее", "ой", "ей"];

const VERB_ENDINGS: &[&str] = &[
    "ть", "ться", "л", "ла", "ло", "ли", "ю", "ешь", "ет", "ем", "ете", "ут", "ют",
];

const STOP_WORDS: &[&str] = &[
    "бы", "ли", "же", "вот", "как", "так", "это", "что", "кто", "где", "когда", "почему",
    "зачем", "какой", "какая", "какое", "какие", "мне", "тебе", "ему", "ей", "нам", "вам", "им",
    "меня", "тебя", "его", "её",
];

const KNOWN_MISTAKES: &[(&str, &str)] = &[
    ("здавствуйте", "здравствуйте"),
    ("привед", "привет"),
    ("пака", "пока"),
    ("симпотичный", "симпатичный"),
    ("агенство", "агентство"),
    ("компания", "кампания"),
    ("впринципе", "в принципе"),
    ("итд", "и т.д."),
    ("итп", "и т.п."),
    ("зделать", "сделать"),
    ("вообщем", "в общем"),
    ("очет", "отчет"),
    ("придёт", "придет"),
];

/// Words every store starts with, whether or not an external list is loaded.
const SEED_WORDS: &[&str] = &[
    "привет", "здравствуйте", "пицца", "пиццу", "ананас", "ананасы", "ананасами",
    "заказ", "оформление", "ответ", "текст", "ошибка", "проверка", "грамматика",
    "орфография", "пунктуация", "стилистика", "программа", "анализатор",
    "слово", "предложение", "язык", "русский", "английский", "пример",
    "результат", "система", "функция", "метод", "класс", "объект",
    "данные", "информация", "файл", "директория", "проект", "разработка",
    "хотеть", "хочу", "хотел", "хотела", "хотелось", "заказать", "оформить",
    "оформляю", "ждать", "жду", "проверить", "проверяю", "найти", "исправить",
    "писать", "написать", "говорить", "сказать", "работать", "создать",
    "использовать", "получить", "сделать", "выполнить", "реализовать",
    "правильный", "неправильный", "хороший",
    "плохой", "красивый", "интересный", "сложный", "простой", "быстрый",
    "медленный", "новый", "старый", "основной", "дополнительный", "важный",
    "правильно", "неправильно", "быстро", "медленно", "хорошо", "плохо",
    "очень", "совсем", "почти", "возможно", "точно", "верно",
    "я", "ты", "он", "она", "оно", "мы", "вы", "они", "мой", "твой", "свой",
    "в", "на", "за", "под", "над", "перед", "после", "из", "от", "до", "по",
    "и", "а", "но", "или", "что", "чтобы", "как", "когда", "где", "куда",
];

/// Known words plus the fixed stop-word and misspelling tables.
///
/// The word set only grows. Lookups and insertions take `&self` and may run
/// concurrently from any number of threads.
pub struct DictionaryStore {
    words: DashSet<String>,
    stop_words: HashSet<&'static str>,
    known_mistakes: HashMap<&'static str, &'static str>,
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryStore {
    /// Store holding only the built-in seed list.
    pub fn new() -> Self {
        Self::with_words(std::iter::empty::<&str>())
    }

    /// Store holding the seed list merged with an external word sequence.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self {
            words: DashSet::new(),
            stop_words: STOP_WORDS.iter().copied().collect(),
            known_mistakes: KNOWN_MISTAKES.iter().copied().collect(),
        };

        for word in SEED_WORDS {
            store.words.insert((*word).to_string());
        }
        for word in words {
            store.add_word(word.as_ref());
        }

        debug!(size = store.size(), "dictionary ready");
        store
    }

    /// Check whether a word is acceptable Russian.
    ///
    /// A stored word is found as written (trimmed, lowercased) before any
    /// cleaning, so entries like "какой-то" stay valid.
    pub fn is_valid(&self, word: &str) -> bool {
        if self.words.contains(&word.trim().to_lowercase()) {
            return true;
        }

        let word = tokenizer::clean(word);

        if word.chars().count() < 2 {
            return true;
        }
        if self.stop_words.contains(word.as_str()) {
            return true;
        }
        if self.words.contains(&word) {
            return true;
        }
        // A listed misspelling is never rescued by the suffix heuristics
        if self.known_mistakes.contains_key(word.as_str()) {
            return false;
        }

        self.matches_known_stem(&word)
    }

    /// Accept inflected forms whose stem (or stem + "ть") is a known word.
    fn matches_known_stem(&self, word: &str) -> bool {
        if word.chars().count() <= 3 {
            return false;
        }

        let adjective = ADJECTIVE_ENDINGS.iter().any(|ending| {
            word.strip_suffix(ending)
                .is_some_and(|stem| self.words.contains(stem))
        });
        if adjective {
            return true;
        }

        VERB_ENDINGS.iter().any(|ending| {
            word.strip_suffix(ending).is_some_and(|stem| {
                self.words.contains(stem) || self.words.contains(&format!("{}ть", stem))
            })
        })
    }

    /// Up to [`MAX_SUGGESTIONS`] distinct corrections, best first.
    ///
    /// Order: the listed correction for a known misspelling, then up to three
    /// dictionary words within edit distance 2 (closest first, equal
    /// distances in lexicographic order), then canonical greeting forms.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let word = tokenizer::clean(word);
        if word.is_empty() {
            return Vec::new();
        }

        let mut candidates = Vec::new();

        if let Some(correction) = self.known_mistakes.get(word.as_str()) {
            candidates.push((*correction).to_string());
        }

        let word_len = word.chars().count();
        let snapshot: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.chars().count().abs_diff(word_len) <= suggestions::MAX_DISTANCE)
            .map(|w| w.key().clone())
            .collect();
        candidates.extend(suggestions::nearest(
            &word,
            snapshot.iter().map(String::as_str),
            suggestions::MAX_DISTANCE,
            suggestions::MAX_NEIGHBOURS,
        ));
        candidates.extend(suggestions::greeting_forms(&word));

        suggestions::dedup_truncate(candidates, MAX_SUGGESTIONS)
    }

    /// Insert a word (lowercased). Returns `false` when it was already known
    /// or is blank.
    pub fn add_word(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }

        let inserted = self.words.insert(word);
        if inserted {
            debug!(size = self.words.len(), "word added to dictionary");
        }
        inserted
    }

    /// Number of dictionary words, excluding stop words and misspellings.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// The fixed misspelling → correction table.
    pub fn known_mistakes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.known_mistakes.iter().map(|(k, v)| (*k, *v))
    }
}
