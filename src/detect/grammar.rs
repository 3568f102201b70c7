use crate::checker::tokenizer;
use crate::detect::locate;
use crate::{Issue, IssueKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Prepositional case: "о/об/про" + word ending in "а"
    static ref PREPOSITIONAL_CASE: Regex = Regex::new(r"(?i)\b(о|об|про)\s+\w+а\b").unwrap();
    // Genitive case: "без/до/от/у" + word ending in "е"
    static ref GENITIVE_CASE: Regex = Regex::new(r"(?i)\b(без|до|от|у)\s+\w+е\b").unwrap();
    static ref FUTURE_INFINITIVE: Regex =
        Regex::new(r"(?i)\b(буду|будет|будут)\s+\w+ть\b").unwrap();
}

/// Run all grammar heuristics: number agreement, case government after
/// prepositions, then future-tense verb forms.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check(text: &str) -> Vec<Issue> {
    let mut errors = check_number_agreement(text);
    errors.extend(check_case_usage(text));
    errors.extend(check_verb_forms(text));
    errors
}

fn looks_singular(word: &str) -> bool {
    word.ends_with(['а', 'я', 'о', 'е', 'й'])
}

fn looks_plural(word: &str) -> bool {
    ["ют", "ят", "али", "или"]
        .iter()
        .any(|ending| word.ends_with(ending))
}

/// A singular-looking word directly followed by a plural-looking one.
fn check_number_agreement(text: &str) -> Vec<Issue> {
    let mut errors = Vec::new();

    for sentence in tokenizer::sentences(text) {
        let words = tokenizer::words(sentence);

        for pair in words.windows(2) {
            if looks_singular(pair[0]) && looks_plural(pair[1]) {
                let surface = format!("{} {}", pair[0], pair[1]);
                let position = locate(text, &surface);
                errors.push(grammar_error(
                    surface,
                    position,
                    "Несогласование подлежащего и сказуемого в числе",
                    "GRAM_AGREEMENT_NUMBER",
                    "Числовое согласование",
                ));
            }
        }
    }

    errors
}

fn check_case_usage(text: &str) -> Vec<Issue> {
    [&*PREPOSITIONAL_CASE, &*GENITIVE_CASE]
        .into_iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|m| {
            grammar_error(
                m.as_str(),
                locate(text, m.as_str()),
                "Возможно, неправильное использование падежа",
                "GRAM_CASE_USAGE",
                "Падежное управление",
            )
        })
        .collect()
}

fn check_verb_forms(text: &str) -> Vec<Issue> {
    FUTURE_INFINITIVE
        .find_iter(text)
        .map(|m| {
            grammar_error(
                m.as_str(),
                locate(text, m.as_str()),
                "Проверьте видовременную форму глагола",
                "GRAM_VERB_FORM",
                "Вид глагола",
            )
        })
        .collect()
}

fn grammar_error(
    text: impl Into<String>,
    position: Option<usize>,
    description: &str,
    code: &str,
    rule: &str,
) -> Issue {
    Issue::new(
        text,
        position,
        description,
        code,
        IssueKind::Grammar {
            rule: rule.to_string(),
        },
    )
}
