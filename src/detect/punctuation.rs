use crate::checker::tokenizer::char_offset;
use crate::{Issue, IssueKind};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Alternatives are tried left to right at each position. The regex crate
    // has no lookahead, so "missing space after" matches every mark and is
    // filtered afterwards.
    static ref PUNCTUATION_RULES: Regex = Regex::new(concat!(
        r"(?P<space_before>\s[.,!?;:])",
        r"|(?P<missing_space_after>[.,!?;:])",
        r"|(?P<multiple_spaces> {2,})",
    ))
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    SpaceBefore,
    MissingSpaceAfter,
    MultipleSpaces,
}

impl Rule {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        if caps.name("space_before").is_some() {
            Some(Rule::SpaceBefore)
        } else if caps.name("missing_space_after").is_some() {
            Some(Rule::MissingSpaceAfter)
        } else if caps.name("multiple_spaces").is_some() {
            Some(Rule::MultipleSpaces)
        } else {
            None
        }
    }

    fn code(self) -> &'static str {
        match self {
            Rule::SpaceBefore => "PUNC_SPACE_BEFORE",
            Rule::MissingSpaceAfter => "PUNC_MISSING_SPACE_AFTER",
            Rule::MultipleSpaces => "PUNC_MULTIPLE_SPACES",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Rule::SpaceBefore => "Пробел перед знаком препинания",
            Rule::MissingSpaceAfter => "Отсутствует пробел после знака препинания",
            Rule::MultipleSpaces => "Лишние пробелы",
        }
    }

    fn expected_fix(self) -> &'static str {
        match self {
            Rule::SpaceBefore => "Уберите пробел перед знаком препинания",
            Rule::MissingSpaceAfter => "Добавьте пробел после знака препинания",
            Rule::MultipleSpaces => "Уберите лишние пробелы",
        }
    }
}

/// Spacing around punctuation marks, then unpaired quotes and brackets.
///
/// A mark at the very end of the text counts as "not followed by
/// whitespace".
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check(text: &str) -> Vec<Issue> {
    let mut errors = Vec::new();

    for caps in PUNCTUATION_RULES.captures_iter(text) {
        let Some(rule) = Rule::from_captures(&caps) else {
            continue;
        };
        let Some(m) = caps.get(0) else {
            continue;
        };

        if rule == Rule::MissingSpaceAfter
            && text[m.end()..].chars().next().is_some_and(char::is_whitespace)
        {
            continue;
        }

        errors.push(punctuation_error(
            m.as_str(),
            Some(char_offset(text, m.start())),
            rule.description(),
            rule.code(),
            rule.expected_fix(),
        ));
    }

    errors.extend(check_paired_characters(text));
    errors
}

fn check_paired_characters(text: &str) -> Vec<Issue> {
    let mut errors = Vec::new();

    let quote_count = text.chars().filter(|&c| c == '"').count();
    if quote_count % 2 != 0 {
        errors.push(punctuation_error(
            "\"",
            char_position(text, '"'),
            "Непарные кавычки",
            "PUNC_UNPAIRED_QUOTE",
            "Добавьте закрывающую кавычку",
        ));
    }

    let open = char_position(text, '(');
    let close = char_position(text, ')');
    if open.is_some() != close.is_some() {
        errors.push(punctuation_error(
            if open.is_some() { "(" } else { ")" },
            open.or(close),
            "Непарные скобки",
            "PUNC_UNPAIRED_BRACKET",
            "Добавьте парную скобку",
        ));
    }

    errors
}

fn char_position(text: &str, needle: char) -> Option<usize> {
    text.chars().position(|c| c == needle)
}

fn punctuation_error(
    text: &str,
    position: Option<usize>,
    description: &str,
    code: &str,
    expected_fix: &str,
) -> Issue {
    Issue::new(
        text,
        position,
        description,
        code,
        IssueKind::Punctuation {
            expected_fix: expected_fix.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn test_well_spaced_text() {
        assert!(check("Привет, мир! Как дела? ").is_empty());
        assert!(check("").is_empty());
        assert!(check("слово").is_empty());
    }

    #[test]
    fn test_space_before_period() {
        let errors = check("Я оформил заказ .");
        assert_eq!(codes(&errors), vec!["PUNC_SPACE_BEFORE"]);
        assert_eq!(errors[0].text, " .");
        assert_eq!(errors[0].position, Some(15));
        assert_eq!(
            errors[0].kind,
            IssueKind::Punctuation {
                expected_fix: "Уберите пробел перед знаком препинания".to_string()
            }
        );
    }

    #[test]
    fn test_missing_space_after() {
        let errors = check("Привет,мир");
        assert_eq!(codes(&errors), vec!["PUNC_MISSING_SPACE_AFTER"]);
        assert_eq!(errors[0].text, ",");
        assert_eq!(errors[0].position, Some(6));
    }

    #[test]
    fn test_final_mark_counts_as_missing_space() {
        let errors = check("Готово.");
        assert_eq!(codes(&errors), vec!["PUNC_MISSING_SPACE_AFTER"]);
        assert_eq!(errors[0].position, Some(6));
    }

    #[test]
    fn test_ellipsis() {
        let errors = check("Ну... ладно");
        // the first two dots are followed by dots, the last by a space
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].position, Some(2));
        assert_eq!(errors[1].position, Some(3));
    }

    #[test]
    fn test_multiple_spaces() {
        let errors = check("раз   два");
        assert_eq!(codes(&errors), vec!["PUNC_MULTIPLE_SPACES"]);
        assert_eq!(errors[0].text, "   ");
        assert_eq!(errors[0].position, Some(3));
    }

    #[test]
    fn test_scan_is_left_to_right() {
        let errors = check("раз  , два");
        // the double space is consumed before " ," can match
        assert_eq!(codes(&errors), vec!["PUNC_MULTIPLE_SPACES"]);
    }

    #[test]
    fn test_unpaired_quote() {
        let errors = check("Он сказал \"привет ");
        assert_eq!(codes(&errors), vec!["PUNC_UNPAIRED_QUOTE"]);
        assert_eq!(errors[0].position, Some(10));
        assert!(check("Он сказал \"привет\" ").is_empty());
    }

    #[test]
    fn test_unpaired_brackets() {
        let open = check("Текст (пример ");
        assert_eq!(codes(&open), vec!["PUNC_UNPAIRED_BRACKET"]);
        assert_eq!(open[0].text, "(");
        assert_eq!(open[0].position, Some(6));

        let close = check("Текст пример) ");
        assert_eq!(close[0].text, ")");
        assert_eq!(close[0].position, Some(12));

        assert!(check("Текст (пример) ").is_empty());
    }
}
