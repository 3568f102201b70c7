pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod metrics;
pub mod words;

pub use analyzer::TextAnalyzer;
pub use checker::dictionary::DictionaryStore;
pub use checker::SpellChecker;
pub use config::Config;
pub use error::{AnalysisError, AnalysisResult};
pub use metrics::Metrics;

use serde::Serialize;

/// The only language code the engine accepts.
pub const SUPPORTED_LANGUAGE: &str = "ru";

/// A single finding, shared by every analysis pass.
///
/// `position` is a character offset into the analysed text; `None` when the
/// finding cannot be tied to one place (e.g. a word used too often).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub text: String,
    pub position: Option<usize>,
    pub description: String,
    pub code: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    Spelling { suggestions: Vec<String> },
    Grammar { rule: String },
    Punctuation { expected_fix: String },
    Style { severity: f64 },
}

impl Issue {
    pub fn new(
        text: impl Into<String>,
        position: Option<usize>,
        description: impl Into<String>,
        code: impl Into<String>,
        kind: IssueKind,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            description: description.into(),
            code: code.into(),
            kind,
        }
    }

    /// `[CODE] "text" (позиция: N) - description`
    pub fn detailed_description(&self) -> String {
        let position = self
            .position
            .map(|p| format!(" (позиция: {})", p))
            .unwrap_or_default();
        format!(
            "[{}] \"{}\"{} - {}",
            self.code, self.text, position, self.description
        )
    }

    pub fn suggestions(&self) -> &[String] {
        match &self.kind {
            IssueKind::Spelling { suggestions } => suggestions,
            _ => &[],
        }
    }

    pub fn severity(&self) -> Option<f64> {
        match self.kind {
            IssueKind::Style { severity } => Some(severity),
            _ => None,
        }
    }
}

/// Result of one analysis call. Built once by the analyzer and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    original_text: String,
    language: String,
    spelling: Vec<Issue>,
    grammar: Vec<Issue>,
    punctuation: Vec<Issue>,
    style: Vec<Issue>,
    metrics: Metrics,
    total_issues: usize,
    quality_score: u32,
}

impl Report {
    pub fn new(
        original_text: impl Into<String>,
        language: impl Into<String>,
        spelling: Vec<Issue>,
        grammar: Vec<Issue>,
        punctuation: Vec<Issue>,
        style: Vec<Issue>,
        metrics: Metrics,
    ) -> Self {
        let total_issues = spelling.len() + grammar.len() + punctuation.len() + style.len();
        Self {
            original_text: original_text.into(),
            language: language.into(),
            spelling,
            grammar,
            punctuation,
            style,
            metrics,
            total_issues,
            quality_score: quality_score(total_issues),
        }
    }

    /// Report for text with nothing to analyse.
    pub fn empty(original_text: impl Into<String>, language: impl Into<String>) -> Self {
        Self::new(
            original_text,
            language,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Metrics::default(),
        )
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn spelling(&self) -> &[Issue] {
        &self.spelling
    }

    pub fn grammar(&self) -> &[Issue] {
        &self.grammar
    }

    pub fn punctuation(&self) -> &[Issue] {
        &self.punctuation
    }

    pub fn style(&self) -> &[Issue] {
        &self.style
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn total_issues(&self) -> usize {
        self.total_issues
    }

    pub fn quality_score(&self) -> u32 {
        self.quality_score
    }
}

/// 5 points off per issue, never more than 70 off, never below 30.
pub fn quality_score(total_issues: usize) -> u32 {
    let penalty = total_issues.saturating_mul(5).min(70) as u32;
    (100 - penalty).max(30)
}
