//! Runs the four analysis passes concurrently and joins them into a
//! [`Report`].

use crate::checker::dictionary::DictionaryStore;
use crate::checker::SpellChecker;
use crate::config::Config;
use crate::detect::{grammar, punctuation, style};
use crate::error::{AnalysisError, AnalysisResult};
use crate::{words, Issue, Metrics, Report, SUPPORTED_LANGUAGE};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error};

/// A text-only analysis pass.
pub type Pass = fn(&str) -> Vec<Issue>;

/// The heuristic passes run next to the spell checker.
#[derive(Clone, Copy)]
pub struct Passes {
    pub grammar: Pass,
    pub punctuation: Pass,
    pub style: Pass,
}

impl Default for Passes {
    fn default() -> Self {
        Self {
            grammar: grammar::check,
            punctuation: punctuation::check,
            style: style::check,
        }
    }
}

pub struct TextAnalyzer {
    checker: SpellChecker,
    passes: Passes,
    pool: RwLock<Option<ThreadPool>>,
}

impl TextAnalyzer {
    pub fn new(dictionary: Arc<DictionaryStore>, pool_size: usize) -> AnalysisResult<Self> {
        Self::with_passes(dictionary, pool_size, Passes::default())
    }

    pub fn with_passes(
        dictionary: Arc<DictionaryStore>,
        pool_size: usize,
        passes: Passes,
    ) -> AnalysisResult<Self> {
        if pool_size == 0 {
            return Err(AnalysisError::invalid_input("pool size must be at least 1"));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(pool_size)
            .thread_name(|i| format!("analysis-{}", i))
            .build()?;

        debug!(pool_size, dictionary_size = dictionary.size(), "analyzer started");

        Ok(Self {
            checker: SpellChecker::new(dictionary),
            passes,
            pool: RwLock::new(Some(pool)),
        })
    }

    /// Build the dictionary from the configured word lists and start the
    /// worker pool.
    pub fn from_config(config: &Config) -> AnalysisResult<Self> {
        let dictionary = words::load_dictionary(config);
        Self::new(Arc::new(dictionary), config.pool_size)
    }

    /// Analyse `text`, blocking until every pass has finished.
    ///
    /// Spelling, grammar, punctuation and style run on the worker pool while
    /// metrics are computed on the calling thread. If any pass fails the
    /// whole call fails and the other results are dropped.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), language = %language))]
    pub fn analyze(&self, text: &str, language: &str) -> AnalysisResult<Report> {
        if language != SUPPORTED_LANGUAGE {
            return Err(AnalysisError::invalid_input(format!(
                "unsupported language '{}', only '{}' is supported",
                language, SUPPORTED_LANGUAGE
            )));
        }

        // Held for the whole call so shutdown waits for in-flight work
        let guard = self.pool.read().unwrap_or_else(PoisonError::into_inner);
        let Some(pool) = guard.as_ref() else {
            return Err(AnalysisError::PoolUnavailable);
        };

        if text.trim().is_empty() {
            return Ok(Report::empty(text, language));
        }

        let checker = &self.checker;
        let passes = self.passes;

        let mut spelling = None;
        let mut grammar = None;
        let mut punctuation = None;
        let mut style = None;

        let metrics = pool.in_place_scope(|scope| {
            scope.spawn(|_| spelling = Some(run_task("spelling", || checker.check(text))));
            scope.spawn(|_| grammar = Some(run_task("grammar", || (passes.grammar)(text))));
            scope.spawn(|_| {
                punctuation = Some(run_task("punctuation", || (passes.punctuation)(text)))
            });
            scope.spawn(|_| style = Some(run_task("style", || (passes.style)(text))));

            Metrics::compute(text)
        });

        let report = Report::new(
            text,
            language,
            joined("spelling", spelling)?,
            joined("grammar", grammar)?,
            joined("punctuation", punctuation)?,
            joined("style", style)?,
            metrics,
        );

        debug!(
            total_issues = report.total_issues(),
            quality_score = report.quality_score(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Add a word to the shared dictionary; visible to every later call.
    pub fn add_word(&self, word: &str) -> bool {
        self.checker.dictionary().add_word(word)
    }

    pub fn dictionary_size(&self) -> usize {
        self.checker.dictionary().size()
    }

    pub fn dictionary(&self) -> &Arc<DictionaryStore> {
        self.checker.dictionary()
    }

    /// Stop the worker pool. Waits for running calls; later calls fail with
    /// [`AnalysisError::PoolUnavailable`]. Calling it again does nothing.
    pub fn shutdown(&self) {
        let mut guard = self.pool.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            debug!("analyzer pool shut down");
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.pool
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

fn run_task<T>(task: &'static str, f: impl FnOnce() -> T) -> AnalysisResult<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let cause = panic_message(payload.as_ref());
        error!(task, %cause, "analysis task failed");
        AnalysisError::TaskFailure { task, cause }
    })
}

fn joined(
    task: &'static str,
    slot: Option<AnalysisResult<Vec<Issue>>>,
) -> AnalysisResult<Vec<Issue>> {
    slot.unwrap_or_else(|| {
        Err(AnalysisError::TaskFailure {
            task,
            cause: "task did not complete".to_string(),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
