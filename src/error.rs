use thiserror::Error;

/// Errors returned by the analysis engine.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The request was rejected before any work was scheduled.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// One of the concurrent analysis passes failed; all other results of the
    /// call were discarded.
    #[error("{task} analysis failed: {cause}")]
    TaskFailure { task: &'static str, cause: String },

    /// The worker pool has been shut down.
    #[error("worker pool is shut down")]
    PoolUnavailable,

    #[error("failed to start worker pool: {0}")]
    PoolInit(#[from] rayon::ThreadPoolBuildError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
