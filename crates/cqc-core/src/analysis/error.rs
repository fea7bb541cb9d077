use crate::core::io::confidence::ConfidenceError;
use crate::core::io::loader::LoadError;
use crate::core::surface::SurfaceError;
use thiserror::Error;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Failure modes of the metric engine.
///
/// Three kinds exist: a missing input artifact (carried inside the loader and
/// confidence errors), an unmet metric precondition
/// ([`AnalysisError::InsufficientData`]), and a failing external capability
/// (parse or surface errors). Every failure is local to one metric call;
/// nothing is retried and partial results are never returned.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("insufficient data for {metric}: {reason}")]
    InsufficientData {
        metric: &'static str,
        reason: String,
    },

    #[error("confidence matrix is required for {0} analysis")]
    ConfidenceRequired(crate::analysis::prediction::PredictionType),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Confidence(#[from] ConfidenceError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl AnalysisError {
    pub(crate) fn insufficient(metric: &'static str, reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            metric,
            reason: reason.into(),
        }
    }
}
