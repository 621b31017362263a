//! Error types for coordinate transformations.

use thiserror::Error;

/// Result type alias using ProjectionError.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors from the iterative transformation steps.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Iteration did not converge while computing {0}")]
    NoConvergence(&'static str),
}
