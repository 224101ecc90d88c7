//! Error types for evaluation.

use picker_color::ColorError;
use thiserror::Error;

/// Error type for picker evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The color pipeline rejected the configuration.
    #[error("color pipeline error: {0}")]
    Color(#[from] ColorError),
}

/// Result type for picker evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
