//! Error types for color operations.
//!
//! Only two things can actually fail in this pipeline: constructing a
//! triple from partial input, and asking the D65-only OKLCh adapter to
//! work under a different white point. Degenerate numeric inputs
//! (lightness at the extremes, near-zero chromaticity denominators) are
//! handled by explicit threshold branches at the call site and are never
//! surfaced as errors. Out-of-gamut results are valid outputs, not errors.

use thiserror::Error;

/// Color pipeline error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ColorError {
    /// A required triple component was not supplied at construction.
    ///
    /// Fails fast and is not recoverable; the caller assembled a color
    /// from partial input.
    #[error("missing color component: {field}")]
    MissingComponent {
        /// Name of the absent component.
        field: &'static str,
    },

    /// The adapter only supports a D65 white point.
    ///
    /// OKLab's published matrices are D65-only; supporting another white
    /// point means swapping both matrices consistently, which this core
    /// rejects rather than silently mishandles.
    #[error("unsupported white point ({wx}, {wy}) for {space}: D65 required")]
    UnsupportedWhitePoint {
        /// Adapter that rejected the model.
        space: &'static str,
        /// White point x chromaticity.
        wx: f64,
        /// White point y chromaticity.
        wy: f64,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
