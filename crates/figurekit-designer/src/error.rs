//! Error types for figure operations.

use crate::model::FigureKind;
use figurekit_core::ColorError;
use thiserror::Error;

/// Errors raised by figure construction and mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    /// The style would break the fill/edge invariant, or a value given to
    /// a style setter is not usable (not a color, non-finite width).
    #[error("Invalid style: {reason}")]
    InvalidStyle {
        /// Why the style was rejected.
        reason: String,
    },

    /// Copy-construction from a figure of another variant
    #[error("Mismatched figure variant: expected {expected}, found {found}")]
    MismatchedVariant {
        /// The variant being constructed.
        expected: FigureKind,
        /// The variant of the source figure.
        found: FigureKind,
    },
}

impl FigureError {
    /// Shorthand for [`FigureError::InvalidStyle`]
    pub fn invalid_style(reason: impl Into<String>) -> Self {
        Self::InvalidStyle {
            reason: reason.into(),
        }
    }
}

impl From<ColorError> for FigureError {
    fn from(err: ColorError) -> Self {
        Self::invalid_style(err.to_string())
    }
}

/// Result type alias for figure operations.
pub type FigureResult<T> = Result<T, FigureError>;
