//! Error handling for FigureKit core types
//!
//! Color parsing and validation errors. Uses `thiserror` like the rest
//! of the workspace.

use thiserror::Error;

/// Color error type
///
/// Raised when a textual or floating-point color cannot be turned into
/// a [`crate::Color`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Malformed hex notation
    #[error("Invalid hex color '{value}'")]
    InvalidHex {
        /// The rejected input.
        value: String,
    },

    /// Not a known color name
    #[error("Unknown color name '{name}'")]
    UnknownName {
        /// The rejected name.
        name: String,
    },

    /// A floating-point channel outside `[0, 1]` (or not finite)
    #[error("Color component {component} out of range: {value}")]
    ComponentOutOfRange {
        /// The channel name (`red`, `green`, `blue` or `alpha`).
        component: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type alias for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
