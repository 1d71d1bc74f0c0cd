//! # FigureKit Core
//!
//! Value types shared by every FigureKit crate.
//! Provides colors, points and line types used by the figure model
//! and by the settings layer.

pub mod color;
pub mod error;
pub mod line_type;
pub mod point;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use line_type::LineType;
pub use point::Point;
