//! # FigureKit Designer
//!
//! The figure model of a 2-D vector drawing editor: styled shapes the user
//! draws by dragging, selects, copies and compares.
//!
//! ## Core Components
//!
//! - **Style**: fill/edge colors, line type and width, with the invariant
//!   that a figure always has at least one of fill or edge
//! - **Geometry**: rectangles, circles, ellipses and regular polygons behind
//!   the [`FigureGeometry`] trait
//! - **Figure**: geometry + style + selection + transform, with deep clone,
//!   tolerance-based equality and a consistent hash
//! - **Selection**: the dashed overlay framing a selected figure
//! - **Factory**: per-variant instance numbering and configured defaults
//!
//! ## Usage
//!
//! ```rust
//! use figurekit_core::{Color, Point};
//! use figurekit_designer::{FigureFactory, StyleState};
//!
//! let mut factory = FigureFactory::new();
//! let mut rect = factory.rectangle(StyleState::filled(Color::RED), 10.0, 10.0);
//! rect.set_last_point(Point::new(30.0, 40.0));
//! assert_eq!(rect.width(), 20.0);
//! assert_eq!(rect.to_string(), "Rectangle 0");
//! ```

pub mod error;
pub mod factory;
pub mod figure;
pub mod logging;
pub mod model;
pub mod selection;
pub mod style;
pub mod transform;

pub use error::{FigureError, FigureResult};
pub use factory::FigureFactory;
pub use figure::Figure;
pub use model::{
    CircleGeometry, EllipseGeometry, FigureGeometry, FigureKind, Geometry, PolygonGeometry,
    RectangleGeometry, THRESHOLD,
};
pub use selection::{SelectionOverlay, SELECTION_DASH};
pub use style::{ShapePaint, StyleState, DASH_PATTERN};
pub use transform::FigureTransform;
