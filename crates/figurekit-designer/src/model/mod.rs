use lyon::path::Path;
use std::fmt;

use figurekit_core::Point;

mod circle;
mod ellipse;
mod polygon;
mod rectangle;

pub use circle::CircleGeometry;
pub use ellipse::EllipseGeometry;
pub use polygon::PolygonGeometry;
pub use rectangle::RectangleGeometry;

/// Absolute tolerance used when comparing geometric scalars
pub const THRESHOLD: f64 = 1e-6;

pub(crate) fn within(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() <= threshold
}

pub(crate) fn points_within(a: Point, b: Point, threshold: f64) -> bool {
    within(a.x, b.x, threshold) && within(a.y, b.y, threshold)
}

/// Geometry queries and the interactive resize shared by every figure variant.
///
/// `width` and `height` are never negative and
/// `bottom_right() == top_left() + (width(), height())`.
pub trait FigureGeometry {
    fn center(&self) -> Point;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn top_left(&self) -> Point;

    fn bottom_right(&self) -> Point {
        self.top_left().offset(self.width(), self.height())
    }

    /// Stretch the shape from its anchor toward `p` (used while dragging)
    fn set_last_point(&mut self, p: Point);

    /// Outline in local coordinates
    fn outline(&self) -> Path;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Rectangle,
    Circle,
    Ellipse,
    Polygon,
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Circle => write!(f, "Circle"),
            Self::Ellipse => write!(f, "Ellipse"),
            Self::Polygon => write!(f, "Polygon"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Rectangle(RectangleGeometry),
    Circle(CircleGeometry),
    Ellipse(EllipseGeometry),
    Polygon(PolygonGeometry),
}

impl FigureGeometry for Geometry {
    fn center(&self) -> Point {
        match self {
            Geometry::Rectangle(g) => g.center(),
            Geometry::Circle(g) => g.center(),
            Geometry::Ellipse(g) => g.center(),
            Geometry::Polygon(g) => g.center(),
        }
    }

    fn width(&self) -> f64 {
        match self {
            Geometry::Rectangle(g) => g.width(),
            Geometry::Circle(g) => g.width(),
            Geometry::Ellipse(g) => g.width(),
            Geometry::Polygon(g) => g.width(),
        }
    }

    fn height(&self) -> f64 {
        match self {
            Geometry::Rectangle(g) => g.height(),
            Geometry::Circle(g) => g.height(),
            Geometry::Ellipse(g) => g.height(),
            Geometry::Polygon(g) => g.height(),
        }
    }

    fn top_left(&self) -> Point {
        match self {
            Geometry::Rectangle(g) => g.top_left(),
            Geometry::Circle(g) => g.top_left(),
            Geometry::Ellipse(g) => g.top_left(),
            Geometry::Polygon(g) => g.top_left(),
        }
    }

    fn bottom_right(&self) -> Point {
        match self {
            Geometry::Rectangle(g) => g.bottom_right(),
            Geometry::Circle(g) => g.bottom_right(),
            Geometry::Ellipse(g) => g.bottom_right(),
            Geometry::Polygon(g) => g.bottom_right(),
        }
    }

    fn set_last_point(&mut self, p: Point) {
        match self {
            Geometry::Rectangle(g) => g.set_last_point(p),
            Geometry::Circle(g) => g.set_last_point(p),
            Geometry::Ellipse(g) => g.set_last_point(p),
            Geometry::Polygon(g) => g.set_last_point(p),
        }
    }

    fn outline(&self) -> Path {
        match self {
            Geometry::Rectangle(g) => g.outline(),
            Geometry::Circle(g) => g.outline(),
            Geometry::Ellipse(g) => g.outline(),
            Geometry::Polygon(g) => g.outline(),
        }
    }
}

impl Geometry {
    pub fn kind(&self) -> FigureKind {
        match self {
            Geometry::Rectangle(_) => FigureKind::Rectangle,
            Geometry::Circle(_) => FigureKind::Circle,
            Geometry::Ellipse(_) => FigureKind::Ellipse,
            Geometry::Polygon(_) => FigureKind::Polygon,
        }
    }

    /// Replace the geometry with a zero-size shape of the same variant at `(x, y)`.
    ///
    /// A polygon keeps its side count.
    pub fn reset_at(&mut self, x: f64, y: f64) {
        let anchor = Point::new(x, y);
        let reset = match &*self {
            Geometry::Rectangle(_) => Geometry::Rectangle(RectangleGeometry::at(anchor)),
            Geometry::Circle(_) => Geometry::Circle(CircleGeometry::at(anchor)),
            Geometry::Ellipse(_) => Geometry::Ellipse(EllipseGeometry::at(anchor)),
            Geometry::Polygon(g) => Geometry::Polygon(PolygonGeometry::at(anchor, g.sides())),
        };
        *self = reset;
    }

    /// Variant-level geometric equality: every compared scalar within
    /// `threshold`. Different variants are never equal.
    pub fn approx_eq(&self, other: &Geometry, threshold: f64) -> bool {
        match (self, other) {
            (Geometry::Rectangle(a), Geometry::Rectangle(b)) => a.approx_eq(b, threshold),
            (Geometry::Circle(a), Geometry::Circle(b)) => a.approx_eq(b, threshold),
            (Geometry::Ellipse(a), Geometry::Ellipse(b)) => a.approx_eq(b, threshold),
            (Geometry::Polygon(a), Geometry::Polygon(b)) => a.approx_eq(b, threshold),
            _ => false,
        }
    }
}

impl From<RectangleGeometry> for Geometry {
    fn from(g: RectangleGeometry) -> Self {
        Geometry::Rectangle(g)
    }
}

impl From<CircleGeometry> for Geometry {
    fn from(g: CircleGeometry) -> Self {
        Geometry::Circle(g)
    }
}

impl From<EllipseGeometry> for Geometry {
    fn from(g: EllipseGeometry) -> Self {
        Geometry::Ellipse(g)
    }
}

impl From<PolygonGeometry> for Geometry {
    fn from(g: PolygonGeometry) -> Self {
        Geometry::Polygon(g)
    }
}
