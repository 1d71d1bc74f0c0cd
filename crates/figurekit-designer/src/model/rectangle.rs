use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};

use figurekit_core::Point;

use super::{points_within, within, FigureGeometry};

/// Axis-aligned rectangle.
///
/// `anchor` is the corner the user pressed on; dragging past it in either
/// direction moves `top_left` so the size stays non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleGeometry {
    anchor: Point,
    top_left: Point,
    width: f64,
    height: f64,
}

impl RectangleGeometry {
    /// Zero-size rectangle anchored at `anchor`
    pub fn at(anchor: Point) -> Self {
        Self {
            anchor,
            top_left: anchor,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Rectangle anchored at `(x, y)` spanning `width` by `height`.
    ///
    /// Negative sizes extend to the left / upward.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let anchor = Point::new(x, y);
        Self {
            anchor,
            top_left: Point::new(x.min(x + width), y.min(y + height)),
            width: width.abs(),
            height: height.abs(),
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        points_within(self.top_left, other.top_left, threshold)
            && within(self.width, other.width, threshold)
            && within(self.height, other.height, threshold)
    }
}

impl FigureGeometry for RectangleGeometry {
    fn center(&self) -> Point {
        self.top_left.offset(self.width / 2.0, self.height / 2.0)
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn top_left(&self) -> Point {
        self.top_left
    }

    fn set_last_point(&mut self, p: Point) {
        self.top_left = Point::new(self.anchor.x.min(p.x), self.anchor.y.min(p.y));
        self.width = (p.x - self.anchor.x).abs();
        self.height = (p.y - self.anchor.y).abs();
    }

    fn outline(&self) -> Path {
        let bottom_right = self.bottom_right();
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(
                point(self.top_left.x as f32, self.top_left.y as f32),
                point(bottom_right.x as f32, bottom_right.y as f32),
            ),
            Winding::Positive,
        );
        builder.build()
    }
}
