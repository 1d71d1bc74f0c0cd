use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};

use figurekit_core::Point;

use super::{points_within, within, FigureGeometry};

/// Axis-aligned ellipse grown from its center
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseGeometry {
    center: Point,
    radius_x: f64,
    radius_y: f64,
}

impl EllipseGeometry {
    pub fn at(center: Point) -> Self {
        Self {
            center,
            radius_x: 0.0,
            radius_y: 0.0,
        }
    }

    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x: radius_x.abs(),
            radius_y: radius_y.abs(),
        }
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    pub fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        points_within(self.center, other.center, threshold)
            && within(self.radius_x, other.radius_x, threshold)
            && within(self.radius_y, other.radius_y, threshold)
    }
}

impl FigureGeometry for EllipseGeometry {
    fn center(&self) -> Point {
        self.center
    }

    fn width(&self) -> f64 {
        2.0 * self.radius_x
    }

    fn height(&self) -> f64 {
        2.0 * self.radius_y
    }

    fn top_left(&self) -> Point {
        self.center.offset(-self.radius_x, -self.radius_y)
    }

    fn set_last_point(&mut self, p: Point) {
        self.radius_x = (p.x - self.center.x).abs();
        self.radius_y = (p.y - self.center.y).abs();
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(self.center.x as f32, self.center.y as f32),
            vector(self.radius_x as f32, self.radius_y as f32),
            Angle::radians(0.0),
            Winding::Positive,
        );
        builder.build()
    }
}
