use lyon::math::point;
use lyon::path::{Path, Winding};

use figurekit_core::Point;

use super::{points_within, within, FigureGeometry};

#[derive(Debug, Clone, PartialEq)]
pub struct CircleGeometry {
    center: Point,
    radius: f64,
}

impl CircleGeometry {
    pub fn at(center: Point) -> Self {
        Self {
            center,
            radius: 0.0,
        }
    }

    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        points_within(self.center, other.center, threshold)
            && within(self.radius, other.radius, threshold)
    }
}

impl FigureGeometry for CircleGeometry {
    fn center(&self) -> Point {
        self.center
    }

    fn width(&self) -> f64 {
        2.0 * self.radius
    }

    fn height(&self) -> f64 {
        2.0 * self.radius
    }

    fn top_left(&self) -> Point {
        self.center.offset(-self.radius, -self.radius)
    }

    fn set_last_point(&mut self, p: Point) {
        self.radius = self.center.distance_to(&p);
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            point(self.center.x as f32, self.center.y as f32),
            self.radius as f32,
            Winding::Positive,
        );
        builder.build()
    }
}
