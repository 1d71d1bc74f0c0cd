use lyon::math::point;
use lyon::path::Path;

use figurekit_core::Point;

use super::{points_within, within, FigureGeometry};

/// Regular polygon inscribed in a circle of `radius` around `center`.
///
/// `angle` (radians) is the direction of the first vertex; dragging points
/// that vertex at the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonGeometry {
    center: Point,
    radius: f64,
    sides: u32,
    angle: f64,
}

impl PolygonGeometry {
    pub fn at(center: Point, sides: u32) -> Self {
        Self::new(center, 0.0, sides)
    }

    /// At least three sides are kept.
    pub fn new(center: Point, radius: f64, sides: u32) -> Self {
        Self {
            center,
            radius: radius.abs(),
            sides: sides.max(3),
            angle: 0.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn vertices(&self) -> Vec<Point> {
        (0..self.sides)
            .map(|i| {
                let theta =
                    self.angle + 2.0 * std::f64::consts::PI * (i as f64) / (self.sides as f64);
                self.center
                    .offset(self.radius * theta.cos(), self.radius * theta.sin())
            })
            .collect()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        self.vertices().iter().fold(
            (self.center.x, self.center.y, self.center.x, self.center.y),
            |(min_x, min_y, max_x, max_y), v| {
                (min_x.min(v.x), min_y.min(v.y), max_x.max(v.x), max_y.max(v.y))
            },
        )
    }

    /// Equal side count, center and radius within `threshold`, and vertex
    /// sets no further than `threshold` apart.
    ///
    /// Orientation is compared modulo one vertex step, so a polygon turned
    /// by a multiple of `2π / sides` equals itself.
    pub fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        if self.sides != other.sides
            || !points_within(self.center, other.center, threshold)
            || !within(self.radius, other.radius, threshold)
        {
            return false;
        }
        let step = std::f64::consts::TAU / self.sides as f64;
        let offset = (self.angle - other.angle).rem_euclid(step);
        let offset = offset.min(step - offset);
        let chord = 2.0 * self.radius.max(other.radius) * (offset / 2.0).sin();
        chord <= threshold
    }
}

impl FigureGeometry for PolygonGeometry {
    fn center(&self) -> Point {
        self.center
    }

    fn width(&self) -> f64 {
        let (min_x, _, max_x, _) = self.bounds();
        max_x - min_x
    }

    fn height(&self) -> f64 {
        let (_, min_y, _, max_y) = self.bounds();
        max_y - min_y
    }

    fn top_left(&self) -> Point {
        let (min_x, min_y, _, _) = self.bounds();
        Point::new(min_x, min_y)
    }

    fn set_last_point(&mut self, p: Point) {
        self.radius = self.center.distance_to(&p);
        if self.radius > 0.0 {
            self.angle = (p.y - self.center.y).atan2(p.x - self.center.x);
        }
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        for (i, v) in self.vertices().iter().enumerate() {
            let p = point(v.x as f32, v.y as f32);
            if i == 0 {
                builder.begin(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.close();
        builder.build()
    }
}
