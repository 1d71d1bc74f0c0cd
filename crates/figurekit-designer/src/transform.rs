//! Transform applied to a figure as a whole.
//!
//! Geometry queries on a figure are in local coordinates; the transform is
//! what a renderer applies on top (scale and rotation about the figure
//! center, then translation). It is carried over by clone and copy.

use figurekit_core::Point;
use lyon::math::{point, vector, Angle, Transform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation in degrees
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for FigureTransform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl FigureTransform {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Build the lyon transform, scaling and rotating about `pivot`
    pub fn to_lyon(&self, pivot: Point) -> Transform {
        Transform::translation(-pivot.x as f32, -pivot.y as f32)
            .then_scale(self.scale_x as f32, self.scale_y as f32)
            .then_rotate(Angle::radians(self.rotation.to_radians() as f32))
            .then_translate(vector(
                (pivot.x + self.translate_x) as f32,
                (pivot.y + self.translate_y) as f32,
            ))
    }

    /// Map a local point through this transform
    pub fn apply(&self, p: Point, pivot: Point) -> Point {
        let mapped = self
            .to_lyon(pivot)
            .transform_point(point(p.x as f32, p.y as f32));
        Point::new(mapped.x as f64, mapped.y as f64)
    }
}
