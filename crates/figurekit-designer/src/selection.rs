//! Selection overlay
//!
//! While a figure is selected it carries a [`SelectionOverlay`]: the dashed
//! gray frame drawn around its bounds. The overlay is derived data, rebuilt
//! from the geometry whenever the figure is selected or reshaped.

use figurekit_core::{Color, Point};
use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};

use crate::model::FigureGeometry;
use crate::style::{round_stroke, ShapePaint};

/// Dash pattern (on, off) of the selection frame
pub const SELECTION_DASH: [f32; 2] = [25.0, 10.0];

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOverlay {
    top_left: Point,
    width: f64,
    height: f64,
}

impl SelectionOverlay {
    /// Frame the current bounds of `geometry`
    pub fn around<G: FigureGeometry + ?Sized>(geometry: &G) -> Self {
        Self {
            top_left: geometry.top_left(),
            width: geometry.width(),
            height: geometry.height(),
        }
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bottom_right(&self) -> Point {
        self.top_left.offset(self.width, self.height)
    }

    /// Gray dashed stroke over a transparent fill
    pub fn paint(&self) -> ShapePaint {
        ShapePaint {
            fill: Color::TRANSPARENT,
            stroke: Some(Color::GRAY),
            dash_array: SELECTION_DASH.to_vec(),
            stroke_options: round_stroke(1.0),
        }
    }

    pub fn outline(&self) -> Path {
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
