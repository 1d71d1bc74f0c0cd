//! Figure construction and instance numbering.
//!
//! [`FigureFactory`] is the context every figure is created through. It
//! keeps one monotonic counter per variant (so the third rectangle is
//! `Rectangle 2` whatever else was drawn in between), the optional parent
//! span figure spans are nested under, and shape defaults from
//! configuration.

use std::collections::HashMap;

use figurekit_core::Point;
use figurekit_settings::{Config, StyleDefaults};
use tracing::{debug, Span};

use crate::error::FigureResult;
use crate::figure::Figure;
use crate::logging::figure_span;
use crate::model::{
    CircleGeometry, EllipseGeometry, FigureKind, Geometry, PolygonGeometry, RectangleGeometry,
};
use crate::style::StyleState;

#[derive(Debug, Clone)]
pub struct FigureFactory {
    counters: HashMap<FigureKind, u32>,
    parent: Option<Span>,
    polygon_sides: u32,
    style_defaults: StyleDefaults,
}

impl Default for FigureFactory {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl FigureFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory using the style and shape defaults of `config`
    pub fn from_config(config: &Config) -> Self {
        Self {
            counters: HashMap::new(),
            parent: None,
            polygon_sides: config.shapes.polygon_sides.max(3),
            style_defaults: config.style.clone(),
        }
    }

    /// Nest the spans of figures created from now on under `parent`
    pub fn with_parent(mut self, parent: Span) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Side count used by [`FigureFactory::polygon`]
    pub fn polygon_sides(&self) -> u32 {
        self.polygon_sides
    }

    /// The configured default style
    pub fn default_style(&self) -> FigureResult<StyleState> {
        let d = &self.style_defaults;
        StyleState::new(d.fill, d.edge, d.line_type, d.line_width)
    }

    /// Take the next instance number for `kind`
    pub fn next_instance(&mut self, kind: FigureKind) -> u32 {
        let counter = self.counters.entry(kind).or_insert(0);
        let instance = *counter;
        *counter += 1;
        instance
    }

    /// Number of figures of `kind` created since the last reset
    pub fn instances_created(&self, kind: FigureKind) -> u32 {
        self.counters.get(&kind).copied().unwrap_or(0)
    }

    pub fn reset_counters(&mut self) {
        self.counters.clear();
    }

    /// Create a figure around an existing geometry
    pub fn create(&mut self, style: StyleState, geometry: Geometry) -> Figure {
        let kind = geometry.kind();
        let instance = self.next_instance(kind);
        let span = figure_span(self.parent.as_ref(), kind, instance);
        debug!(parent: &span, "created {} {}", kind, instance);
        Figure::new(style, geometry, instance, span)
    }

    /// Zero-size rectangle at `(x, y)`, to be stretched with `set_last_point`
    pub fn rectangle(&mut self, style: StyleState, x: f64, y: f64) -> Figure {
        self.create(style, RectangleGeometry::at(Point::new(x, y)).into())
    }

    pub fn rectangle_with_size(
        &mut self,
        style: StyleState,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Figure {
        self.create(style, RectangleGeometry::new(x, y, width, height).into())
    }

    /// Zero-radius circle centered at `(x, y)`
    pub fn circle(&mut self, style: StyleState, x: f64, y: f64) -> Figure {
        self.create(style, CircleGeometry::at(Point::new(x, y)).into())
    }

    pub fn circle_with_radius(&mut self, style: StyleState, x: f64, y: f64, radius: f64) -> Figure {
        self.create(style, CircleGeometry::new(Point::new(x, y), radius).into())
    }

    /// Zero-size ellipse centered at `(x, y)`
    pub fn ellipse(&mut self, style: StyleState, x: f64, y: f64) -> Figure {
        self.create(style, EllipseGeometry::at(Point::new(x, y)).into())
    }

    pub fn ellipse_with_radii(
        &mut self,
        style: StyleState,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
    ) -> Figure {
        self.create(
            style,
            EllipseGeometry::new(Point::new(x, y), radius_x, radius_y).into(),
        )
    }

    /// Zero-radius regular polygon with the configured side count
    pub fn polygon(&mut self, style: StyleState, x: f64, y: f64) -> Figure {
        let sides = self.polygon_sides;
        self.create(style, PolygonGeometry::at(Point::new(x, y), sides).into())
    }

    pub fn polygon_with_radius(
        &mut self,
        style: StyleState,
        x: f64,
        y: f64,
        radius: f64,
        sides: u32,
    ) -> Figure {
        self.create(
            style,
            PolygonGeometry::new(Point::new(x, y), radius, sides).into(),
        )
    }
}
