//! Figures: a geometry variant with its style, selection state and transform.
//!
//! A [`Figure`] owns everything it refers to, so a clone is a fully
//! independent snapshot suitable for undo/redo history.
//!
//! Equality has two tiers:
//! - [`Figure::same_geometry`] compares geometry only, within
//!   [`THRESHOLD`], ignoring instance number and selection;
//! - `==` additionally requires exactly equal styles.
//!
//! Figures of different variants are never equal. Hashing covers the
//! variant and the style only, so equal figures always hash alike.

use std::fmt;
use std::hash::{Hash, Hasher};

use figurekit_core::{Color, LineType, Point};
use lyon::path::Path;
use tracing::{error, trace, warn, Span};

use crate::error::{FigureError, FigureResult};
use crate::model::{FigureGeometry, FigureKind, Geometry, THRESHOLD};
use crate::selection::SelectionOverlay;
use crate::style::{ShapePaint, StyleState};
use crate::transform::FigureTransform;

#[derive(Debug)]
pub struct Figure {
    style: StyleState,
    geometry: Geometry,
    transform: FigureTransform,
    selected: bool,
    overlay: Option<SelectionOverlay>,
    instance_number: u32,
    span: Span,
}

impl Figure {
    pub(crate) fn new(
        style: StyleState,
        geometry: Geometry,
        instance_number: u32,
        span: Span,
    ) -> Self {
        Self {
            style,
            geometry,
            transform: FigureTransform::default(),
            selected: false,
            overlay: None,
            instance_number,
            span,
        }
    }

    /// Copy `other` as a figure of variant `kind`.
    ///
    /// Style, instance number, transform and selection are carried over and
    /// the geometry is a fresh copy.
    pub fn copy_as(kind: FigureKind, other: &Figure) -> FigureResult<Figure> {
        if other.kind() != kind {
            let err = FigureError::MismatchedVariant {
                expected: kind,
                found: other.kind(),
            };
            error!(parent: &other.span, "{}", err);
            return Err(err);
        }
        Ok(other.clone())
    }

    pub fn kind(&self) -> FigureKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn instance_number(&self) -> u32 {
        self.instance_number
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    // ---------------------------------------------------------------------
    // Style
    // ---------------------------------------------------------------------

    pub fn has_fill_color(&self) -> bool {
        self.style.has_fill_color()
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.style.fill_color()
    }

    pub fn has_edge_color(&self) -> bool {
        self.style.has_edge_color()
    }

    pub fn edge_color(&self) -> Option<Color> {
        self.style.edge_color()
    }

    pub fn line_type(&self) -> LineType {
        self.style.line_type()
    }

    pub fn line_width(&self) -> f64 {
        self.style.line_width()
    }

    pub fn set_fill_color(&mut self, fill: Option<Color>) -> FigureResult<()> {
        self.span.in_scope(|| self.style.set_fill_color(fill))
    }

    pub fn set_edge_color(&mut self, edge: Option<Color>) -> FigureResult<()> {
        self.span.in_scope(|| self.style.set_edge_color(edge))
    }

    pub fn set_fill_color_str(&mut self, fill: &str) -> FigureResult<()> {
        self.span.in_scope(|| self.style.set_fill_color_str(fill))
    }

    pub fn set_edge_color_str(&mut self, edge: &str) -> FigureResult<()> {
        self.span.in_scope(|| self.style.set_edge_color_str(edge))
    }

    pub fn set_line_type(&mut self, line_type: LineType) {
        if !self.style.has_edge_color() && line_type != LineType::None {
            warn!(
                parent: &self.span,
                %line_type,
                "no edge color: line type stays None until an edge color is set"
            );
        }
        self.style.set_line_type(line_type);
    }

    pub fn set_line_width(&mut self, line_width: f64) -> FigureResult<()> {
        self.span.in_scope(|| self.style.set_line_width(line_width))
    }

    /// Write this figure's style into `target`; a missing target is a no-op.
    pub fn apply_style(&self, target: Option<&mut ShapePaint>) {
        match target {
            Some(paint) => self.style.apply_to(paint),
            None => warn!(parent: &self.span, "null paint target: abort"),
        }
    }

    /// Paint for this figure's outline
    pub fn paint(&self) -> ShapePaint {
        let mut paint = ShapePaint::default();
        self.apply_style(Some(&mut paint));
        paint
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    pub fn center(&self) -> Point {
        self.geometry.center()
    }

    pub fn width(&self) -> f64 {
        self.geometry.width()
    }

    pub fn height(&self) -> f64 {
        self.geometry.height()
    }

    pub fn top_left(&self) -> Point {
        self.geometry.top_left()
    }

    pub fn bottom_right(&self) -> Point {
        self.geometry.bottom_right()
    }

    /// Restart the shape as a zero-size figure anchored at `(x, y)`
    pub fn create_shape(&mut self, x: f64, y: f64) {
        self.geometry.reset_at(x, y);
        self.refresh_overlay();
    }

    /// Stretch the shape toward `p` while the user drags
    pub fn set_last_point(&mut self, p: Point) {
        self.geometry.set_last_point(p);
        self.refresh_overlay();
    }

    /// Outline in local coordinates
    pub fn outline(&self) -> Path {
        self.geometry.outline()
    }

    /// Outline with the figure transform applied about the center
    pub fn transformed_outline(&self) -> Path {
        let path = self.geometry.outline();
        if self.transform.is_identity() {
            return path;
        }
        path.transformed(&self.transform.to_lyon(self.center()))
    }

    // ---------------------------------------------------------------------
    // Transform
    // ---------------------------------------------------------------------

    pub fn transform(&self) -> FigureTransform {
        self.transform
    }

    pub fn set_translation(&mut self, dx: f64, dy: f64) {
        self.transform.translate_x = dx;
        self.transform.translate_y = dy;
    }

    /// Rotation in degrees
    pub fn set_rotation(&mut self, degrees: f64) {
        self.transform.rotation = degrees;
    }

    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        self.transform.scale_x = sx;
        self.transform.scale_y = sy;
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn selection_overlay(&self) -> Option<&SelectionOverlay> {
        self.overlay.as_ref()
    }

    pub fn set_selected(&mut self, selected: bool) {
        trace!(parent: &self.span, selected, "set selected");
        self.selected = selected;
        self.overlay = selected.then(|| SelectionOverlay::around(&self.geometry));
    }

    fn refresh_overlay(&mut self) {
        if self.selected {
            self.overlay = Some(SelectionOverlay::around(&self.geometry));
        }
    }

    // ---------------------------------------------------------------------
    // Equality
    // ---------------------------------------------------------------------

    /// Geometric equality within [`THRESHOLD`], regardless of style
    pub fn same_geometry(&self, other: &Figure) -> bool {
        self.geometry.approx_eq(&other.geometry, THRESHOLD)
    }
}

impl Clone for Figure {
    fn clone(&self) -> Self {
        let mut copy = Self {
            style: self.style.clone(),
            geometry: self.geometry.clone(),
            transform: self.transform,
            selected: false,
            overlay: None,
            instance_number: self.instance_number,
            span: self.span.clone(),
        };
        copy.set_selected(self.selected);
        copy
    }
}

impl PartialEq for Figure {
    fn eq(&self, other: &Self) -> bool {
        self.same_geometry(other) && self.style == other.style
    }
}

impl Hash for Figure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.style.hash(state);
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.instance_number)
    }
}
