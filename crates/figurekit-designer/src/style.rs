//! Figure styling
//!
//! [`StyleState`] bundles the fill color, edge color, line type and line
//! width of a figure. A style always has at least one of the two colors.
//! Without an edge color the observed line type is [`LineType::None`] and
//! the observed line width is `0`; the requested stroke is kept so that
//! setting an edge color again restores it.
//!
//! [`ShapePaint`] is the paint description a renderer consumes. A style is
//! written into one with [`StyleState::apply_to`].

use crate::error::{FigureError, FigureResult};
use figurekit_core::{Color, LineType};
use lyon::tessellation::{LineCap, LineJoin, StrokeOptions};
use std::hash::{Hash, Hasher};

/// Dash pattern (on, off) used for [`LineType::Dashed`] edges
pub const DASH_PATTERN: [f32; 2] = [30.0, 10.0];

/// Paint applied to a drawable shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePaint {
    pub fill: Color,
    pub stroke: Option<Color>,
    pub dash_array: Vec<f32>,
    pub stroke_options: StrokeOptions,
}

impl Default for ShapePaint {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: None,
            dash_array: Vec::new(),
            stroke_options: StrokeOptions::default(),
        }
    }
}

/// Round joins and caps at the given width
pub(crate) fn round_stroke(line_width: f64) -> StrokeOptions {
    StrokeOptions::default()
        .with_line_join(LineJoin::Round)
        .with_line_cap(LineCap::Round)
        .with_line_width(line_width as f32)
}

#[derive(Debug, Clone)]
pub struct StyleState {
    fill: Option<Color>,
    edge: Option<Color>,
    line_type: LineType,
    line_width: f64,
}

impl StyleState {
    /// Build a style, rejecting a style with neither fill nor edge color.
    ///
    /// The line width is stored as its absolute value.
    pub fn new(
        fill: Option<Color>,
        edge: Option<Color>,
        line_type: LineType,
        line_width: f64,
    ) -> FigureResult<Self> {
        if fill.is_none() && edge.is_none() {
            let err = FigureError::invalid_style("both fill & edge are empty");
            tracing::error!("{}", err);
            return Err(err);
        }
        let line_width = checked_width(line_width).inspect_err(|e| tracing::error!("{}", e))?;

        Ok(Self {
            fill,
            edge,
            line_type,
            line_width,
        })
    }

    /// Filled style without an edge
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            edge: None,
            line_type: LineType::None,
            line_width: 0.0,
        }
    }

    pub fn has_fill_color(&self) -> bool {
        self.fill.is_some()
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill
    }

    pub fn has_edge_color(&self) -> bool {
        self.edge.is_some()
    }

    pub fn edge_color(&self) -> Option<Color> {
        self.edge
    }

    /// Observed line type: [`LineType::None`] without an edge color
    pub fn line_type(&self) -> LineType {
        if self.edge.is_some() {
            self.line_type
        } else {
            LineType::None
        }
    }

    /// Observed line width: `0` without an edge color
    pub fn line_width(&self) -> f64 {
        if self.edge.is_some() {
            self.line_width
        } else {
            0.0
        }
    }

    /// Set or clear the fill color.
    ///
    /// Clearing the fill of a style that has no edge fails and leaves the
    /// style untouched.
    pub fn set_fill_color(&mut self, fill: Option<Color>) -> FigureResult<()> {
        if fill.is_none() && self.edge.is_none() {
            let err =
                FigureError::invalid_style("cannot clear fill color: edge color is already empty");
            tracing::error!("{}", err);
            return Err(err);
        }
        self.fill = fill;
        Ok(())
    }

    /// Set or clear the edge color.
    ///
    /// Clearing the edge of a style that has no fill fails and leaves the
    /// style untouched.
    pub fn set_edge_color(&mut self, edge: Option<Color>) -> FigureResult<()> {
        if edge.is_none() && self.fill.is_none() {
            let err =
                FigureError::invalid_style("cannot clear edge color: fill color is already empty");
            tracing::error!("{}", err);
            return Err(err);
        }
        self.edge = edge;
        Ok(())
    }

    /// Parse and set the fill color (`#rrggbb`, `#rrggbbaa` or a CSS name)
    pub fn set_fill_color_str(&mut self, fill: &str) -> FigureResult<()> {
        let color: Color = fill
            .parse()
            .inspect_err(|e| tracing::error!("invalid fill color: {}", e))?;
        self.set_fill_color(Some(color))
    }

    /// Parse and set the edge color (`#rrggbb`, `#rrggbbaa` or a CSS name)
    pub fn set_edge_color_str(&mut self, edge: &str) -> FigureResult<()> {
        let color: Color = edge
            .parse()
            .inspect_err(|e| tracing::error!("invalid edge color: {}", e))?;
        self.set_edge_color(Some(color))
    }

    pub fn set_line_type(&mut self, line_type: LineType) {
        self.line_type = line_type;
    }

    /// Set the line width (stored as its absolute value)
    pub fn set_line_width(&mut self, line_width: f64) -> FigureResult<()> {
        self.line_width = checked_width(line_width).inspect_err(|e| tracing::error!("{}", e))?;
        Ok(())
    }

    /// Write this style into `target`.
    ///
    /// The stroke color is only written when an edge color is present.
    pub fn apply_to(&self, target: &mut ShapePaint) {
        target.fill = self.fill.unwrap_or(Color::TRANSPARENT);
        if let Some(edge) = self.edge {
            target.stroke = Some(edge);
        }
        target.dash_array.clear();
        if self.line_type() == LineType::Dashed {
            target.dash_array.extend_from_slice(&DASH_PATTERN);
        }
        target.stroke_options = round_stroke(self.line_width());
    }
}

fn checked_width(line_width: f64) -> FigureResult<f64> {
    if !line_width.is_finite() {
        return Err(FigureError::invalid_style(format!(
            "line width must be finite, got {}",
            line_width
        )));
    }
    Ok(line_width.abs())
}

impl PartialEq for StyleState {
    fn eq(&self, other: &Self) -> bool {
        self.fill == other.fill
            && self.edge == other.edge
            && self.line_type() == other.line_type()
            && self.line_width() == other.line_width()
    }
}

impl Hash for StyleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fill.hash(state);
        self.edge.hash(state);
        self.line_type().hash(state);
        self.line_width().to_bits().hash(state);
    }
}
