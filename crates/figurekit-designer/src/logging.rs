//! Per-figure tracing spans.

use tracing::{debug_span, error_span, info_span, trace_span, warn_span, Level, Span};

use crate::model::FigureKind;

/// Span scoping the events of one figure.
///
/// Under a parent span the figure span takes the parent's level; without
/// a parent it is an INFO span.
pub fn figure_span(parent: Option<&Span>, kind: FigureKind, instance: u32) -> Span {
    let Some(parent) = parent else {
        return info_span!("figure", kind = %kind, instance);
    };

    let level = parent
        .metadata()
        .map(|m| *m.level())
        .unwrap_or(Level::INFO);
    if level == Level::TRACE {
        trace_span!(parent: parent, "figure", kind = %kind, instance)
    } else if level == Level::DEBUG {
        debug_span!(parent: parent, "figure", kind = %kind, instance)
    } else if level == Level::WARN {
        warn_span!(parent: parent, "figure", kind = %kind, instance)
    } else if level == Level::ERROR {
        error_span!(parent: parent, "figure", kind = %kind, instance)
    } else {
        info_span!(parent: parent, "figure", kind = %kind, instance)
    }
}
