use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use figurekit_core::Color;
use figurekit_designer::{logging::figure_span, FigureFactory, FigureKind, StyleState};
use tracing::Level;

#[test]
fn test_span_inherits_parent_level() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let parent = tracing::debug_span!("editor");
        let span = figure_span(Some(&parent), FigureKind::Circle, 4);
        assert_eq!(span.metadata().map(|m| *m.level()), Some(Level::DEBUG));

        let root = figure_span(None, FigureKind::Circle, 5);
        assert_eq!(root.metadata().map(|m| *m.level()), Some(Level::INFO));
    });
}

#[test]
fn test_factory_uses_parent_span() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let parent = tracing::warn_span!("document");
        let mut factory = FigureFactory::new().with_parent(parent);
        let rect = factory.rectangle(StyleState::filled(Color::RED), 0.0, 0.0);
        assert_eq!(rect.span().metadata().map(|m| *m.level()), Some(Level::WARN));
    });
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.contents()
}

#[test]
fn test_style_setter_errors_are_logged() {
    let output = capture(|| {
        let mut style = StyleState::filled(Color::RED);
        assert!(style.set_fill_color(None).is_err());
        assert!(style.set_edge_color_str("blurple").is_err());
        assert!(style.set_line_width(f64::NAN).is_err());
    });
    assert!(output.contains("ERROR"), "log was: {}", output);
    assert!(output.contains("cannot clear fill color"), "log was: {}", output);
    assert!(output.contains("invalid edge color"), "log was: {}", output);
    assert!(output.contains("line width must be finite"), "log was: {}", output);
}

#[test]
fn test_figure_setter_error_logged_once_inside_figure_span() {
    let output = capture(|| {
        let mut factory = FigureFactory::new();
        let mut rect = factory.rectangle(StyleState::filled(Color::RED), 0.0, 0.0);
        assert!(rect.set_fill_color(None).is_err());
    });
    assert_eq!(output.matches("cannot clear fill color").count(), 1, "log was: {}", output);
    assert!(output.contains("figure{"), "log was: {}", output);
}
