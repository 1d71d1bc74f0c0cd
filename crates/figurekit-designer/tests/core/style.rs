use figurekit_core::{Color, LineType, Point};
use figurekit_designer::{FigureError, FigureFactory, StyleState};

#[test]
fn test_both_colors_empty_fails() {
    let result = StyleState::new(None, None, LineType::Solid, 2.0);
    assert!(matches!(result, Err(FigureError::InvalidStyle { .. })));
}

#[test]
fn test_fill_without_edge_is_valid() {
    let style = StyleState::new(Some(Color::RED), None, LineType::Solid, 2.0).unwrap();
    let mut factory = FigureFactory::new();
    let rect = factory.rectangle(style, 10.0, 10.0);
    assert_eq!(rect.fill_color(), Some(Color::RED));
    assert!(!rect.has_edge_color());
    assert_eq!(rect.line_type(), LineType::None);
    assert_eq!(rect.line_width(), 0.0);
}

#[test]
fn test_edge_without_fill_is_valid() {
    let style = StyleState::new(None, Some(Color::BLACK), LineType::Dashed, 1.5).unwrap();
    assert!(!style.has_fill_color());
    assert_eq!(style.line_type(), LineType::Dashed);
    assert_eq!(style.line_width(), 1.5);
}

#[test]
fn test_figure_setters_keep_invariant() {
    let mut factory = FigureFactory::new();
    let style = StyleState::new(Some(Color::RED), Some(Color::BLACK), LineType::Solid, 2.0).unwrap();
    let mut rect = factory.rectangle(style, 0.0, 0.0);

    rect.set_edge_color(None).unwrap();
    assert_eq!(rect.line_width(), 0.0);

    let err = rect.set_fill_color(None).unwrap_err();
    assert!(matches!(err, FigureError::InvalidStyle { .. }));
    assert_eq!(rect.fill_color(), Some(Color::RED));

    rect.set_edge_color_str("purple").unwrap();
    assert_eq!(rect.edge_color(), Some(Color::PURPLE));
    assert_eq!(rect.line_type(), LineType::Solid);
    assert_eq!(rect.line_width(), 2.0);

    rect.set_fill_color(None).unwrap();
    assert!(!rect.has_fill_color());
}

#[test]
fn test_line_type_without_edge_is_deferred() {
    let mut factory = FigureFactory::new();
    let mut circle = factory.circle(StyleState::filled(Color::GREEN), 0.0, 0.0);
    circle.set_line_type(LineType::Dashed);
    circle.set_line_width(3.0).unwrap();
    assert_eq!(circle.line_type(), LineType::None);
    assert_eq!(circle.line_width(), 0.0);

    circle.set_edge_color(Some(Color::BLACK)).unwrap();
    assert_eq!(circle.line_type(), LineType::Dashed);
    assert_eq!(circle.line_width(), 3.0);
}

#[test]
fn test_negative_and_invalid_widths() {
    let mut factory = FigureFactory::new();
    let style = StyleState::new(None, Some(Color::BLUE), LineType::Solid, 1.0).unwrap();
    let mut ellipse = factory.ellipse(style, 0.0, 0.0);
    ellipse.set_line_width(-4.0).unwrap();
    assert_eq!(ellipse.line_width(), 4.0);
    assert!(ellipse.set_line_width(f64::INFINITY).is_err());
    assert_eq!(ellipse.line_width(), 4.0);
    ellipse.set_last_point(Point::new(2.0, 1.0));
    assert_eq!(ellipse.width(), 4.0);
}

#[test]
fn test_apply_style_to_missing_target_is_noop() {
    let mut factory = FigureFactory::new();
    let rect = factory.rectangle(StyleState::filled(Color::RED), 0.0, 0.0);
    rect.apply_style(None);
    let paint = rect.paint();
    assert_eq!(paint.fill, Color::RED);
    assert_eq!(paint.stroke, None);
}
