use figurekit_core::{Color, Point};
use figurekit_designer::{FigureFactory, StyleState, SELECTION_DASH};

#[test]
fn test_selection_toggle() {
    let mut factory = FigureFactory::new();
    let mut rect = factory.rectangle_with_size(StyleState::filled(Color::RED), 2.0, 3.0, 4.0, 5.0);
    assert!(!rect.is_selected());
    assert!(rect.selection_overlay().is_none());

    rect.set_selected(true);
    assert!(rect.is_selected());
    let overlay = rect.selection_overlay().unwrap();
    assert_eq!(overlay.top_left(), rect.top_left());
    assert_eq!(overlay.width(), rect.width());
    assert_eq!(overlay.height(), rect.height());
    assert_eq!(overlay.paint().dash_array, SELECTION_DASH.to_vec());

    rect.set_selected(false);
    assert!(!rect.is_selected());
    assert!(rect.selection_overlay().is_none());
}

#[test]
fn test_overlay_follows_reshape_while_selected() {
    let mut factory = FigureFactory::new();
    let mut rect = factory.rectangle(StyleState::filled(Color::RED), 10.0, 10.0);
    rect.set_selected(true);
    rect.set_last_point(Point::new(30.0, 40.0));

    let overlay = rect.selection_overlay().unwrap();
    assert_eq!(overlay.width(), 20.0);
    assert_eq!(overlay.height(), 30.0);

    rect.create_shape(0.0, 0.0);
    let overlay = rect.selection_overlay().unwrap();
    assert_eq!(overlay.top_left(), Point::new(0.0, 0.0));
    assert_eq!(overlay.width(), 0.0);
}

#[test]
fn test_unselected_reshape_has_no_overlay() {
    let mut factory = FigureFactory::new();
    let mut circle = factory.circle(StyleState::filled(Color::RED), 0.0, 0.0);
    circle.set_last_point(Point::new(3.0, 4.0));
    assert!(circle.selection_overlay().is_none());
    assert_eq!(circle.width(), 10.0);
}
