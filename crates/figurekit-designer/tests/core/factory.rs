use figurekit_core::{Color, Point};
use figurekit_designer::{
    FigureFactory, FigureGeometry, FigureKind, Geometry, PolygonGeometry, StyleState,
};
use figurekit_settings::Config;

#[test]
fn test_reset_gives_deterministic_numbering() {
    let mut factory = FigureFactory::new();
    let style = StyleState::filled(Color::RED);
    for _ in 0..3 {
        factory.rectangle(style.clone(), 0.0, 0.0);
    }
    assert_eq!(factory.instances_created(FigureKind::Rectangle), 3);

    factory.reset_counters();
    let rect = factory.rectangle(style, 0.0, 0.0);
    assert_eq!(rect.instance_number(), 0);
}

#[test]
fn test_separate_factories_number_independently() {
    let style = StyleState::filled(Color::RED);
    let mut a = FigureFactory::new();
    let mut b = FigureFactory::new();
    a.circle(style.clone(), 0.0, 0.0);
    let from_b = b.circle(style, 0.0, 0.0);
    assert_eq!(from_b.instance_number(), 0);
}

#[test]
fn test_create_from_geometry() {
    let mut factory = FigureFactory::new();
    let geometry: Geometry = PolygonGeometry::new(Point::new(0.0, 0.0), 2.0, 3).into();
    let triangle = factory.create(StyleState::filled(Color::ORANGE), geometry);
    assert_eq!(triangle.kind(), FigureKind::Polygon);
    assert!(triangle.geometry().width() > 0.0);
}

#[test]
fn test_default_style_from_config() {
    let factory = FigureFactory::from_config(&Config::default());
    let style = factory.default_style().unwrap();
    assert_eq!(style.fill_color(), Some(Color::WHITE));
    assert_eq!(style.edge_color(), Some(Color::BLACK));
    assert_eq!(factory.polygon_sides(), 6);
}
