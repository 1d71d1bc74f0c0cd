use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use figurekit_core::{Color, LineType, Point};
use figurekit_designer::{Figure, FigureError, FigureFactory, FigureKind, StyleState};

fn red_black() -> StyleState {
    StyleState::new(Some(Color::RED), Some(Color::BLACK), LineType::Solid, 2.0).unwrap()
}

fn hash_of(figure: &Figure) -> u64 {
    let mut hasher = DefaultHasher::new();
    figure.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_rectangle_drag_scenario() {
    let mut factory = FigureFactory::new();
    let mut rect = factory.rectangle(red_black(), 10.0, 10.0);
    rect.set_last_point(Point::new(30.0, 40.0));
    assert_eq!(rect.width(), 20.0);
    assert_eq!(rect.height(), 30.0);
    assert_eq!(rect.top_left(), Point::new(10.0, 10.0));
    assert_eq!(rect.bottom_right(), Point::new(30.0, 40.0));

    rect.set_last_point(Point::new(0.0, 0.0));
    assert_eq!(rect.top_left(), Point::new(0.0, 0.0));
    assert_eq!(rect.width(), 10.0);
    assert_eq!(rect.height(), 10.0);
}

#[test]
fn test_create_shape_restarts_geometry() {
    let mut factory = FigureFactory::new();
    let mut polygon = factory.polygon_with_radius(red_black(), 0.0, 0.0, 5.0, 5);
    polygon.create_shape(3.0, 4.0);
    assert_eq!(polygon.center(), Point::new(3.0, 4.0));
    assert_eq!(polygon.width(), 0.0);
    assert_eq!(polygon.kind(), FigureKind::Polygon);
}

#[test]
fn test_clone_is_independent() {
    let mut factory = FigureFactory::new();
    let mut rect = factory.rectangle(red_black(), 10.0, 10.0);
    rect.set_last_point(Point::new(30.0, 40.0));

    let mut copy = rect.clone();
    assert_eq!(copy, rect);
    assert_eq!(copy.instance_number(), rect.instance_number());

    copy.set_fill_color(Some(Color::BLUE)).unwrap();
    assert_eq!(rect.fill_color(), Some(Color::RED));
    assert_ne!(copy, rect);

    copy.set_last_point(Point::new(50.0, 50.0));
    assert_eq!(rect.width(), 20.0);
    assert_eq!(copy.width(), 40.0);
}

#[test]
fn test_clone_carries_transform_and_selection() {
    let mut factory = FigureFactory::new();
    let mut circle = factory.circle_with_radius(red_black(), 5.0, 5.0, 2.0);
    circle.set_translation(3.0, -1.0);
    circle.set_rotation(45.0);
    circle.set_selected(true);

    let copy = circle.clone();
    assert_eq!(copy.transform(), circle.transform());
    assert!(copy.is_selected());
    assert_eq!(copy.selection_overlay(), circle.selection_overlay());
    assert!(!copy.transform().is_identity());

    let copied = Figure::copy_as(FigureKind::Circle, &circle).unwrap();
    assert_eq!(copied.transform(), circle.transform());
    assert_eq!(copied.transform().rotation, 45.0);
    assert!(copied.is_selected());
}

#[test]
fn test_equality_tolerance() {
    let mut factory = FigureFactory::new();
    let a = factory.rectangle_with_size(red_black(), 1.0, 1.0, 10.0, 10.0);
    let close =
        factory.rectangle_with_size(red_black(), 1.0 + 5e-7, 1.0 - 5e-7, 10.0 + 5e-7, 10.0);
    let far = factory.rectangle_with_size(red_black(), 1.0, 1.0, 10.0, 10.0 + 2e-6);

    assert_eq!(a, close);
    assert_eq!(close, a);
    assert_ne!(a, far);
    assert_eq!(a, a);
}

#[test]
fn test_polygon_equality_tolerance() {
    let mut factory = FigureFactory::new();
    let a = factory.polygon_with_radius(red_black(), 2.0, 2.0, 5.0, 6);
    let close = factory.polygon_with_radius(red_black(), 2.0 + 5e-7, 2.0, 5.0 - 5e-7, 6);
    let shifted = factory.polygon_with_radius(red_black(), 2.0, 2.0 + 2e-6, 5.0, 6);
    let grown = factory.polygon_with_radius(red_black(), 2.0, 2.0, 5.0 + 2e-6, 6);

    assert_eq!(a, close);
    assert_eq!(close, a);
    assert_ne!(a, shifted);
    assert_ne!(a, grown);

    let mut turned = a.clone();
    turned.set_last_point(Point::new(2.0 + 5.0 * 1e-7f64.cos(), 2.0 + 5.0 * 1e-7f64.sin()));
    assert_eq!(a, turned);
    turned.set_last_point(Point::new(2.0 + 5.0 * 1e-6f64.cos(), 2.0 + 5.0 * 1e-6f64.sin()));
    assert_ne!(a, turned);
}

#[test]
fn test_polygon_equality_ignores_angle_wrap_and_symmetry() {
    let mut factory = FigureFactory::new();
    let mut a = factory.polygon_with_radius(red_black(), 0.0, 0.0, 0.0, 6);
    let mut b = factory.polygon_with_radius(red_black(), 0.0, 0.0, 0.0, 6);
    a.set_last_point(Point::new(-5.0, 1e-9));
    b.set_last_point(Point::new(-5.0, -1e-9));
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let step = std::f64::consts::FRAC_PI_3;
    a.set_last_point(Point::new(5.0, 0.0));
    b.set_last_point(Point::new(5.0 * step.cos(), 5.0 * step.sin()));
    assert_eq!(a, b);
    assert_eq!(a.clone(), a);
}

#[test]
fn test_equality_ignores_instance_and_selection() {
    let mut factory = FigureFactory::new();
    let a = factory.circle_with_radius(red_black(), 0.0, 0.0, 3.0);
    let mut b = factory.circle_with_radius(red_black(), 0.0, 0.0, 3.0);
    b.set_selected(true);
    assert_ne!(a.instance_number(), b.instance_number());
    assert_eq!(a, b);
}

#[test]
fn test_same_geometry_ignores_style() {
    let mut factory = FigureFactory::new();
    let a = factory.ellipse_with_radii(red_black(), 0.0, 0.0, 3.0, 2.0);
    let b = factory.ellipse_with_radii(StyleState::filled(Color::YELLOW), 0.0, 0.0, 3.0, 2.0);
    assert!(a.same_geometry(&b));
    assert_ne!(a, b);
}

#[test]
fn test_different_variants_never_equal() {
    let mut factory = FigureFactory::new();
    let circle = factory.circle_with_radius(red_black(), 0.0, 0.0, 1.0);
    let ellipse = factory.ellipse_with_radii(red_black(), 0.0, 0.0, 1.0, 1.0);
    assert_eq!(circle.top_left(), ellipse.top_left());
    assert_ne!(circle, ellipse);
    assert!(!circle.same_geometry(&ellipse));
}

#[test]
fn test_equal_figures_hash_alike() {
    let mut factory = FigureFactory::new();
    let a = factory.rectangle_with_size(red_black(), 0.0, 0.0, 4.0, 4.0);
    let b = factory.rectangle_with_size(red_black(), 5e-7, 0.0, 4.0, 4.0);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&a), hash_of(&a.clone()));
}

#[test]
fn test_copy_as_checks_variant() {
    let mut factory = FigureFactory::new();
    let rect = factory.rectangle(red_black(), 0.0, 0.0);

    let copy = Figure::copy_as(FigureKind::Rectangle, &rect).unwrap();
    assert_eq!(copy, rect);

    let err = Figure::copy_as(FigureKind::Polygon, &rect).unwrap_err();
    assert_eq!(
        err,
        FigureError::MismatchedVariant {
            expected: FigureKind::Polygon,
            found: FigureKind::Rectangle,
        }
    );
}

#[test]
fn test_display_names_variant_and_instance() {
    let mut factory = FigureFactory::new();
    let first = factory.rectangle(red_black(), 0.0, 0.0);
    let second = factory.rectangle(red_black(), 0.0, 0.0);
    let polygon = factory.polygon(red_black(), 0.0, 0.0);
    assert_eq!(first.to_string(), "Rectangle 0");
    assert_eq!(second.to_string(), "Rectangle 1");
    assert_eq!(polygon.to_string(), "Polygon 0");
    assert_eq!(first.clone().to_string(), "Rectangle 0");
}

#[test]
fn test_transformed_outline() {
    let mut factory = FigureFactory::new();
    let mut rect = factory.rectangle_with_size(red_black(), 0.0, 0.0, 10.0, 10.0);
    rect.set_translation(5.0, 0.0);
    let bb = lyon::algorithms::aabb::bounding_box(rect.transformed_outline().iter());
    assert!((bb.min.x - 5.0).abs() < 1e-4);
    assert!((bb.max.x - 15.0).abs() < 1e-4);

    let local = lyon::algorithms::aabb::bounding_box(rect.outline().iter());
    assert!((local.min.x - 0.0).abs() < 1e-4);
}
