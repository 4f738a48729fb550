mod support;

use epure::float_types::{EPSILON, Real};
use epure::geometry::{chord_length, describe_arc, distance, point_on_circle};
use nalgebra::Point2;

#[test]
fn cardinal_points_on_circle() {
    let origin = Point2::new(0.0, 0.0);

    let east = point_on_circle(origin, 100.0, 0.0);
    assert!(support::approx_eq(east.x, 100.0, EPSILON));
    assert!(support::approx_eq(east.y, 0.0, EPSILON));

    // Screen-space Y-flip: 90° is straight *up* on screen, i.e. negative y.
    let north = point_on_circle(origin, 100.0, 90.0);
    assert!(support::approx_eq(north.x, 0.0, 1e-6));
    assert!(support::approx_eq(north.y, -100.0, 1e-6));

    let west = point_on_circle(origin, 100.0, 180.0);
    assert!(support::approx_eq(west.x, -100.0, 1e-6));
    assert!(support::approx_eq(west.y, 0.0, 1e-6));
}

#[test]
fn large_arc_flag_set_only_beyond_half_turn() {
    let origin = Point2::new(0.0, 0.0);
    let over = support::parse_arc(&describe_arc(origin, 50.0, 0.0, 190.0));
    assert_eq!(over.large_arc, 1);
    let under = support::parse_arc(&describe_arc(origin, 50.0, 0.0, 170.0));
    assert_eq!(under.large_arc, 0);
}

#[test]
fn sweep_flag_follows_angle_direction() {
    let origin = Point2::new(10.0, 20.0);
    // Increasing angle (counter-clockwise on screen) → sweep flag 0.
    let ccw = support::parse_arc(&describe_arc(origin, 40.0, 30.0, 120.0));
    assert_eq!(ccw.sweep, 0);
    // Decreasing angle → sweep flag 1.
    let cw = support::parse_arc(&describe_arc(origin, 40.0, 120.0, 30.0));
    assert_eq!(cw.sweep, 1);
}

#[test]
fn arc_endpoints_rederive_from_point_on_circle() {
    let center = Point2::new(123.0, 456.0);
    let cases: [(Real, Real); 5] = [
        (0.0, 170.0),
        (0.0, 190.0),
        (30.0, -50.0),
        (120.0, 300.0),
        (350.0, 10.0),
    ];
    for (start_deg, end_deg) in cases {
        let arc = support::parse_arc(&describe_arc(center, 75.0, start_deg, end_deg));
        let start = point_on_circle(center, 75.0, start_deg);
        let end = point_on_circle(center, 75.0, end_deg);
        assert!(support::approx_eq(arc.start.0, start.x, EPSILON));
        assert!(support::approx_eq(arc.start.1, start.y, EPSILON));
        assert!(support::approx_eq(arc.end.0, end.x, EPSILON));
        assert!(support::approx_eq(arc.end.1, end.y, EPSILON));
        assert!(support::approx_eq(arc.radius, 75.0, EPSILON));
    }
}

#[test]
fn chord_length_agrees_with_sampled_points() {
    let origin = Point2::new(400.0, 430.0);
    let a = point_on_circle(origin, 80.0, 0.0);
    let b = point_on_circle(origin, 80.0, 20.0);
    assert!(support::approx_eq(chord_length(80.0, 20.0), distance(a, b), 1e-9));
}

#[test]
fn degenerate_radius_produces_point_path() {
    let d = describe_arc(Point2::new(1.0, 2.0), -5.0, 0.0, 90.0);
    assert_eq!(d, "M 1 2");
    let nan = describe_arc(Point2::new(1.0, 2.0), Real::NAN, 0.0, 90.0);
    assert_eq!(nan, "M 1 2");
}
