//! Geometry kernel: pure functions on circles, chords, and SVG arc paths.
//!
//! Angles are in **degrees**, measured counter-clockwise from the positive
//! x-axis *as seen on screen*. SVG's y-axis points down, so [`point_on_circle`]
//! flips the sine term (`y = cy - r·sin(θ)`); increasing angles rotate
//! counter-clockwise visually. Every consumer of this module relies on that
//! convention; flipping the sign mirrors every construction vertically.

use crate::float_types::{PI, Real};
use nalgebra::Point2;

/// Point on the circle of `radius` around `center` at `angle_deg`.
#[inline]
pub fn point_on_circle(center: Point2<Real>, radius: Real, angle_deg: Real) -> Point2<Real> {
    let theta = angle_deg * PI / 180.0;
    Point2::new(
        center.x + radius * theta.cos(),
        center.y - radius * theta.sin(),
    )
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2<Real>, b: Point2<Real>) -> Real {
    nalgebra::distance(&a, &b)
}

/// Length of the chord subtending `angle_deg` on a circle of `radius`.
///
/// This is the quantity the compass "carries" during an angle transfer:
/// reproducing the chord on the arc reproduces the angle.
#[inline]
pub fn chord_length(radius: Real, angle_deg: Real) -> Real {
    let half = angle_deg * PI / 360.0;
    2.0 * radius * half.sin()
}

/// SVG path data for the circular arc from `start_deg` to `end_deg`.
///
/// Flag selection is load-bearing:
/// - `large-arc-flag = 1` iff the swept angle exceeds 180°;
/// - `sweep-flag = 0` for increasing angle (counter-clockwise on screen in
///   this crate's convention), `1` otherwise.
///
/// Getting the sweep flag backward draws the complementary arc.
///
/// A zero/negative/non-finite radius yields a degenerate `M cx cy` path
/// rather than an invalid arc command.
pub fn describe_arc(
    center: Point2<Real>,
    radius: Real,
    start_deg: Real,
    end_deg: Real,
) -> String {
    if !(radius > 0.0) || !radius.is_finite() {
        return format!("M {} {}", center.x, center.y);
    }
    let start = point_on_circle(center, radius, start_deg);
    let end = point_on_circle(center, radius, end_deg);
    let sweep = end_deg - start_deg;
    let large_arc = if sweep.abs() > 180.0 { 1 } else { 0 };
    let sweep_flag = if sweep > 0.0 { 0 } else { 1 };
    format!(
        "M {} {} A {} {} 0 {} {} {} {}",
        start.x, start.y, radius, radius, large_arc, sweep_flag, end.x, end.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::EPSILON;

    #[test]
    fn chord_of_60_degrees_equals_radius() {
        // The hexagon construction: a 60° chord is exactly the radius.
        assert!((chord_length(100.0, 60.0) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn y_axis_points_up_on_screen() {
        let p = point_on_circle(Point2::new(0.0, 0.0), 100.0, 90.0);
        assert!(p.x.abs() < EPSILON.max(1e-6));
        assert!((p.y + 100.0).abs() < EPSILON.max(1e-6));
    }

    #[test]
    fn degenerate_radius_yields_point_path() {
        let d = describe_arc(Point2::new(3.0, 4.0), 0.0, 0.0, 90.0);
        assert_eq!(d, "M 3 4");
    }
}
