//! Test support library
//! Provides various helper functions & utilities for tests.

use epure::float_types::Real;

/// Approximate float comparison with an explicit tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A decoded `M sx sy A rx ry rot laf sf ex ey` arc path.
#[derive(Debug)]
pub struct ArcPath {
    pub start: (Real, Real),
    pub radius: Real,
    pub large_arc: u8,
    pub sweep: u8,
    pub end: (Real, Real),
}

/// Decode the single-arc path strings produced by `geometry::describe_arc`.
pub fn parse_arc(d: &str) -> ArcPath {
    let tokens: Vec<&str> = d.split_whitespace().collect();
    assert_eq!(tokens.len(), 11, "unexpected arc path shape: {d}");
    assert_eq!(tokens[0], "M");
    assert_eq!(tokens[3], "A");
    let num = |i: usize| -> Real { tokens[i].parse().expect("numeric path token") };
    ArcPath {
        start: (num(1), num(2)),
        radius: num(4),
        large_arc: tokens[7].parse().expect("large-arc flag"),
        sweep: tokens[8].parse().expect("sweep flag"),
        end: (num(9), num(10)),
    }
}
