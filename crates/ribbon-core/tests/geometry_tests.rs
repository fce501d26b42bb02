// Host-side tests for the shared 2D helpers.

use ribbon_core::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn congruent(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d < 1e-9 || TAU - d < 1e-9
}

#[test]
fn delta_angle_stays_in_half_open_range() {
    let samples = [-10.0, -TAU, -PI, -1.0, 0.0, 0.5, PI, 4.0, TAU, 13.7];
    for &a0 in &samples {
        for &a1 in &samples {
            let d = delta_angle(a0, a1);
            assert!(d > -PI - 1e-12 && d <= PI + 1e-12, "{a0} -> {a1} gave {d}");
            assert!(congruent(a0 + d, a1), "{a0} + {d} is not {a1}");
        }
    }
}

#[test]
fn delta_angle_takes_the_short_way_round() {
    assert!((delta_angle(0.0, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
    assert!((delta_angle(FRAC_PI_2, 0.0) + FRAC_PI_2).abs() < 1e-12);
    // Just across the +/-PI seam.
    let d = delta_angle(PI - 0.1, -PI + 0.1);
    assert!((d - 0.2).abs() < 1e-9);
    assert_eq!(delta_angle(1.0, 1.0), 0.0);
}

#[test]
fn point_in_polygon_square() {
    let square = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    assert!(point_in_polygon(Point::new(5.0, 5.0), &square));
    assert!(!point_in_polygon(Point::new(15.0, 5.0), &square));
    assert!(!point_in_polygon(Point::new(5.0, -1.0), &square));
    assert!(!point_in_polygon(Point::new(1.0, 1.0), &square[..2]));
}

#[test]
fn line_intersection_crossing_and_parallel() {
    let p = line_intersection(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    )
    .unwrap();
    assert!((p - Point::new(5.0, 5.0)).length() < 1e-9);

    let parallel = line_intersection(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    );
    assert!(parallel.is_none());
}

#[test]
fn perpendicular_foot_projects_onto_line() {
    let foot = perpendicular_foot(Point::new(3.0, 4.0), Point::ZERO, Point::new(10.0, 0.0)).unwrap();
    assert!((foot - Point::new(3.0, 0.0)).length() < 1e-12);
    assert!(perpendicular_foot(Point::new(1.0, 1.0), Point::ZERO, Point::ZERO).is_none());
}

#[test]
fn surface_cull_is_conservative() {
    let s = Surface::new(100.0, 50.0);
    assert_eq!(s.center(), Point::new(50.0, 25.0));
    let left = [Point::new(-5.0, 0.0), Point::new(-1.0, 10.0), Point::new(-3.0, 60.0)];
    assert!(s.triangle_outside(&left));
    let below = [Point::new(0.0, 51.0), Point::new(50.0, 70.0), Point::new(200.0, 55.0)];
    assert!(s.triangle_outside(&below));
    // Straddles the corner: not culled even though no vertex is inside.
    let corner = [Point::new(-5.0, 10.0), Point::new(10.0, -5.0), Point::new(-5.0, -5.0)];
    assert!(!s.triangle_outside(&corner));
}
