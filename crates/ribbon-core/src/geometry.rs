//! Plain 2D math shared by the simulation and the mesh builder.
//!
//! Points are `glam::DVec2`; the canvas API works in `f64` so the whole core
//! stays in double precision.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

pub type Point = DVec2;

/// Signed shortest rotation taking `a0` onto `a1`, in `(-PI, PI]`.
///
/// `a0 + delta_angle(a0, a1)` is congruent to `a1` modulo `TAU`.
#[inline]
pub fn delta_angle(a0: f64, a1: f64) -> f64 {
    let da = (a1 - a0) % TAU;
    let d = ((2.0 * da) % TAU) - da;
    if d <= -PI {
        d + TAU
    } else if d > PI {
        d - TAU
    } else {
        d
    }
}

/// Even-odd ray casting test. Points exactly on an edge may land either way.
pub fn point_in_polygon(p: Point, poly: &[Point]) -> bool {
    let mut inside = false;
    if poly.len() < 3 {
        return false;
    }
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (pi, pj) = (poly[i], poly[j]);
        if (pi.y > p.y) != (pj.y > p.y) && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Intersection of the infinite lines `p0p1` and `p2p3`; `None` when parallel.
pub fn line_intersection(p0: Point, p1: Point, p2: Point, p3: Point) -> Option<Point> {
    // a*x + b*y = c for each line
    let a1 = p1.y - p0.y;
    let b1 = p0.x - p1.x;
    let c1 = a1 * p0.x + b1 * p0.y;
    let a2 = p3.y - p2.y;
    let b2 = p2.x - p3.x;
    let c2 = a2 * p2.x + b2 * p2.y;
    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    Some(Point::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det))
}

/// Foot of the perpendicular from `p` onto the line through `a` and `b`.
pub fn perpendicular_foot(p: Point, a: Point, b: Point) -> Option<Point> {
    let ab = b - a;
    let dq = ab.length_squared();
    if dq == 0.0 {
        return None;
    }
    let t = (p - a).dot(ab) / dq;
    Some(a + ab * t)
}

/// Unit vector for an angle in radians.
#[inline]
pub fn direction(angle: f64) -> Point {
    Point::new(angle.cos(), angle.sin())
}

/// Pixel extent of the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Conservative cull: true only when every vertex sits past the same edge.
    pub fn triangle_outside(&self, tri: &[Point; 3]) -> bool {
        tri.iter().all(|p| p.x < 0.0)
            || tri.iter().all(|p| p.y < 0.0)
            || tri.iter().all(|p| p.x > self.width)
            || tri.iter().all(|p| p.y > self.height)
    }
}
