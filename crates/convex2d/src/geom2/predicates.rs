//! Orientation tests and the two primitives behind the set operations.
//!
//! All tests use the signed parallelogram area `cross(b - a, c - a)`; its sign
//! tells on which side of the directed line a→b the point c lies.

use super::{types::Point, EPS};
use crate::parallelogram_area as cross;

/// `a`, `b`, `c` are collinear within `EPS`.
#[inline]
pub fn aligned(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c).abs() < EPS
}

/// `c` lies on or to the left of the directed line a→b (exact, non-strict).
#[inline]
pub fn left_of(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) >= 0.0
}

/// `c` lies to the left of a→b by more than `EPS`.
#[inline]
pub fn strictly_left(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) > EPS
}

/// Membership in a hull stored counter-clockwise. Boundary points count as inside.
///
/// Degenerate hulls: nothing is inside the empty hull; a single vertex contains
/// only points within `EPS` of it; a segment contains the aligned points between
/// its endpoints.
pub fn point_in_convex_polygon(p: Point, hull: &[Point]) -> bool {
    match hull {
        [] => false,
        [v] => v.distance(&p) < EPS,
        [a, b] => {
            if !aligned(*a, *b, p) {
                return false;
            }
            let ab = b.to_vector() - a.to_vector();
            let t = ab.dot(&(p.to_vector() - a.to_vector()));
            (-EPS..=ab.norm_squared() + EPS).contains(&t)
        }
        _ => {
            let n = hull.len();
            (0..n).all(|i| !strictly_left(hull[(i + 1) % n], hull[i], p))
        }
    }
}

/// Crossing point of segments [a,b] and [c,d], if it lies inside both.
///
/// The two supporting lines are solved as a 2×2 system. Parallel lines
/// (`|det| <= EPS`) give `None`. The solution must be strictly closer than the
/// segment length to both endpoints of each segment, which rejects shared
/// endpoints. Coordinates below `EPS` in magnitude are snapped to 0.
pub fn segment_intersection(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    // Line i: a_i x - b_i y + c_i = 0
    let a1 = b.y - a.y;
    let b1 = b.x - a.x;
    let c1 = b1 * a.y - a1 * a.x;
    let a2 = d.y - c.y;
    let b2 = d.x - c.x;
    let c2 = b2 * c.y - a2 * c.x;
    let det = a1 * b2 - b1 * a2;
    if det.abs() <= EPS {
        return None;
    }
    let snap = |v: f64| if v.abs() < EPS { 0.0 } else { v };
    let p = Point::new(snap((b1 * c2 - b2 * c1) / det), snap((a1 * c2 - a2 * c1) / det));
    let within = |s: Point, e: Point| {
        let len = s.distance(&e);
        s.distance(&p) < len && e.distance(&p) < len
    };
    (within(a, b) && within(c, d)).then_some(p)
}
