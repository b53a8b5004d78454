//! Convex hull by angular sweep around the lowest-leftmost point.
//!
//! Output order
//! - Counter-clockwise, starting at the pivot (minimum x, ties by minimum y).
//! - Collinear boundary points are dropped; only corners remain.
//! - 0 points → empty, coincident points → one vertex, collinear input → the
//!   two extreme points of the segment.

use std::cmp::Ordering;

use super::predicates::{aligned, strictly_left};
use super::{types::Point, EPS};

/// Lowest-leftmost point: minimum x, then minimum y.
fn pivot_index(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let q = points[best];
        if p.x < q.x || (p.x == q.x && p.y < q.y) {
            best = i;
        }
    }
    best
}

/// Angular order around `o`; collinear candidates are ordered nearer-first.
fn angular_cmp(o: Point, a: &Point, b: &Point) -> Ordering {
    let cross = crate::parallelogram_area(o, *a, *b);
    if cross.abs() < EPS {
        return o.distance(a).total_cmp(&o.distance(b));
    }
    if cross > 0.0 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Convex hull of an unordered point set.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let pivot = points[pivot_index(points)];
    // Copies of the pivot would tie with every direction and break the sort order.
    let mut rest: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| pivot.distance(p) >= EPS)
        .collect();
    if rest.is_empty() {
        return vec![pivot];
    }
    rest.sort_by(|a, b| angular_cmp(pivot, a, b));

    // Initial run collinear with the pivot: keep its farthest point.
    let n = rest.len();
    let mut l = 1;
    while l < n && aligned(pivot, rest[l - 1], rest[l]) {
        l += 1;
    }
    let mut hull = Vec::with_capacity(n + 1);
    hull.push(pivot);
    hull.push(rest[l - 1]);
    if l < n {
        hull.push(rest[l]);
    }

    for &p in rest.iter().skip(l + 1) {
        while hull.len() >= 2 && !strictly_left(hull[hull.len() - 2], hull[hull.len() - 1], p) {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}
