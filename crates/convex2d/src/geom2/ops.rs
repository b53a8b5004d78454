//! Intersection, union and containment of convex polygons.
//!
//! Notes
//! - Intersection collects candidate points (mutually contained vertices plus
//!   edge crossings) and re-hulls them; for convex inputs the hull of the
//!   candidates is exactly the intersection region.
//! - Union is the convex hull of both vertex sets, not the exact (possibly
//!   non-convex) union.
//! - Containment compares vertex sequences exactly: `self` is inside `other`
//!   when adding its vertices leaves `other`'s hull unchanged, vertex for vertex.

use super::polygon::Polygon;
use super::predicates::{point_in_convex_polygon, segment_intersection};
use super::types::Point;

/// Closed-loop edges of a hull, as (start, end) pairs.
fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

impl Polygon {
    /// Common region of `self` and `other`, as a new black polygon.
    pub fn intersection(&self, other: &Polygon) -> Polygon {
        let p = self.vertices();
        let v = other.vertices();
        let mut candidates: Vec<Point> = Vec::with_capacity(p.len() + v.len());
        candidates.extend(p.iter().filter(|&&q| point_in_convex_polygon(q, v)));
        candidates.extend(v.iter().filter(|&&q| point_in_convex_polygon(q, p)));
        for (a, b) in edges(p) {
            for (c, d) in edges(v) {
                if let Some(x) = segment_intersection(a, b, c, d) {
                    candidates.push(x);
                }
            }
        }
        Polygon::new(&candidates)
    }

    /// Convex hull of both polygons, as a new black polygon.
    pub fn union(&self, other: &Polygon) -> Polygon {
        let mut all = Vec::with_capacity(self.vertex_count() + other.vertex_count());
        all.extend_from_slice(self.vertices());
        all.extend_from_slice(other.vertices());
        Polygon::new(&all)
    }

    /// `self` adds nothing to the hull of `other` (exact vertex comparison).
    pub fn is_inside(&self, other: &Polygon) -> bool {
        self.union(other).vertices() == other.vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        let pts: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
        Polygon::new(&pts)
    }

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        poly(&[
            (x0, y0),
            (x0 + side, y0),
            (x0 + side, y0 + side),
            (x0, y0 + side),
        ])
    }

    fn assert_vertices_close(actual: &[Point], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "got {actual:?}");
        for (p, &(x, y)) in actual.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "got {actual:?}");
        }
    }

    #[test]
    fn overlapping_squares_intersect_in_unit_square() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let i = a.intersection(&b);
        assert_vertices_close(i.vertices(), &[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]);
        assert!((i.area() - 1.0).abs() < 1e-12);
        assert_eq!(b.intersection(&a).vertices(), i.vertices());
    }

    #[test]
    fn nested_intersection_is_inner_polygon() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = poly(&[(2.0, 2.0), (5.0, 3.0), (3.0, 6.0)]);
        assert_eq!(outer.intersection(&inner).vertices(), inner.vertices());
    }

    #[test]
    fn crossing_triangles_form_hexagon() {
        let up = poly(&[(0.0, 0.0), (6.0, 0.0), (3.0, 6.0)]);
        let down = poly(&[(0.0, 4.0), (6.0, 4.0), (3.0, -2.0)]);
        let i = up.intersection(&down);
        assert_eq!(i.vertex_count(), 6);
        assert!(i.area() > 0.0 && i.area() < up.area());
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn touching_squares_share_an_edge() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let i = a.intersection(&b);
        assert_vertices_close(i.vertices(), &[(1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(i.edge_count(), 1);
    }

    #[test]
    fn union_is_hull_of_both() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(2.0, 0.0, 1.0);
        let u = a.union(&b);
        assert_vertices_close(u.vertices(), &[(0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (0.0, 1.0)]);
        // Convex hull, not the exact union: the gap between the squares is covered.
        assert!((u.area() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn containment() {
        let outer = square(0.0, 0.0, 4.0);
        let inner = square(1.0, 1.0, 1.0);
        assert!(inner.is_inside(&outer));
        assert!(!outer.is_inside(&inner));
        assert!(outer.is_inside(&outer));
        assert!(Polygon::default().is_inside(&outer));
        // Sharing a boundary still counts.
        assert!(square(0.0, 0.0, 1.0).is_inside(&outer));
        assert!(!square(3.5, 3.5, 1.0).is_inside(&outer));
    }

    #[test]
    fn results_are_black() {
        let red = crate::geom2::Color::new(1.0, 0.0, 0.0).unwrap();
        let a = square(0.0, 0.0, 2.0).recolored(red);
        let b = square(1.0, 1.0, 2.0).recolored(red);
        assert_eq!(a.union(&b).color(), crate::geom2::Color::BLACK);
        assert_eq!(a.intersection(&b).color(), crate::geom2::Color::BLACK);
    }
}
