//! `Polygon`: a hull-normalized vertex list plus a color.
//!
//! Invariants:
//! - `vertices` is `convex_hull(input)` for the points the polygon was built from.
//! - The only mutation is recoloring; geometry is replaced, never edited.

use super::hull::convex_hull;
use super::types::{Color, Point};
use super::EPS;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    color: Color,
}

/// Shoelace area of a closed vertex loop (absolute value).
///
/// Fewer than three vertices enclose no area.
pub fn shoelace_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let (p, q) = (vertices[i], vertices[(i + 1) % n]);
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice.abs() / 2.0
}

/// Length of the closed loop through `vertices`, last vertex back to the first.
///
/// A segment is walked there and back.
pub fn closed_length(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| vertices[i].distance(&vertices[(i + 1) % n]))
        .sum()
}

impl Polygon {
    /// Black polygon over the convex hull of `points`.
    pub fn new(points: &[Point]) -> Self {
        Self::with_color(points, Color::default())
    }

    pub fn with_color(points: &[Point], color: Color) -> Self {
        Self {
            vertices: convex_hull(points),
            color,
        }
    }

    /// Hull vertices, counter-clockwise from the lowest-leftmost one.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Same geometry, new color.
    #[must_use]
    pub fn recolored(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn area(&self) -> f64 {
        shoelace_area(&self.vertices)
    }

    pub fn perimeter(&self) -> f64 {
        closed_length(&self.vertices)
    }

    /// Mean of the vertices (not the area centroid). `None` when empty.
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let mut sum = Point::default();
        for &p in &self.vertices {
            sum += p;
        }
        let n = self.vertices.len() as f64;
        Some(Point::new(sum.x / n, sum.y / n))
    }

    /// 0 for a point, 1 for a segment, otherwise the vertex count.
    pub fn edge_count(&self) -> usize {
        match self.vertices.len() {
            1 => 0,
            2 => 1,
            n => n,
        }
    }

    /// All edges have the length of the closing edge, within `EPS`.
    ///
    /// Triangles and smaller hulls count as regular.
    pub fn is_regular(&self) -> bool {
        let v = &self.vertices;
        let n = v.len();
        if n <= 3 {
            return true;
        }
        let closing = v[n - 1].distance(&v[0]);
        v.windows(2)
            .all(|w| (w[0].distance(&w[1]) - closing).abs() <= EPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        let pts: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
        Polygon::new(&pts)
    }

    #[test]
    fn unit_square_metrics() {
        let sq = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(sq.vertex_count(), 4);
        assert_eq!(sq.edge_count(), 4);
        assert!((sq.area() - 1.0).abs() < 1e-12);
        assert!((sq.perimeter() - 4.0).abs() < 1e-12);
        assert!(sq.is_regular());
        assert_eq!(sq.color(), Color::BLACK);
    }

    #[test]
    fn construction_normalizes_to_hull() {
        let p = poly(&[(1.0, 1.0), (0.0, 1.0), (0.5, 0.5), (0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            p.vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0)
            ]
        );
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let t = poly(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]);
        let c = t.centroid().unwrap();
        assert!((c.x - 1.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
        assert!(Polygon::default().centroid().is_none());
    }

    #[test]
    fn rectangle_is_not_regular() {
        let r = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        assert!(!r.is_regular());
        // Any triangle is regular under the edge-length rule.
        assert!(poly(&[(0.0, 0.0), (5.0, 0.0), (0.0, 1.0)]).is_regular());
    }

    #[test]
    fn regular_hexagon() {
        let pts: Vec<Point> = (0..6)
            .map(|k| {
                let a = std::f64::consts::FRAC_PI_3 * k as f64;
                Point::new(2.0 * a.cos(), 2.0 * a.sin())
            })
            .collect();
        let hex = Polygon::new(&pts);
        assert_eq!(hex.vertex_count(), 6);
        // Coordinates from trig are within a few ulps, well above EPS for lengths near 2.
        assert!((hex.perimeter() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_polygons() {
        let empty = Polygon::default();
        assert!(empty.is_empty());
        assert_eq!(empty.area(), 0.0);
        assert_eq!(empty.perimeter(), 0.0);
        assert_eq!(empty.edge_count(), 0);

        let dot = poly(&[(1.0, 1.0), (1.0, 1.0 + 1e-13)]);
        assert_eq!(dot.vertex_count(), 1);
        assert_eq!(dot.edge_count(), 0);
        assert_eq!(dot.perimeter(), 0.0);

        let seg = poly(&[(0.0, 0.0), (3.0, 4.0)]);
        assert_eq!(seg.edge_count(), 1);
        assert_eq!(seg.area(), 0.0);
        assert!((seg.perimeter() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn recoloring_keeps_geometry() {
        let sq = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let red = Color::new(1.0, 0.0, 0.0).unwrap();
        let recolored = sq.clone().recolored(red);
        assert_eq!(recolored.vertices(), sq.vertices());
        assert_eq!(recolored.color(), red);
        let direct = Polygon::with_color(sq.vertices(), red);
        assert_eq!(direct, recolored);
    }
}
