//! Axis-aligned extents and the bounding-box polygon.

use super::polygon::Polygon;
use super::types::Point;

/// Coordinate-wise minimum and maximum of a non-empty vertex set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub min: Point,
    pub max: Point,
}

impl Extents {
    pub fn of(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut e = Extents {
            min: *first,
            max: *first,
        };
        for p in rest {
            e.min.x = e.min.x.min(p.x);
            e.min.y = e.min.y.min(p.y);
            e.max.x = e.max.x.max(p.x);
            e.max.y = e.max.y.max(p.y);
        }
        Some(e)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Corners as (min,min), (min,max), (max,max), (max,min).
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.min.x, self.max.y),
            self.max,
            Point::new(self.max.x, self.min.y),
        ]
    }
}

impl Polygon {
    pub fn extents(&self) -> Option<Extents> {
        Extents::of(self.vertices())
    }

    /// Bounding rectangle as a new black polygon.
    ///
    /// The corners go through hull normalization like any other input, so the
    /// stored order is counter-clockwise from (min,min), not the order of
    /// [`Extents::corners`], and a flat box becomes a segment. Polygons with
    /// fewer than two vertices are returned unchanged.
    pub fn bbox(&self) -> Polygon {
        match self.extents() {
            Some(e) if self.vertex_count() >= 2 => Polygon::new(&e.corners()),
            _ => self.clone(),
        }
    }

    /// Extent along x; 0 for fewer than two vertices.
    pub fn width(&self) -> f64 {
        if self.vertex_count() < 2 {
            return 0.0;
        }
        self.extents().map_or(0.0, |e| e.width())
    }

    /// Extent along y; 0 for fewer than two vertices.
    pub fn height(&self) -> f64 {
        if self.vertex_count() < 2 {
            return 0.0;
        }
        self.extents().map_or(0.0, |e| e.height())
    }
}
