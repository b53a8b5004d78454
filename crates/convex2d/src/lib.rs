//! Convex polygons in the plane: hull construction, metrics and set operations.
//!
//! Every `Polygon` stores the convex hull of the points it was built from, in
//! counter-clockwise order starting at its lowest-leftmost vertex. Degenerate
//! hulls (no vertex, one vertex, a segment) are ordinary values.
//!
//! API Policy
//! - This crate backs the `cli` front end of the workspace. There is no stable
//!   public API; prefer `prelude` imports in callers.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Color, ColorError, Extents, Point, Polygon, EPS};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_point_cloud, draw_polygon_radial, Bounds2, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        aligned, closed_length, convex_hull, left_of, point_in_convex_polygon,
        segment_intersection, shoelace_area, strictly_left, Color, ColorError, Extents, Point,
        Polygon, EPS,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by `b - a` and `c - a`.
/// Positive when a→b→c turns counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point, b: Point, c: Point) -> f64 {
    (b.to_vector() - a.to_vector()).perp(&(c.to_vector() - a.to_vector()))
}
