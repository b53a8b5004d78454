//! Vertex-based 2D convex geometry.
//!
//! Purpose
//! - Keep one representation, `Polygon`, whose vertex list is always the convex
//!   hull of its construction input (CCW, pivot first).
//! - Make every tolerance explicit: all predicates compare against `EPS`.
//!
//! Layout
//! - `types`: `Point`, `Color`, `ColorError`.
//! - `predicates`: orientation tests, point-in-polygon, segment intersection.
//! - `hull`: angular-sweep convex hull.
//! - `polygon`: the `Polygon` value and its metrics.
//! - `ops`: intersection, union and containment.
//! - `bbox`: axis-aligned extents and bounding boxes.
//! - `rand`: reproducible random polygons for tests and benchmarks.

mod bbox;
mod hull;
mod ops;
mod polygon;
mod predicates;
pub mod rand;
mod types;

pub use bbox::Extents;
pub use hull::convex_hull;
pub use polygon::{closed_length, shoelace_area, Polygon};
pub use predicates::{
    aligned, left_of, point_in_convex_polygon, segment_intersection, strictly_left,
};
pub use types::{Color, ColorError, Point};

/// Absolute tolerance shared by every geometric predicate.
///
/// Fixed by design of the command language; not configurable.
pub const EPS: f64 = 1e-12;
