use anyhow::Result;
use convex2d::{Point, Polygon};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

use crate::store;

/// Metrics of one stored polygon, as printed by `cli report`.
#[derive(Serialize, Debug)]
pub struct PolygonSummary {
    pub name: String,
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub perimeter: f64,
    pub centroid: Option<[f64; 2]>,
    pub edges: usize,
    pub regular: bool,
    pub width: f64,
    pub height: f64,
}

impl PolygonSummary {
    pub fn new(name: &str, poly: &Polygon) -> Self {
        let xy = |p: Point| [p.x, p.y];
        Self {
            name: name.to_string(),
            vertices: poly.vertices().iter().copied().map(xy).collect(),
            area: poly.area(),
            perimeter: poly.perimeter(),
            centroid: poly.centroid().map(xy),
            edges: poly.edge_count(),
            regular: poly.is_regular(),
            width: poly.width(),
            height: poly.height(),
        }
    }
}

/// JSON document summarizing every polygon stored in `input`.
pub fn report(input: &Path) -> Result<Value> {
    let polygons: Vec<PolygonSummary> = store::load(input)?
        .into_iter()
        .map(|(name, points)| PolygonSummary::new(&name, &Polygon::new(&points)))
        .collect();
    Ok(json!({
        "version": convex2d::VERSION,
        "input": input.to_string_lossy(),
        "polygons": polygons,
    }))
}
