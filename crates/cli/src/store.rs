//! Plain-text polygon files: one `NAME x1 y1 x2 y2 ...` line per polygon.

use anyhow::{bail, Context, Result};
use convex2d::{Point, Polygon};
use std::fs;
use std::path::Path;

use crate::command::parse_points;

fn format_line(name: &str, vertices: &[Point]) -> String {
    let mut line = name.to_string();
    for p in vertices {
        line.push_str(&format!(" {} {}", p.x, p.y));
    }
    line
}

/// Write the hull vertices of each `(name, polygon)` pair, in order.
pub fn save(path: &Path, entries: &[(&str, &Polygon)]) -> Result<()> {
    let mut text = String::new();
    for (name, poly) in entries {
        text.push_str(&format_line(name, poly.vertices()));
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Read every non-blank line as a name followed by coordinate pairs.
pub fn load(path: &Path) -> Result<Vec<(String, Vec<Point>)>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((name, coords)) = tokens.split_first() else {
            continue;
        };
        match parse_points(coords) {
            Ok(points) => out.push((name.to_string(), points)),
            Err(e) => bail!("{}:{}: {e}", path.display(), i + 1),
        }
    }
    Ok(out)
}
