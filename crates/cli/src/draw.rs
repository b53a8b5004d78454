//! PNG rendering of a set of polygons on a fixed white canvas.

use anyhow::{Context, Result};
use convex2d::{Color, Extents, Point, Polygon};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as Pixel;
use std::path::Path;

/// Canvas side length in pixels.
pub const CANVAS: u32 = 500;

/// Maps plane coordinates onto the canvas: uniform scale, 1px margin, +y up.
struct Viewport {
    origin: Point,
    scale: f64,
}

impl Viewport {
    fn fit(extents: Extents) -> Self {
        let extent = extents.width().max(extents.height());
        let scale = if extent > 0.0 {
            f64::from(CANVAS - 2) / extent
        } else {
            1.0
        };
        Self {
            origin: extents.min,
            scale,
        }
    }

    fn pixel(&self, p: Point) -> Pixel<i32> {
        let x = ((p.x - self.origin.x) * self.scale) as i32 + 1;
        let y = ((p.y - self.origin.y) * self.scale) as i32 + 1;
        Pixel::new(x, CANVAS as i32 - 1 - y)
    }
}

fn rgb(c: Color) -> Rgb<u8> {
    let channel = |v: f64| (v * 255.0).round() as u8;
    Rgb([channel(c.r()), channel(c.g()), channel(c.b())])
}

fn paint(canvas: &mut RgbImage, view: &Viewport, poly: &Polygon) {
    let mut pixels: Vec<Pixel<i32>> = poly.vertices().iter().map(|&p| view.pixel(p)).collect();
    pixels.dedup();
    // draw_polygon_mut rejects an explicitly closed loop.
    while pixels.len() > 1 && pixels.first() == pixels.last() {
        pixels.pop();
    }
    let color = rgb(poly.color());
    match pixels.as_slice() {
        [] => {}
        [p] => {
            if let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y)) {
                if x < CANVAS && y < CANVAS {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
        [a, b] => draw_line_segment_mut(
            canvas,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            color,
        ),
        _ => draw_polygon_mut(canvas, &pixels, color),
    }
}

/// Render `polygons` in order (later ones on top), fitted to their joint extents.
pub fn render(polygons: &[&Polygon]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(CANVAS, CANVAS, Rgb([255, 255, 255]));
    let all: Vec<Point> = polygons
        .iter()
        .flat_map(|p| p.vertices().iter().copied())
        .collect();
    let Some(extents) = Extents::of(&all) else {
        return canvas;
    };
    let view = Viewport::fit(extents);
    for poly in polygons {
        paint(&mut canvas, &view, poly);
    }
    canvas
}

pub fn write_png(path: &Path, polygons: &[&Polygon]) -> Result<()> {
    render(polygons)
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}
