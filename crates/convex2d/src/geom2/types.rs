//! Basic 2D value types.
//!
//! - `Point`: immutable coordinate pair with exact equality.
//! - `Color`: RGB triple validated to [0,1] at construction.

use nalgebra::Vector2;
use thiserror::Error;

/// A point (or vector) in the plane.
///
/// Equality is exact (`f64 ==` per coordinate); tolerant comparisons live in
/// `predicates`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to `p`.
    #[inline]
    pub fn distance(&self, p: &Point) -> f64 {
        (self.to_vector() - p.to_vector()).norm()
    }

    /// Distance to the origin.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Polar angle as `atan(y / x)`.
    ///
    /// Quadrants are not resolved: `(-1, -1)` and `(1, 1)` share the angle π/4.
    /// On the y axis the angle is π/2, and the origin has angle 0.
    pub fn angle(&self) -> f64 {
        if self.x == 0.0 {
            if self.y == 0.0 {
                return 0.0;
            }
            return std::f64::consts::FRAC_PI_2;
        }
        (self.y / self.x).atan()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Rejected color component.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ColorError {
    #[error("color component {channel} = {value} is outside [0, 1]")]
    OutOfRange { channel: char, value: f64 },
}

/// RGB color with every component in [0, 1]. Defaults to black.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Build a color, rejecting components outside [0, 1] (NaN included).
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self, ColorError> {
        for (channel, value) in [('R', r), ('G', g), ('B', b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::OutOfRange { channel, value });
            }
        }
        Ok(Self { r, g, b })
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
}
