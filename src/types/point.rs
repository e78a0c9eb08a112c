//! 2D point value type.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{Result, StencilError};

/// A point in the 2D plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = StencilError;

    /// Parse a point from `x,y` form, e.g. `3,5` or `0.5,-2`.
    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s.split_once(',').ok_or_else(|| StencilError::Parse {
            message: format!("Invalid point: {}", s),
            help: Some("Use x,y format like 3,5 or 0.5,-2".to_string()),
        })?;

        Ok(Self::new(parse_coordinate(x)?, parse_coordinate(y)?))
    }
}

/// Parse a single coordinate.
fn parse_coordinate(s: &str) -> Result<f64> {
    s.trim().parse().map_err(|_| StencilError::Parse {
        message: format!("Invalid coordinate: {}", s.trim()),
        help: None,
    })
}
