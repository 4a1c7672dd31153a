//! Geometry value types: points, sizes, bounding boxes.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// A point in canvas space. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    #[must_use]
    pub fn offset_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Non-negative width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Build a size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either component is negative or NaN.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        if !(width >= 0.0 && height >= 0.0) {
            return Err(ShapeError::InvalidParameter(format!("size {width}x{height} has a negative component")));
        }
        Ok(Self { width, height })
    }

    /// Square size; `side` must be non-negative.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `side` is negative or NaN.
    pub fn square(side: f64) -> Result<Self, ShapeError> {
        Self::new(side, side)
    }

    /// Size from components the caller has already checked.
    pub(crate) fn from_checked(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Axis-aligned box: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoundingBox {
    pub position: Point,
    pub size: Size,
}

impl BoundingBox {
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Box spanning `min..=max`, inflated by one cell on the high side so the
    /// last row and column are covered.
    ///
    /// Callers guarantee `min <= max` on both axes.
    #[must_use]
    pub(crate) fn inclusive(min: Point, max: Point) -> Self {
        Self {
            position: min,
            size: Size::from_checked(max.x - min.x + 1.0, max.y - min.y + 1.0),
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}
