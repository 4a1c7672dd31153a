//! Membership tests: is a canvas point inside a shape?
//!
//! These are plain functions over shape parameters so they can be exercised
//! without building a [`crate::shape::Shape`]. Rectangles and squares have no
//! test of their own; their bounding box is the whole region.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::CIRCLE_TOLERANCE;
use crate::geom::{Point, distance};

/// Inside the disk of `radius` around `center`, with grid slack on the rim.
#[must_use]
pub fn in_circle(point: Point, center: Point, radius: f64) -> bool {
    distance(point, center) <= radius + CIRCLE_TOLERANCE
}

/// Inside the ellipse with foci `focus_1`, `focus_2` and semi-major axis
/// `semi_major`.
#[must_use]
pub fn in_ellipse(point: Point, focus_1: Point, focus_2: Point, semi_major: f64) -> bool {
    distance(point, focus_1) + distance(point, focus_2) <= semi_major * 2.0
}

/// Twice the signed area of the triangle `a, b, c`; zero when collinear.
#[must_use]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    (c.y - a.y) * (b.x - a.x) - (c.x - a.x) * (b.y - a.y)
}

/// True when the three points lie on one line.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_collinear(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) == 0.0
}

/// Edge vectors of a triangle taken from its first vertex.
///
/// The point test divides by `primary.x`, so a vertical first edge is swapped
/// with the second one. For a non-degenerate triangle at most one of the two
/// edges can be vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBasis {
    origin: Point,
    primary: Point,
    secondary: Point,
}

impl EdgeBasis {
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn new(vertices: &[Point; 3]) -> Self {
        let origin = vertices[0];
        let mut primary = vertices[1].offset_from(origin);
        let mut secondary = vertices[2].offset_from(origin);
        if primary.x == 0.0 {
            std::mem::swap(&mut primary, &mut secondary);
        }
        Self { origin, primary, secondary }
    }

    /// Solve `point - origin = n * primary + m * secondary` and accept when
    /// both weights are non-negative and sum to at most one.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let v = point.offset_from(self.origin);
        let (e1, e2) = (self.primary, self.secondary);

        let m = (v.x * e1.y - e1.x * v.y) / (e2.x * e1.y - e1.x * e2.y);
        if !(0.0..=1.0).contains(&m) {
            return false;
        }
        let n = (v.x - m * e2.x) / e1.x;
        n >= 0.0 && m + n <= 1.0
    }
}
