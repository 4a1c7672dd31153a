//! Shapes: circle, ellipse, square, rectangle and triangle.
//!
//! Each geometry type owns its defining parameters and a derived bounding box.
//! Constructors and mutators validate the candidate parameters first and only
//! then commit and recompute the box, so a failed call leaves the value exactly
//! as it was and the box is never stale.
//!
//! [`Shape`] pairs a [`Geometry`] with an optional shared texture and is what
//! gets registered with a [`crate::scene::Scene`].

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::rc::Rc;

use serde::Serialize;

use crate::error::ShapeError;
use crate::geom::{BoundingBox, Point, Size, distance};
use crate::grid::Canvas;
use crate::hit::{self, EdgeBasis};
use crate::render;
use crate::scene::Draw;
use crate::texture::Texture;

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Square,
    Rectangle,
    Triangle,
}

// =============================================================
// Validation
// =============================================================

fn check_non_negative(what: &str, value: f64) -> Result<(), ShapeError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidParameter(format!("{what} {value} < 0")))
    }
}

fn check_foci(focus_1: Point, focus_2: Point, semi_major: f64) -> Result<(), ShapeError> {
    let span = distance(focus_1, focus_2);
    if span < semi_major * 2.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidParameter(format!(
            "ellipse focal distance {span} must be below twice the semi-major axis {semi_major}"
        )))
    }
}

fn check_vertices(vertices: &[Point; 3]) -> Result<(), ShapeError> {
    let [a, b, c] = *vertices;
    if hit::is_collinear(a, b, c) {
        return Err(ShapeError::DegenerateShape("triangle vertices are collinear".into()));
    }
    Ok(())
}

// =============================================================
// Circle
// =============================================================

/// Disk around `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    bounds: BoundingBox,
}

impl Circle {
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `radius` is negative.
    pub fn new(center: Point, radius: f64) -> Result<Self, ShapeError> {
        check_non_negative("circle radius", radius)?;
        Ok(Self { center, radius, bounds: Self::bounds_for(center, radius) })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
        self.bounds = Self::bounds_for(self.center, self.radius);
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// # Errors
    ///
    /// Returns `InvalidParameter` if `radius` is negative; the circle is unchanged.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        check_non_negative("circle radius", radius)?;
        self.radius = radius;
        self.bounds = Self::bounds_for(self.center, self.radius);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        hit::in_circle(point, self.center, self.radius)
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn bounds_for(center: Point, radius: f64) -> BoundingBox {
        BoundingBox::inclusive(
            Point::new(center.x - radius, center.y - radius),
            Point::new(center.x + radius, center.y + radius),
        )
    }
}

// =============================================================
// Ellipse
// =============================================================

/// Ellipse given by its two foci and semi-major axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    focus_1: Point,
    focus_2: Point,
    semi_major: f64,
    bounds: BoundingBox,
}

impl Ellipse {
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless the foci are closer than `2 * semi_major`.
    pub fn new(focus_1: Point, focus_2: Point, semi_major: f64) -> Result<Self, ShapeError> {
        check_foci(focus_1, focus_2, semi_major)?;
        Ok(Self { focus_1, focus_2, semi_major, bounds: Self::bounds_for(focus_1, focus_2, semi_major) })
    }

    #[must_use]
    pub fn focus_1(&self) -> Point {
        self.focus_1
    }

    /// # Errors
    ///
    /// Returns `InvalidParameter` if the new focus would degenerate the ellipse.
    pub fn set_focus_1(&mut self, focus: Point) -> Result<(), ShapeError> {
        check_foci(focus, self.focus_2, self.semi_major)?;
        self.focus_1 = focus;
        self.refresh();
        Ok(())
    }

    #[must_use]
    pub fn focus_2(&self) -> Point {
        self.focus_2
    }

    /// # Errors
    ///
    /// Returns `InvalidParameter` if the new focus would degenerate the ellipse.
    pub fn set_focus_2(&mut self, focus: Point) -> Result<(), ShapeError> {
        check_foci(self.focus_1, focus, self.semi_major)?;
        self.focus_2 = focus;
        self.refresh();
        Ok(())
    }

    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// # Errors
    ///
    /// Returns `InvalidParameter` if the axis is too short for the current foci.
    pub fn set_semi_major(&mut self, semi_major: f64) -> Result<(), ShapeError> {
        check_foci(self.focus_1, self.focus_2, semi_major)?;
        self.semi_major = semi_major;
        self.refresh();
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        hit::in_ellipse(point, self.focus_1, self.focus_2, self.semi_major)
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn refresh(&mut self) {
        self.bounds = Self::bounds_for(self.focus_1, self.focus_2, self.semi_major);
    }

    fn bounds_for(f1: Point, f2: Point, a: f64) -> BoundingBox {
        BoundingBox::inclusive(
            Point::new(f1.x.min(f2.x) - a, f1.y.min(f2.y) - a),
            Point::new(f1.x.max(f2.x) + a, f1.y.max(f2.y) + a),
        )
    }
}

// =============================================================
// Square / Rectangle
// =============================================================

/// Axis-aligned square anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    corner: Point,
    side: f64,
    bounds: BoundingBox,
}

impl Square {
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `side` is negative.
    pub fn new(corner: Point, side: f64) -> Result<Self, ShapeError> {
        let extent = Size::square(side)?;
        Ok(Self { corner, side, bounds: BoundingBox::new(corner, extent) })
    }

    #[must_use]
    pub fn corner(&self) -> Point {
        self.corner
    }

    pub fn set_corner(&mut self, corner: Point) {
        self.corner = corner;
        self.bounds.position = corner;
    }

    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// # Errors
    ///
    /// Returns `InvalidParameter` if `side` is negative; the square is unchanged.
    pub fn set_side(&mut self, side: f64) -> Result<(), ShapeError> {
        let extent = Size::square(side)?;
        self.side = side;
        self.bounds.size = extent;
        Ok(())
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    bounds: BoundingBox,
}

impl Rectangle {
    #[must_use]
    pub fn new(corner: Point, extent: Size) -> Self {
        Self { bounds: BoundingBox::new(corner, extent) }
    }

    #[must_use]
    pub fn corner(&self) -> Point {
        self.bounds.position
    }

    pub fn set_corner(&mut self, corner: Point) {
        self.bounds.position = corner;
    }

    #[must_use]
    pub fn extent(&self) -> Size {
        self.bounds.size
    }

    pub fn set_extent(&mut self, extent: Size) {
        self.bounds.size = extent;
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }
}

// =============================================================
// Triangle
// =============================================================

/// Triangle over three non-collinear vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
    basis: EdgeBasis,
    bounds: BoundingBox,
}

impl Triangle {
    /// # Errors
    ///
    /// Returns `DegenerateShape` if the vertices are collinear.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, ShapeError> {
        let vertices = [a, b, c];
        check_vertices(&vertices)?;
        Ok(Self { vertices, basis: EdgeBasis::new(&vertices), bounds: Self::bounds_for(&vertices) })
    }

    /// Vertex `index` (0, 1 or 2).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for any other index.
    pub fn vertex(&self, index: usize) -> Result<Point, ShapeError> {
        self.vertices.get(index).copied().ok_or(ShapeError::IndexOutOfRange { index })
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// Move vertex `index` to `point`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for an index outside `0..3`, or
    /// `DegenerateShape` if the move would make the vertices collinear. The
    /// triangle is unchanged in both cases.
    pub fn set_vertex(&mut self, index: usize, point: Point) -> Result<(), ShapeError> {
        let mut candidate = self.vertices;
        let slot = candidate.get_mut(index).ok_or(ShapeError::IndexOutOfRange { index })?;
        *slot = point;
        check_vertices(&candidate)?;

        self.vertices = candidate;
        self.basis = EdgeBasis::new(&self.vertices);
        self.bounds = Self::bounds_for(&self.vertices);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.basis.contains(point)
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn bounds_for(vertices: &[Point; 3]) -> BoundingBox {
        let (mut min, mut max) = (vertices[0], vertices[0]);
        for v in &vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        BoundingBox::inclusive(min, max)
    }
}

// =============================================================
// Geometry
// =============================================================

/// One of the supported shape geometries.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle(Circle),
    Ellipse(Ellipse),
    Square(Square),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Square(_) => ShapeKind::Square,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Membership test in canvas coordinates. Squares and rectangles cover
    /// their whole bounding box.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Circle(c) => c.contains(point),
            Self::Ellipse(e) => e.contains(point),
            Self::Square(_) | Self::Rectangle(_) => true,
            Self::Triangle(t) => t.contains(point),
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Circle(c) => c.bounding_box(),
            Self::Ellipse(e) => e.bounding_box(),
            Self::Square(s) => s.bounding_box(),
            Self::Rectangle(r) => r.bounding_box(),
            Self::Triangle(t) => t.bounding_box(),
        }
    }
}

impl From<Circle> for Geometry {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Ellipse> for Geometry {
    fn from(value: Ellipse) -> Self {
        Self::Ellipse(value)
    }
}

impl From<Square> for Geometry {
    fn from(value: Square) -> Self {
        Self::Square(value)
    }
}

impl From<Rectangle> for Geometry {
    fn from(value: Rectangle) -> Self {
        Self::Rectangle(value)
    }
}

impl From<Triangle> for Geometry {
    fn from(value: Triangle) -> Self {
        Self::Triangle(value)
    }
}

// =============================================================
// Shape
// =============================================================

/// A geometry plus an optional texture shared with other shapes.
///
/// Cloning copies the geometry and shares the texture.
#[derive(Debug, Clone)]
pub struct Shape {
    geometry: Geometry,
    texture: Option<Rc<dyn Texture>>,
}

impl Shape {
    #[must_use]
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self { geometry: geometry.into(), texture: None }
    }

    /// # Errors
    ///
    /// See [`Circle::new`].
    pub fn circle(center: Point, radius: f64) -> Result<Self, ShapeError> {
        Circle::new(center, radius).map(Self::new)
    }

    /// # Errors
    ///
    /// See [`Ellipse::new`].
    pub fn ellipse(focus_1: Point, focus_2: Point, semi_major: f64) -> Result<Self, ShapeError> {
        Ellipse::new(focus_1, focus_2, semi_major).map(Self::new)
    }

    /// # Errors
    ///
    /// See [`Square::new`].
    pub fn square(corner: Point, side: f64) -> Result<Self, ShapeError> {
        Square::new(corner, side).map(Self::new)
    }

    #[must_use]
    pub fn rectangle(corner: Point, extent: Size) -> Self {
        Self::new(Rectangle::new(corner, extent))
    }

    /// # Errors
    ///
    /// See [`Triangle::new`].
    pub fn triangle(a: Point, b: Point, c: Point) -> Result<Self, ShapeError> {
        Triangle::new(a, b, c).map(Self::new)
    }

    /// Builder form of [`Shape::set_texture`].
    #[must_use]
    pub fn with_texture(mut self, texture: Rc<dyn Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn set_texture(&mut self, texture: Rc<dyn Texture>) {
        self.texture = Some(texture);
    }

    pub fn clear_texture(&mut self) {
        self.texture = None;
    }

    #[must_use]
    pub fn texture(&self) -> Option<&Rc<dyn Texture>> {
        self.texture.as_ref()
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Mutable access for the per-geometry setters, which keep the bounding
    /// box in sync themselves.
    pub fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.geometry.bounding_box()
    }

    /// Top-left corner of the bounding box.
    #[must_use]
    pub fn position(&self) -> Point {
        self.bounding_box().position
    }

    /// Extent of the bounding box.
    #[must_use]
    pub fn size(&self) -> Size {
        self.bounding_box().size
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.geometry.contains(point)
    }

    /// Paint the shape onto `canvas`, clipped to its extent.
    pub fn render(&self, canvas: &mut Canvas) {
        render::fill(canvas, self.bounding_box(), self.texture.as_deref(), |p| self.contains(p));
    }
}

impl Draw for Shape {
    fn draw(&self, canvas: &mut Canvas) {
        self.render(canvas);
    }
}
