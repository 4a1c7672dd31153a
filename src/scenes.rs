//! Built-in demo scenes.
//!
//! Each scene is assembled the way any caller would use the canvas crate:
//! build shapes, attach shared textures, register them in paint order.

use std::rc::Rc;

use canvas::{Draw, ImageTexture, Point, Scene, Shape, ShapeError, Size, Texture};

/// Backing size for every demo texture. All of them tile on both axes.
const TEXTURE_SIDE: f64 = 10.0;

/// Which demo scene(s) to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneName {
    /// One of each shape kind, solid and checker textures.
    Primitives,
    /// Overlapping circles, including one that erases with a blank texture.
    Circles,
    /// Both scenes, in the order above.
    All,
}

impl SceneName {
    /// Build the selected scenes paired with their names.
    ///
    /// # Errors
    ///
    /// Propagates any shape validation failure.
    pub fn build(self) -> Result<Vec<(&'static str, Scene)>, ShapeError> {
        Ok(match self {
            Self::Primitives => vec![("primitives", primitives()?)],
            Self::Circles => vec![("circles", circles()?)],
            Self::All => vec![("primitives", primitives()?), ("circles", circles()?)],
        })
    }
}

fn texture_size() -> Result<Size, ShapeError> {
    Size::square(TEXTURE_SIDE)
}

fn solid(pixel: char) -> Result<Rc<dyn Texture>, ShapeError> {
    Ok(Rc::new(ImageTexture::solid(texture_size()?, pixel, true, true)))
}

fn checker(pixel1: char, pixel2: char) -> Result<Rc<dyn Texture>, ShapeError> {
    Ok(Rc::new(ImageTexture::checker(texture_size()?, pixel1, pixel2, true, true)))
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// 45x15: square, triangle, circle, ellipse and rectangle, painted in that order.
///
/// # Errors
///
/// Propagates any shape validation failure.
pub fn primitives() -> Result<Scene, ShapeError> {
    let plus = solid('+')?;
    let minus = solid('-')?;
    let ones_twos = checker('1', '2')?;

    let square = Shape::square(p(2.0, 2.0), 3.0)?.with_texture(minus);
    let triangle = Shape::triangle(p(10.0, 5.0), p(0.0, 10.0), p(20.0, 15.0))?.with_texture(ones_twos);
    let circle = Shape::circle(p(20.0, 5.0), 3.0)?.with_texture(plus);
    let ellipse = Shape::ellipse(p(25.0, 10.0), p(40.0, 3.0), 10.0)?;
    let rectangle = Shape::rectangle(p(6.0, 2.0), Size::new(6.0, 3.0)?);

    let mut scene = Scene::new(Size::new(45.0, 15.0)?);
    let drawings: Vec<Rc<dyn Draw>> =
        vec![Rc::new(square), Rc::new(triangle), Rc::new(circle), Rc::new(ellipse), Rc::new(rectangle)];
    scene.add_all(drawings);
    Ok(scene)
}

/// 45x19: two checkered disks, each partly covered by a smaller disk. The
/// left cover is solid `+`, the right one a blank texture that cuts a hole.
///
/// # Errors
///
/// Propagates any shape validation failure.
pub fn circles() -> Result<Scene, ShapeError> {
    let blank = solid(' ')?;
    let checkered = checker('X', 'x')?;
    let plus = solid('+')?;

    let mut scene = Scene::new(Size::new(45.0, 19.0)?);
    scene.add(Rc::new(Shape::circle(p(10.0, 9.0), 7.0)?.with_texture(Rc::clone(&checkered))));
    scene.add(Rc::new(Shape::circle(p(13.0, 9.0), 5.0)?.with_texture(plus)));
    scene.add(Rc::new(Shape::circle(p(35.0, 9.0), 7.0)?.with_texture(checkered)));
    scene.add(Rc::new(Shape::circle(p(32.0, 9.0), 5.0)?.with_texture(blank)));
    Ok(scene)
}

#[cfg(test)]
#[path = "scenes_test.rs"]
mod tests;
