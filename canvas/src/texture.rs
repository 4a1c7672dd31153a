//! Textures: rules mapping a canvas point to a fill character.
//!
//! A texture is read-only once built and is shared between shapes through
//! `Rc<dyn Texture>`. Sampling can come back empty, in which case the shape
//! keeps its default fill for that pixel.

#[cfg(test)]
#[path = "texture_test.rs"]
mod texture_test;

use std::fmt;

use crate::geom::{Point, Size};
use crate::grid::Canvas;

/// Something that can supply a fill character for a point.
pub trait Texture: fmt::Debug {
    /// Character at `point`, or `None` when the texture has no coverage there.
    fn sample(&self, point: Point) -> Option<char>;

    /// Overwrite `pixel` with the sample at `point`, if there is one.
    fn apply(&self, pixel: &mut char, point: Point) {
        if let Some(ch) = self.sample(point) {
            *pixel = ch;
        }
    }
}

/// Texture backed by a small character image, optionally tiled per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTexture {
    image: Canvas,
    repeat_x: bool,
    repeat_y: bool,
}

impl ImageTexture {
    #[must_use]
    pub fn new(image: Canvas, repeat_x: bool, repeat_y: bool) -> Self {
        Self { image, repeat_x, repeat_y }
    }

    /// Single-character fill.
    ///
    /// A repeating axis collapses to one cell, so the sample no longer depends
    /// on the coordinate along that axis.
    #[must_use]
    pub fn solid(size: Size, pixel: char, repeat_x: bool, repeat_y: bool) -> Self {
        let width = if repeat_x { 1.0 } else { size.width() };
        let height = if repeat_y { 1.0 } else { size.height() };
        Self::new(Canvas::new(Size::from_checked(width, height), pixel), repeat_x, repeat_y)
    }

    /// Checkerboard of `pixel1` on even `row + col` and `pixel2` on odd.
    #[must_use]
    pub fn checker(size: Size, pixel1: char, pixel2: char, repeat_x: bool, repeat_y: bool) -> Self {
        let mut image = Canvas::blank(size);
        for row in 0..image.height() {
            for col in 0..image.width() {
                let pixel = if (row + col) % 2 == 1 { pixel2 } else { pixel1 };
                image.set(row, col, pixel);
            }
        }
        Self::new(image, repeat_x, repeat_y)
    }

    /// Backing image.
    #[must_use]
    pub fn image(&self) -> &Canvas {
        &self.image
    }

    #[must_use]
    pub fn repeat_x(&self) -> bool {
        self.repeat_x
    }

    #[must_use]
    pub fn repeat_y(&self) -> bool {
        self.repeat_y
    }
}

impl Texture for ImageTexture {
    fn sample(&self, point: Point) -> Option<char> {
        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (self.image.width() as f64, self.image.height() as f64);

        let x = wrap(point.x, width, self.repeat_x)?;
        let y = wrap(point.y, height, self.repeat_y)?;
        if !(x >= 0.0 && y >= 0.0 && x < width && y < height) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (row, col) = (y as usize, x as usize);
        self.image.get(row, col)
    }
}

/// Fold `coord` into `0..extent` when the axis repeats. An empty repeating
/// axis has nothing to sample.
fn wrap(coord: f64, extent: f64, repeat: bool) -> Option<f64> {
    if !repeat {
        return Some(coord);
    }
    if extent <= 0.0 {
        return None;
    }
    Some(coord.rem_euclid(extent))
}
