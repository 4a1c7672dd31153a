//! Fixed-size character grid that shapes are painted onto.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::BACKGROUND;
use crate::geom::Size;

/// A rectangular grid of characters, indexed row first.
///
/// Dimensions are fixed at construction. Fractional size components are
/// truncated to whole cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    /// Allocate a canvas of `size` filled with `fill`.
    #[must_use]
    pub fn new(size: Size, fill: char) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (size.width() as usize, size.height() as usize);
        Self { width, height, cells: vec![vec![fill; width]; height] }
    }

    /// Allocate a canvas of `size` filled with the background character.
    #[must_use]
    pub fn blank(size: Size) -> Self {
        Self::new(size, BACKGROUND)
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        #[allow(clippy::cast_precision_loss)]
        let (w, h) = (self.width as f64, self.height as f64);
        Size::from_checked(w, h)
    }

    /// Row `index`, or `None` past the last row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[char]> {
        self.cells.get(index).map(Vec::as_slice)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Character at `(row, col)`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite the character at `(row, col)`. Returns false and leaves the
    /// grid untouched when the cell is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, ch: char) -> bool {
        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
            return false;
        };
        *cell = ch;
        true
    }

    /// Row `index` collected into a `String`.
    #[must_use]
    pub fn row_string(&self, index: usize) -> Option<String> {
        self.row(index).map(|r| r.iter().collect())
    }
}
