//! Rendering: rasterizes shapes onto a [`Canvas`] and frames canvases as text.
//!
//! [`fill`] is the single pixel loop every shape goes through. It receives the
//! shape's bounding box, its membership test and its texture, and never reads
//! anything else from the shape. [`framed`] produces the bordered text layout:
//!
//! ```text
//! ~ ~ ~ ~ ~
//! ~ . + . ~
//! ~ ~ ~ ~ ~
//! ```

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::io;

use crate::consts::{BORDER, CELL_SEPARATOR, DEFAULT_FILL};
use crate::geom::{BoundingBox, Point};
use crate::grid::Canvas;
use crate::texture::Texture;

/// Paint every point of `bounds` (clipped to the canvas) for which `contains`
/// holds.
///
/// Points start at the clipped top-left corner and advance one cell at a time.
/// Each covered pixel gets [`DEFAULT_FILL`], overwritten by the texture sample
/// when there is one.
pub fn fill(canvas: &mut Canvas, bounds: BoundingBox, texture: Option<&dyn Texture>, contains: impl Fn(Point) -> bool) {
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (canvas.width() as f64, canvas.height() as f64);

    let x_start = bounds.position.x.max(0.0);
    let x_end = bounds.right().min(width);
    let y_start = bounds.position.y.max(0.0);
    let y_end = bounds.bottom().min(height);

    let mut x = x_start;
    while x < x_end {
        let mut y = y_start;
        while y < y_end {
            let point = Point::new(x, y);
            if contains(point) {
                let mut pixel = DEFAULT_FILL;
                if let Some(texture) = texture {
                    texture.apply(&mut pixel, point);
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let (row, col) = (y as usize, x as usize);
                canvas.set(row, col, pixel);
            }
            y += 1.0;
        }
        x += 1.0;
    }
}

/// The canvas framed by a border of [`BORDER`] units, one line per row.
#[must_use]
pub fn framed(canvas: &Canvas) -> String {
    // Each cell prints as two characters, plus two border units per line.
    let line_len = (canvas.width() + 2) * 2 + 1;
    let mut out = String::with_capacity(line_len * (canvas.height() + 2));

    push_border_line(&mut out, canvas.width());
    for row in canvas.rows() {
        out.push_str(BORDER);
        for &ch in row {
            out.push(ch);
            out.push(CELL_SEPARATOR);
        }
        out.push_str(BORDER);
        out.push('\n');
    }
    push_border_line(&mut out, canvas.width());
    out
}

/// Write [`framed`] output to `out`.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_framed<W: io::Write>(canvas: &Canvas, out: &mut W) -> io::Result<()> {
    out.write_all(framed(canvas).as_bytes())
}

fn push_border_line(out: &mut String, width: usize) {
    for _ in 0..width + 2 {
        out.push_str(BORDER);
    }
    out.push('\n');
}
