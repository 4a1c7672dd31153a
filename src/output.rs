//! Output formats for rendered scenes.

use std::io::Write;

use canvas::{Canvas, render};
use serde::Serialize;

/// How rendered scenes are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Bordered ASCII art, scenes separated by a blank line.
    Text,
    /// One JSON object per scene per line.
    Json,
}

/// JSON view of a rendered canvas.
#[derive(Debug, Serialize)]
pub struct RenderedScene<'a> {
    pub scene: &'a str,
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
}

impl<'a> RenderedScene<'a> {
    #[must_use]
    pub fn new(scene: &'a str, canvas: &Canvas) -> Self {
        Self {
            scene,
            width: canvas.width(),
            height: canvas.height(),
            rows: canvas.rows().map(|row| row.iter().collect()).collect(),
        }
    }
}

/// Write one rendered scene in `format`.
///
/// # Errors
///
/// Returns `Err` if writing fails or the JSON view cannot be serialized.
pub fn write_scene<W: Write>(out: &mut W, format: Format, name: &str, canvas: &Canvas, first: bool) -> Result<(), crate::CliError> {
    match format {
        Format::Text => {
            if !first {
                writeln!(out)?;
            }
            render::write_framed(canvas, out)?;
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, &RenderedScene::new(name, canvas))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
