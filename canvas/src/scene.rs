//! Scene: the ordered registry of drawables and the canvas they render to.
//!
//! Drawables are held by shared reference and keyed by a [`DrawingId`] handed
//! out in increasing order. Rendering walks the registry in id order, so a
//! drawable registered later paints over anything registered before it.
//!
//! The configured canvas size does not restrict what can be registered;
//! anything outside it is clipped during rendering.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::BTreeMap;
use std::io;
use std::rc::Rc;

use tracing::debug;

use crate::geom::Size;
use crate::grid::Canvas;
use crate::render;

/// Identifier assigned to a registered drawable. Never reused by a scene.
pub type DrawingId = usize;

/// Anything that can paint itself onto a canvas.
pub trait Draw {
    fn draw(&self, canvas: &mut Canvas);
}

/// Ordered collection of drawables plus the target canvas size.
pub struct Scene {
    size: Size,
    drawings: BTreeMap<DrawingId, Rc<dyn Draw>>,
    next_id: DrawingId,
}

impl Scene {
    /// Create an empty scene rendering to a canvas of `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size, drawings: BTreeMap::new(), next_id: 0 }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Change the canvas size used by subsequent renders.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Register `drawing` on top of everything already registered.
    pub fn add(&mut self, drawing: Rc<dyn Draw>) -> DrawingId {
        let id = self.next_id;
        self.next_id += 1;
        self.drawings.insert(id, drawing);
        debug!(id, "drawing registered");
        id
    }

    /// Register several drawables in order, returning their ids in the same order.
    pub fn add_all<I>(&mut self, drawings: I) -> Vec<DrawingId>
    where
        I: IntoIterator<Item = Rc<dyn Draw>>,
    {
        drawings.into_iter().map(|d| self.add(d)).collect()
    }

    /// Return the drawable registered under `id`.
    #[must_use]
    pub fn get(&self, id: DrawingId) -> Option<&Rc<dyn Draw>> {
        self.drawings.get(&id)
    }

    /// Registered ids in paint order.
    pub fn ids(&self) -> impl Iterator<Item = DrawingId> + '_ {
        self.drawings.keys().copied()
    }

    /// Number of registered drawables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    /// Paint every drawable, oldest first, onto a fresh blank canvas.
    #[must_use]
    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::blank(self.size);
        for drawing in self.drawings.values() {
            drawing.draw(&mut canvas);
        }
        debug!(
            drawings = self.drawings.len(),
            width = canvas.width(),
            height = canvas.height(),
            "scene rendered"
        );
        canvas
    }

    /// Render and frame the scene as text.
    #[must_use]
    pub fn to_text(&self) -> String {
        render::framed(&self.render())
    }

    /// Render and write the framed scene to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        render::write_framed(&self.render(), out)
    }
}
