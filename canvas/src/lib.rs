//! Character-grid renderer for simple textured shapes.
//!
//! Shapes (circles, ellipses, squares, rectangles, triangles) are built with
//! validated parameters, optionally given a shared texture, and registered
//! with a [`scene::Scene`]. Rendering paints them onto a fixed-size
//! [`grid::Canvas`] in registration order, so later shapes cover earlier ones,
//! and the result is framed as bordered ASCII text.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | `Point`, `Size`, `BoundingBox`, `distance` |
//! | [`grid`] | The character canvas |
//! | [`texture`] | `Texture` trait and solid/checker image textures |
//! | [`hit`] | Per-shape membership tests |
//! | [`shape`] | Shape geometries and the textured `Shape` |
//! | [`render`] | Shared pixel loop and text framing |
//! | [`scene`] | Ordered drawing registry |
//! | [`error`] | `ShapeError` |
//! | [`consts`] | Fill characters, tolerances, border strings |

pub mod consts;
pub mod error;
pub mod geom;
pub mod grid;
pub mod hit;
pub mod render;
pub mod scene;
pub mod shape;
pub mod texture;

pub use error::ShapeError;
pub use geom::{BoundingBox, Point, Size, distance};
pub use grid::Canvas;
pub use scene::{Draw, DrawingId, Scene};
pub use shape::{Circle, Ellipse, Geometry, Rectangle, Shape, ShapeKind, Square, Triangle};
pub use texture::{ImageTexture, Texture};
