//! Rendering module
//!
//! Frame composition is written against the `DrawSurface` trait; the browser
//! build plugs in a Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_scene;
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
