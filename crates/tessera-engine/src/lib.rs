//! Tessera engine crate.
//!
//! Turns rounded rectangles and rounded borders into small triangle meshes
//! that a host rasterizer can draw in one call per shape, and dispatches a
//! stream of draw commands against a host [`render::Surface`].

pub mod coords;
pub mod error;
pub mod logging;
pub mod mesh;
pub mod paint;
pub mod render;
pub mod scene;
pub mod tessellate;

pub use error::TessError;
