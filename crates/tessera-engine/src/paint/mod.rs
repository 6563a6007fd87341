//! Color model for mesh vertices.
//!
//! Commands carry colors in `0..=255` per channel. Tessellators normalize
//! them to `[0, 1]` in the alpha convention the host expects.

pub mod color;

pub use color::{AlphaMode, Color};
