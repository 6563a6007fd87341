//! Geometry types shared by the tessellators and the dispatcher.
//!
//! Canonical space:
//! - surface pixels (already scaled for the display)
//! - origin top-left
//! - +X right, +Y down, angles increase clockwise on screen

mod corner_radii;
mod edge_widths;
mod rect;
mod vec2;

pub use corner_radii::{Corner, CornerRadius};
pub use edge_widths::{Edge, EdgeWidths};
pub use rect::Rect;
pub use vec2::Vec2;

/// Replaces negative values and NaN with zero.
///
/// `+inf` passes through so callers clamp it to their own upper bound.
#[inline]
pub(crate) fn non_negative(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}
