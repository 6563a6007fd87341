use crate::coords::{CornerRadius, EdgeWidths, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Stroked border drawn inside `rect`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderCmd {
    pub rect: Rect,
    pub radii: CornerRadius,
    pub widths: EdgeWidths,
    pub color: Color,
}

impl BorderCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadius, widths: EdgeWidths, color: Color) -> Self {
        Self { rect, radii, widths, color }
    }
}

impl DrawList {
    /// Records a border with per-corner radii and per-edge widths.
    #[inline]
    pub fn push_border(&mut self, rect: Rect, radii: CornerRadius, widths: EdgeWidths, color: Color) {
        self.push(DrawCmd::Border(BorderCmd::new(rect, radii, widths, color)));
    }
}
