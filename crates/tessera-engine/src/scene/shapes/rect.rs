use crate::coords::{CornerRadius, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Unrounded solid rectangle payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a background rectangle as layout systems describe it.
    ///
    /// The fill path rounds all four corners with one radius, taken from
    /// the top-left corner: a positive top-left radius records a
    /// [`RoundedRectCmd`](crate::scene::RoundedRectCmd), anything else a plain [`RectCmd`].
    pub fn push_rect(&mut self, rect: Rect, radii: CornerRadius, color: Color) {
        if radii.top_left > 0.0 {
            self.push_rounded_rect(rect, radii.top_left, color);
        } else {
            self.push_solid_rect(rect, color);
        }
    }

    /// Records an unrounded solid rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, color)));
    }
}
