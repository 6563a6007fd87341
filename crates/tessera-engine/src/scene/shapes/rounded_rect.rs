use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled rectangle with all four corners rounded by one radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub color: Color,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radius: f32, color: Color) -> Self {
        Self { rect, radius, color }
    }
}

impl DrawList {
    /// Records a rounded rectangle fill.
    #[inline]
    pub fn push_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radius, color)));
    }
}
