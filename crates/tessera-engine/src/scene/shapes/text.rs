use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Text draw payload, forwarded to the host untouched.
///
/// Shaping and measurement belong to the host; `rect` is the box the
/// layout system reserved, with its origin at the top-left of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub rect: Rect,
    pub text: String,
    /// Host-defined font handle.
    pub font_id: u16,
    pub font_size: f32,
    pub color: Color,
}

impl TextCmd {
    pub fn new(rect: Rect, text: impl Into<String>, font_id: u16, font_size: f32, color: Color) -> Self {
        Self { rect, text: text.into(), font_id, font_size, color }
    }
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        rect: Rect,
        text: impl Into<String>,
        font_id: u16,
        font_size: f32,
        color: Color,
    ) {
        self.push(DrawCmd::Text(TextCmd::new(rect, text, font_id, font_size, color)));
    }
}
