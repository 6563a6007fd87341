use crate::coords::Rect;
use crate::scene::shapes::{BorderCmd, ImageCmd, RectCmd, RoundedRectCmd, TextCmd};

/// Renderer-agnostic draw command stream element.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - handle the variant in `render::dispatch`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Unrounded solid rectangle; drawn by the host without tessellation.
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Border(BorderCmd),
    Text(TextCmd),
    Image(ImageCmd),
    /// Restricts drawing to a region until the matching `ClipEnd`.
    ClipStart(Rect),
    ClipEnd,
}

impl DrawCmd {
    /// Short name used in logs and error context.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::Border(_) => "border",
            DrawCmd::Text(_) => "text",
            DrawCmd::Image(_) => "image",
            DrawCmd::ClipStart(_) => "clip_start",
            DrawCmd::ClipEnd => "clip_end",
        }
    }

    /// Bounding box of the command, if it has one.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            DrawCmd::Rect(c) => Some(c.rect),
            DrawCmd::RoundedRect(c) => Some(c.rect),
            DrawCmd::Border(c) => Some(c.rect),
            DrawCmd::Text(c) => Some(c.rect),
            DrawCmd::Image(c) => Some(c.rect),
            DrawCmd::ClipStart(r) => Some(*r),
            DrawCmd::ClipEnd => None,
        }
    }

    /// Converts layout units to surface pixels.
    ///
    /// Boxes, radii and stroke widths are multiplied by `factor`. Text keeps
    /// its font size; the host's font faces are expected at surface scale.
    pub fn scaled(&self, factor: f32) -> DrawCmd {
        match self {
            DrawCmd::Rect(c) => DrawCmd::Rect(RectCmd { rect: c.rect.scaled(factor), ..*c }),
            DrawCmd::RoundedRect(c) => DrawCmd::RoundedRect(RoundedRectCmd {
                rect: c.rect.scaled(factor),
                radius: c.radius * factor,
                ..*c
            }),
            DrawCmd::Border(c) => DrawCmd::Border(BorderCmd {
                rect: c.rect.scaled(factor),
                radii: c.radii.scaled(factor),
                widths: c.widths.scaled(factor),
                ..*c
            }),
            DrawCmd::Text(c) => DrawCmd::Text(TextCmd { rect: c.rect.scaled(factor), ..c.clone() }),
            DrawCmd::Image(c) => DrawCmd::Image(ImageCmd { rect: c.rect.scaled(factor), ..*c }),
            DrawCmd::ClipStart(r) => DrawCmd::ClipStart(r.scaled(factor)),
            DrawCmd::ClipEnd => DrawCmd::ClipEnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadius, EdgeWidths};
    use crate::paint::Color;

    #[test]
    fn scaled_border_scales_geometry_not_color() {
        let cmd = DrawCmd::Border(BorderCmd::new(
            Rect::new(1.0, 2.0, 10.0, 20.0),
            CornerRadius::all(3.0),
            EdgeWidths::new(1.0, 2.0, 3.0, 4.0),
            Color::black(),
        ));
        let DrawCmd::Border(s) = cmd.scaled(2.0) else { panic!("variant changed") };
        assert_eq!(s.rect, Rect::new(2.0, 4.0, 20.0, 40.0));
        assert_eq!(s.radii, CornerRadius::all(6.0));
        assert_eq!(s.widths, EdgeWidths::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(s.color, Color::black());
    }

    #[test]
    fn scaled_text_keeps_font_size() {
        let cmd = DrawCmd::Text(TextCmd::new(Rect::new(1.0, 1.0, 5.0, 5.0), "hi", 0, 16.0, Color::white()));
        let DrawCmd::Text(s) = cmd.scaled(2.0) else { panic!("variant changed") };
        assert_eq!(s.rect, Rect::new(2.0, 2.0, 10.0, 10.0));
        assert_eq!(s.font_size, 16.0);
    }

    #[test]
    fn clip_end_has_no_bounds() {
        assert_eq!(DrawCmd::ClipEnd.bounds(), None);
        assert_eq!(DrawCmd::ClipEnd.kind(), "clip_end");
    }
}
