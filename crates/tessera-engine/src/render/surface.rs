use anyhow::Result;

use crate::coords::Rect;
use crate::mesh::Mesh;
use crate::paint::Color;
use crate::scene::{ImageCmd, TextCmd};

/// Host rendering surface the dispatcher draws into.
///
/// Meshes are sampled against the solid-color source described by
/// [`SOLID_SOURCE`](crate::mesh::SOLID_SOURCE); every vertex uv points at
/// its opaque center texel. Index format is `u16`.
pub trait Surface {
    /// Draws one colored triangle mesh.
    fn draw_mesh(&mut self, mesh: &Mesh) -> Result<()>;

    /// Fills an axis-aligned rectangle without tessellation.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    fn draw_text(&mut self, text: &TextCmd) -> Result<()>;

    fn draw_image(&mut self, image: &ImageCmd) -> Result<()>;

    /// Restricts subsequent drawing to `rect` until [`pop_clip`](Self::pop_clip).
    fn push_clip(&mut self, rect: Rect) -> Result<()>;

    fn pop_clip(&mut self) -> Result<()>;
}
