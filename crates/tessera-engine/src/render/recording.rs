//! Surface that records every call, for dispatcher tests.

use anyhow::{bail, Result};

use crate::coords::Rect;
use crate::mesh::Mesh;
use crate::paint::Color;
use crate::scene::{ImageCmd, TextCmd};

use super::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Mesh(Mesh),
    FillRect(Rect, Color),
    Text(TextCmd),
    Image(ImageCmd),
    PushClip(Rect),
    PopClip,
}

impl SurfaceCall {
    pub fn kind(&self) -> &'static str {
        match self {
            SurfaceCall::Mesh(_) => "mesh",
            SurfaceCall::FillRect(..) => "fill_rect",
            SurfaceCall::Text(_) => "text",
            SurfaceCall::Image(_) => "image",
            SurfaceCall::PushClip(_) => "push_clip",
            SurfaceCall::PopClip => "pop_clip",
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    /// Makes `draw_mesh` fail.
    pub fail_meshes: bool,
    /// Makes `push_clip` fail.
    pub fail_clips: bool,
}

impl Surface for RecordingSurface {
    fn draw_mesh(&mut self, mesh: &Mesh) -> Result<()> {
        if self.fail_meshes {
            bail!("mesh upload refused");
        }
        self.calls.push(SurfaceCall::Mesh(mesh.clone()));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.calls.push(SurfaceCall::FillRect(rect, color));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextCmd) -> Result<()> {
        self.calls.push(SurfaceCall::Text(text.clone()));
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageCmd) -> Result<()> {
        self.calls.push(SurfaceCall::Image(*image));
        Ok(())
    }

    fn push_clip(&mut self, rect: Rect) -> Result<()> {
        if self.fail_clips {
            bail!("clip stack full");
        }
        self.calls.push(SurfaceCall::PushClip(rect));
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::PopClip);
        Ok(())
    }
}
