use std::borrow::Cow;
use std::fmt;

use anyhow::{Context, Result};

use crate::coords::{Corner, Rect};
use crate::error::TessError;
use crate::mesh::Mesh;
use crate::scene::{BorderCmd, DrawCmd};
use crate::tessellate::Tessellator;

use super::Surface;

/// Dispatch-time settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DispatchConfig {
    /// Layout units to surface pixels. Applied to boxes, radii and stroke
    /// widths before tessellation.
    pub scale_factor: f32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { scale_factor: 1.0 }
    }
}

impl DispatchConfig {
    #[inline]
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }
}

/// Counters for one dispatched frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub commands: usize,
    /// Non-empty meshes handed to the surface.
    pub meshes: usize,
    pub vertices: usize,
    pub indices: usize,
    /// Plain rects, text and images forwarded without tessellation.
    pub passthrough: usize,
    pub clips: usize,
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} commands, {} meshes ({} vertices, {} indices), {} passthrough, {} clips",
            self.commands, self.meshes, self.vertices, self.indices, self.passthrough, self.clips
        )
    }
}

/// The single clip region a frame may hold.
#[derive(Debug, Default)]
struct ClipSlot {
    active: Option<Rect>,
}

impl ClipSlot {
    fn acquire(&mut self, rect: Rect) -> Result<(), TessError> {
        if self.active.is_some() {
            return Err(TessError::NestedClip);
        }
        self.active = Some(rect);
        Ok(())
    }

    fn release(&mut self) -> Result<Rect, TessError> {
        self.active.take().ok_or(TessError::UnbalancedClipEnd)
    }
}

/// Turns a draw stream into surface calls.
///
/// Commands are processed strictly in order. Rounded fills and borders are
/// tessellated one shape at a time; plain rects, text and images go to the
/// surface untouched.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    tessellator: Tessellator,
    config: DispatchConfig,
    last_frame: FrameStats,
}

impl Dispatcher {
    pub fn new(tessellator: Tessellator, config: DispatchConfig) -> Self {
        Self { tessellator, config, last_frame: FrameStats::default() }
    }

    #[inline]
    pub fn tessellator(&self) -> &Tessellator {
        &self.tessellator
    }

    #[inline]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    #[inline]
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.config.scale_factor = scale_factor;
    }

    /// Stats of the most recent successful frame.
    #[inline]
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Draws `commands` into `surface`.
    ///
    /// Fails on the first command that cannot be drawn; the error names the
    /// command index and kind. A clip region still open when the stream
    /// ends, or when a command fails, is closed on the surface.
    pub fn dispatch<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        commands: &[DrawCmd],
    ) -> Result<FrameStats> {
        let mut stats = FrameStats::default();
        let mut clip = ClipSlot::default();

        let drawn = self.draw_all(surface, commands, &mut clip, &mut stats);
        let closed = match clip.release() {
            Ok(rect) => {
                log::warn!("clip region {rect:?} still open at end of frame; closing it");
                surface.pop_clip().context("failed to close clip region at end of frame")
            }
            Err(_) => Ok(()),
        };
        // The command failure, if any, is the more useful error.
        drawn?;
        closed?;

        log::debug!("frame: {stats}");
        self.last_frame = stats;
        Ok(stats)
    }

    fn draw_all<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        commands: &[DrawCmd],
        clip: &mut ClipSlot,
        stats: &mut FrameStats,
    ) -> Result<()> {
        for (index, cmd) in commands.iter().enumerate() {
            let cmd = if self.config.scale_factor == 1.0 {
                Cow::Borrowed(cmd)
            } else {
                Cow::Owned(cmd.scaled(self.config.scale_factor))
            };
            self.draw_one(surface, &cmd, clip, stats)
                .with_context(|| format!("draw command {index} ({})", cmd.kind()))?;
            stats.commands += 1;
        }
        Ok(())
    }

    fn draw_one<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cmd: &DrawCmd,
        clip: &mut ClipSlot,
        stats: &mut FrameStats,
    ) -> Result<()> {
        match cmd {
            DrawCmd::Rect(c) => {
                surface.fill_rect(c.rect, c.color)?;
                stats.passthrough += 1;
            }
            DrawCmd::RoundedRect(c) => {
                let mesh = self.tessellator.fill_rounded_rect(c.rect, c.radius, c.color)?;
                submit(surface, &mesh, stats)?;
            }
            DrawCmd::Border(c) => self.draw_border(surface, c, stats)?,
            DrawCmd::Text(c) => {
                surface.draw_text(c)?;
                stats.passthrough += 1;
            }
            DrawCmd::Image(c) => {
                surface.draw_image(c)?;
                stats.passthrough += 1;
            }
            DrawCmd::ClipStart(rect) => {
                clip.acquire(*rect)?;
                if let Err(err) = surface.push_clip(*rect) {
                    // Never pushed, so nothing to pop later.
                    clip.active = None;
                    return Err(err);
                }
                stats.clips += 1;
            }
            DrawCmd::ClipEnd => {
                clip.release()?;
                surface.pop_clip()?;
            }
        }
        Ok(())
    }

    /// Straight segments first as one mesh, then each corner that has both
    /// a radius and a stroke.
    fn draw_border<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        c: &BorderCmd,
        stats: &mut FrameStats,
    ) -> Result<()> {
        let edges = self.tessellator.border_edges(c.rect, &c.radii, &c.widths, c.color)?;
        submit(surface, &edges, stats)?;

        for corner in Corner::ALL {
            if c.radii.clamped(corner, c.rect) <= 0.0 || c.widths.for_corner(corner) <= 0.0 {
                continue;
            }
            let mesh = self
                .tessellator
                .border_corner_for(c.rect, corner, &c.radii, &c.widths, c.color)?;
            submit(surface, &mesh, stats)?;
        }
        Ok(())
    }
}

fn submit<S: Surface + ?Sized>(surface: &mut S, mesh: &Mesh, stats: &mut FrameStats) -> Result<()> {
    if mesh.is_empty() {
        return Ok(());
    }
    surface.draw_mesh(mesh)?;
    stats.meshes += 1;
    stats.vertices += mesh.vertices.len();
    stats.indices += mesh.indices.len();
    Ok(())
}
