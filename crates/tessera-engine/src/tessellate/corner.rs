use std::f32::consts::FRAC_PI_2;

use crate::coords::{non_negative, Corner, CornerRadius, EdgeWidths, Rect, Vec2};
use crate::error::TessError;
use crate::mesh::{Mesh, MeshBuilder};
use crate::paint::Color;

use super::Tessellator;

/// Which boundary of a corner arc a vertex lies on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArcRing {
    /// On the outer arc, at the step boundary angle.
    Outer,
    /// On the inner arc (or at the center for a filled wedge), at the step's mid angle.
    Inner,
}

/// Index of a corner-arc vertex.
///
/// Vertex 0 is the outer vertex at the start angle; each step `i` then
/// appends its inner (mid-angle) vertex followed by the outer vertex that
/// ends the step. So the outer vertex opening step `i` is `2i` and its
/// inner vertex is `2i + 1`. Valid for `step <= segments` (outer) and
/// `step < segments` (inner).
#[inline]
pub const fn arc_vertex_index(step: u32, ring: ArcRing) -> u16 {
    match ring {
        ArcRing::Outer => (2 * step) as u16,
        ArcRing::Inner => (2 * step + 1) as u16,
    }
}

/// Arc parameters shared by the ring and wedge paths.
struct ArcSweep {
    center: Vec2,
    outer: f32,
    start: f32,
    step: f32,
    segments: u32,
}

impl ArcSweep {
    #[inline]
    fn angle(&self, t: f32) -> f32 {
        self.start + t * self.step
    }
}

impl Tessellator {
    /// Tessellates one rounded border corner.
    ///
    /// `radius` is the outer radius (clamped to `[0, rect.max_radius()]`);
    /// `border_width` is the stroke thickness that sizes the inner arc.
    /// A stroke thinner than the radius gives an annulus wedge; a stroke at
    /// least as thick gives a filled wedge converging on the arc center.
    /// A zero radius (or an empty box) yields an empty mesh.
    pub fn border_corner(
        &self,
        rect: Rect,
        corner: Corner,
        radius: f32,
        border_width: f32,
        color: Color,
    ) -> Result<Mesh, TessError> {
        if rect.is_empty() {
            return Ok(Mesh::new());
        }
        let outer = non_negative(radius).min(rect.max_radius());
        if outer <= 0.0 {
            return Ok(Mesh::new());
        }

        let inner = outer - non_negative(border_width);
        let segments = self.config.corner_segments(outer);
        let arc = ArcSweep {
            center: corner.arc_center(rect, outer),
            outer,
            start: corner.start_angle(),
            step: FRAC_PI_2 / segments as f32,
            segments,
        };

        let mut b = self.builder(color);
        b.vertex(Vec2::on_circle(arc.center, outer, arc.start))?;
        if inner > 0.0 {
            annulus_wedge(&mut b, &arc, inner)?;
        } else {
            filled_wedge(&mut b, &arc)?;
        }

        let mesh = b.finish();
        log::trace!(
            "border_corner {corner:?}: outer={outer} inner={inner} segments={segments} vertices={} indices={}",
            mesh.vertices.len(),
            mesh.indices.len()
        );
        Ok(mesh)
    }

    /// [`border_corner`](Self::border_corner) with the radius of `corner` and
    /// the width of its single adjoining edge (see [`EdgeWidths::for_corner`]).
    pub fn border_corner_for(
        &self,
        rect: Rect,
        corner: Corner,
        radii: &CornerRadius,
        widths: &EdgeWidths,
        color: Color,
    ) -> Result<Mesh, TessError> {
        self.border_corner(rect, corner, radii.get(corner), widths.for_corner(corner), color)
    }
}

/// Ring between the outer arc and an inner arc of radius `inner > 0`.
fn annulus_wedge(b: &mut MeshBuilder, arc: &ArcSweep, inner: f32) -> Result<(), TessError> {
    use ArcRing::{Inner, Outer};

    for i in 0..arc.segments {
        let mid = b.vertex(Vec2::on_circle(arc.center, inner, arc.angle(i as f32 + 0.5)))?;
        let next = b.vertex(Vec2::on_circle(arc.center, arc.outer, arc.angle((i + 1) as f32)))?;
        debug_assert_eq!(mid, arc_vertex_index(i, Inner));
        debug_assert_eq!(next, arc_vertex_index(i + 1, Outer));
        b.triangle(arc_vertex_index(i, Outer), next, mid)?;
    }

    for i in 0..arc.segments - 1 {
        b.triangle(
            arc_vertex_index(i, Inner),
            arc_vertex_index(i + 1, Outer),
            arc_vertex_index(i + 1, Inner),
        )?;
    }

    // Close the inner boundary exactly at both sweep ends.
    let last = arc.segments - 1;
    let end = b.vertex(Vec2::on_circle(arc.center, inner, arc.angle(arc.segments as f32)))?;
    b.triangle(arc_vertex_index(last, Inner), arc_vertex_index(arc.segments, Outer), end)?;

    let start = b.vertex(Vec2::on_circle(arc.center, inner, arc.start))?;
    b.triangle(arc_vertex_index(0, Outer), arc_vertex_index(0, Inner), start)
}

/// Solid pie slice: every step's inner vertex sits on the arc center.
fn filled_wedge(b: &mut MeshBuilder, arc: &ArcSweep) -> Result<(), TessError> {
    for i in 0..arc.segments {
        let hub = b.vertex(arc.center)?;
        let next = b.vertex(Vec2::on_circle(arc.center, arc.outer, arc.angle((i + 1) as f32)))?;
        b.triangle(arc_vertex_index(i, ArcRing::Outer), next, hub)?;
    }
    Ok(())
}
