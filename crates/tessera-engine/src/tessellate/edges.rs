use crate::coords::{CornerRadius, Edge, EdgeWidths, Rect, Vec2};
use crate::error::TessError;
use crate::mesh::{Mesh, MeshBuilder};
use crate::paint::Color;

use super::Tessellator;

impl Tessellator {
    /// Tessellates the straight part of one border edge as a single quad.
    ///
    /// The quad runs between the clamped radii of the edge's two corners and
    /// lies inside the box, `widths.get(edge)` thick (at most the box extent
    /// across the edge). Zero width or zero span gives an empty mesh.
    pub fn border_edge(
        &self,
        rect: Rect,
        edge: Edge,
        radii: &CornerRadius,
        widths: &EdgeWidths,
        color: Color,
    ) -> Result<Mesh, TessError> {
        let mut b = self.builder(color);
        push_edge(&mut b, rect, edge, radii, widths)?;
        Ok(b.finish())
    }

    /// All four straight border segments in one mesh (top, right, bottom, left).
    pub fn border_edges(
        &self,
        rect: Rect,
        radii: &CornerRadius,
        widths: &EdgeWidths,
        color: Color,
    ) -> Result<Mesh, TessError> {
        let mut b = self.builder(color);
        for edge in Edge::ALL {
            push_edge(&mut b, rect, edge, radii, widths)?;
        }
        Ok(b.finish())
    }
}

fn push_edge(
    b: &mut MeshBuilder,
    rect: Rect,
    edge: Edge,
    radii: &CornerRadius,
    widths: &EdgeWidths,
) -> Result<(), TessError> {
    if rect.is_empty() {
        return Ok(());
    }
    let width = widths.get(edge);
    if width <= 0.0 {
        return Ok(());
    }

    let (from, to) = edge.corners();
    let (r0, r1) = (radii.clamped(from, rect), radii.clamped(to, rect));

    let span = match edge {
        Edge::Top => Rect::new(rect.x + r0, rect.y, rect.width - r0 - r1, width.min(rect.height)),
        Edge::Right => {
            let w = width.min(rect.width);
            Rect::new(rect.right() - w, rect.y + r0, w, rect.height - r0 - r1)
        }
        Edge::Bottom => {
            let h = width.min(rect.height);
            Rect::new(rect.x + r0, rect.bottom() - h, rect.width - r0 - r1, h)
        }
        Edge::Left => Rect::new(rect.x, rect.y + r0, width.min(rect.width), rect.height - r0 - r1),
    };
    if span.is_empty() {
        return Ok(());
    }

    b.quad(
        span.min(),
        Vec2::new(span.right(), span.y),
        span.max(),
        Vec2::new(span.x, span.bottom()),
    )
}
