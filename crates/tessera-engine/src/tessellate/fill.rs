use std::f32::consts::FRAC_PI_2;

use crate::coords::{non_negative, Corner, Rect, Vec2};
use crate::error::TessError;
use crate::mesh::Mesh;
use crate::paint::Color;

use super::Tessellator;

impl Tessellator {
    /// Tessellates a filled box whose four corners share one `radius`.
    ///
    /// Layout of the result:
    /// - vertices 0..4 are the hubs (inner rectangle corners), TL TR BR BL,
    ///   covered by two triangles
    /// - per corner, a triangle fan of `fill_segments` steps around its hub
    /// - four edge bands (top, right, bottom, left) joining the fans
    ///
    /// The radius is clamped to `[0, rect.max_radius()]`.
    pub fn fill_rounded_rect(&self, rect: Rect, radius: f32, color: Color) -> Result<Mesh, TessError> {
        if rect.is_empty() {
            return Ok(Mesh::new());
        }

        let r = non_negative(radius).min(rect.max_radius());
        let segments = self.config.fill_segments(r);
        let step = FRAC_PI_2 / segments as f32;
        let mut b = self.builder(color);

        let hubs = Corner::ALL.map(|c| c.arc_center(rect, r));
        for hub in hubs {
            b.vertex(hub)?;
        }
        b.triangle(0, 1, 3)?;
        b.triangle(1, 2, 3)?;

        for corner in Corner::ALL {
            let hub = corner.index() as u16;
            let center = hubs[corner.index()];
            let start = corner.start_angle();
            for i in 0..segments {
                let a = b.vertex(Vec2::on_circle(center, r, start + i as f32 * step))?;
                let c = b.vertex(Vec2::on_circle(center, r, start + (i + 1) as f32 * step))?;
                b.triangle(hub, a, c)?;
            }
        }

        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
        // (hub at band start, hub at band end, boundary start, boundary end)
        let bands = [
            (0, 1, Vec2::new(x0 + r, y0), Vec2::new(x1 - r, y0)),
            (1, 2, Vec2::new(x1, y0 + r), Vec2::new(x1, y1 - r)),
            (2, 3, Vec2::new(x1 - r, y1), Vec2::new(x0 + r, y1)),
            (3, 0, Vec2::new(x0, y1 - r), Vec2::new(x0, y0 + r)),
        ];
        for (h0, h1, p0, p1) in bands {
            let a = b.vertex(p0)?;
            let c = b.vertex(p1)?;
            b.triangle(h0, a, c)?;
            b.triangle(h1, h0, c)?;
        }

        let mesh = b.finish();
        log::trace!(
            "fill_rounded_rect: r={r} segments={segments} vertices={} indices={}",
            mesh.vertices.len(),
            mesh.indices.len()
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshBuffer;
    use crate::tessellate::testing::*;
    use crate::tessellate::TessConfig;

    fn tess() -> Tessellator {
        Tessellator::default()
    }

    fn white() -> Color {
        Color::white()
    }

    fn pos(mesh: &Mesh, i: usize) -> [f32; 2] {
        mesh.vertices[i].pos
    }

    // ── scenario: 100×50 box, radius 10 ───────────────────────────────────

    #[test]
    fn hubs_are_inner_rectangle_corners() {
        let m = tess().fill_rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, white()).unwrap();
        assert_eq!(pos(&m, 0), [10.0, 10.0]);
        assert_eq!(pos(&m, 1), [90.0, 10.0]);
        assert_eq!(pos(&m, 2), [90.0, 40.0]);
        assert_eq!(pos(&m, 3), [10.0, 40.0]);
        assert_eq!(&m.indices[..6], &[0, 1, 3, 1, 2, 3]);
    }

    #[test]
    fn triangle_count_matches_layout() {
        let t = tess();
        let m = t.fill_rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, white()).unwrap();
        let n = t.config().fill_segments(10.0) as usize;
        assert_eq!(n, 16);
        assert_eq!(m.triangle_count(), 2 + 4 * n + 4 * 2);
        assert_eq!(m.vertices.len(), 4 + 8 * n + 8);
    }

    #[test]
    fn vertices_carry_normalized_color() {
        let m = tess().fill_rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0, white()).unwrap();
        assert!(m.vertices.iter().all(|v| v.color == [1.0; 4]));
    }

    // ── geometric properties ──────────────────────────────────────────────

    #[test]
    fn vertices_stay_inside_box_and_wind_clockwise() {
        let t = tess();
        let boxes = [
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(-20.0, 35.5, 7.0, 300.0),
            Rect::new(3.0, 4.0, 64.0, 64.0),
        ];
        for rect in boxes {
            for radius in [0.0, 1.0, 3.5, 10.0, 25.0, 32.0, 500.0] {
                let m = t.fill_rounded_rect(rect, radius, white()).unwrap();
                assert_well_formed(&m);
                assert_inside(&m, rect);
                assert_clockwise(&m);
            }
        }
    }

    #[test]
    fn area_approaches_rounded_rect_area() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let r = 10.0f32;
        let m = tess().fill_rounded_rect(rect, r, white()).unwrap();
        let exact = 100.0 * 50.0 - (4.0 - std::f32::consts::PI) * r * r;
        // Polygonal arcs sit inside the true circle, so the mesh is slightly smaller.
        assert!(m.signed_area() <= exact + 1e-2);
        assert!(exact - m.signed_area() < 2.0, "area {} vs {exact}", m.signed_area());
    }

    #[test]
    fn zero_radius_covers_the_whole_box() {
        let rect = Rect::new(5.0, 5.0, 40.0, 20.0);
        let m = tess().fill_rounded_rect(rect, 0.0, white()).unwrap();
        assert!((m.signed_area() - 800.0).abs() < 1e-2);
    }

    #[test]
    fn clamping_is_idempotent() {
        let t = tess();
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        for r in [30.0, 25.0, 80.0, 1e6, f32::INFINITY] {
            let clamped = f32::min(r, rect.max_radius());
            assert_eq!(
                t.fill_rounded_rect(rect, r, white()).unwrap(),
                t.fill_rounded_rect(rect, clamped, white()).unwrap()
            );
        }
    }

    #[test]
    fn negative_radius_behaves_like_zero() {
        let t = tess();
        let rect = Rect::new(0.0, 0.0, 30.0, 30.0);
        assert_eq!(
            t.fill_rounded_rect(rect, -4.0, white()).unwrap(),
            t.fill_rounded_rect(rect, 0.0, white()).unwrap()
        );
    }

    #[test]
    fn output_is_deterministic() {
        let t = tess();
        let rect = Rect::new(1.5, 2.5, 77.0, 33.0);
        assert_eq!(
            t.fill_rounded_rect(rect, 12.0, white()).unwrap(),
            t.fill_rounded_rect(rect, 12.0, white()).unwrap()
        );
    }

    // ── degenerate / capacity ─────────────────────────────────────────────

    #[test]
    fn empty_box_yields_empty_mesh() {
        let m = tess().fill_rounded_rect(Rect::new(0.0, 0.0, 0.0, 50.0), 10.0, white()).unwrap();
        assert!(m.vertices.is_empty());
        assert!(m.indices.is_empty());
    }

    #[test]
    fn huge_radius_stays_within_capacity() {
        let t = tess();
        let m = t.fill_rounded_rect(Rect::new(0.0, 0.0, 4000.0, 4000.0), 2000.0, white()).unwrap();
        assert!(m.vertices.len() <= t.config().max_vertices);
        assert!(m.indices.len() <= t.config().max_indices);
    }

    #[test]
    fn capacity_overflow_is_reported_not_truncated() {
        // Bypass validation to simulate a misconfigured capacity.
        let t = Tessellator { config: TessConfig::default().with_capacity(512, 100) };
        let err = t.fill_rounded_rect(Rect::new(0.0, 0.0, 50.0, 50.0), 10.0, white()).unwrap_err();
        assert_eq!(err, TessError::CapacityExceeded { what: MeshBuffer::Indices, limit: 100 });
    }
}
