//! Shape tessellators.
//!
//! Each entry point builds one self-contained mesh for one shape:
//! - [`Tessellator::fill_rounded_rect`]: filled box with rounded corners
//! - [`Tessellator::border_corner`]: one rounded border corner (ring or wedge)
//! - [`Tessellator::border_edges`]: the straight parts of a border
//!
//! Every non-degenerate triangle is clockwise on a Y-down surface. Empty
//! boxes produce empty meshes. No state is kept between calls.

mod config;
mod corner;
mod edges;
mod fill;

pub use config::TessConfig;
pub use corner::{arc_vertex_index, ArcRing};

use crate::error::TessError;
use crate::mesh::MeshBuilder;
use crate::paint::Color;

/// Stateless mesh generator bound to a validated [`TessConfig`].
#[derive(Debug, Clone, Default)]
pub struct Tessellator {
    config: TessConfig,
}

impl Tessellator {
    /// Creates a tessellator, rejecting configs that could overflow a mesh.
    pub fn new(config: TessConfig) -> Result<Self, TessError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &TessConfig {
        &self.config
    }

    fn builder(&self, color: Color) -> MeshBuilder {
        MeshBuilder::new(
            self.config.max_vertices,
            self.config.max_indices,
            color,
            self.config.alpha_mode,
        )
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::coords::Rect;
    use crate::mesh::{triangle_signed_area, Mesh};

    pub const EPS: f32 = 1e-3;

    pub fn assert_inside(mesh: &Mesh, rect: Rect) {
        for v in &mesh.vertices {
            let [x, y] = v.pos;
            assert!(
                rect.contains_approx(crate::coords::Vec2::new(x, y), EPS),
                "vertex ({x}, {y}) outside {rect:?}"
            );
        }
    }

    /// Every triangle with a non-negligible area must be clockwise.
    pub fn assert_clockwise(mesh: &Mesh) {
        for (i, tri) in mesh.triangles().enumerate() {
            let area = triangle_signed_area(tri);
            assert!(area > -1e-4, "triangle {i} {tri:?} is counter-clockwise (area {area})");
        }
    }

    pub fn assert_well_formed(mesh: &Mesh) {
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }
}
