//! Mesh types produced by the tessellators.
//!
//! A mesh is one shape: an ordered vertex list and `u16` indices grouped
//! in triples. Indices reference vertices by position, so emission order
//! is part of the output.

mod builder;
mod source;
mod vertex;

pub use builder::MeshBuilder;
pub use source::{SolidSource, SOLID_SOURCE};
pub use vertex::Vertex;

use crate::coords::Vec2;

/// Triangle mesh for a single shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(index_capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions of each triangle, in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [tri[0], tri[1], tri[2]].map(|i| {
                let [x, y] = self.vertices[i as usize].pos;
                Vec2::new(x, y)
            })
        })
    }

    /// Sum of triangle signed areas. Positive for a clockwise mesh (Y-down).
    pub fn signed_area(&self) -> f32 {
        self.triangles().map(triangle_signed_area).sum()
    }

    /// Vertex data ready for a GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data ready for a GPU upload (`Uint16`).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Shoelace signed area of one triangle.
///
/// Positive when the vertices turn clockwise on a Y-down surface.
#[inline]
pub fn triangle_signed_area([a, b, c]: [Vec2; 3]) -> f32 {
    0.5 * (b - a).cross(c - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{AlphaMode, Color};

    fn quad_mesh(x: f32) -> Mesh {
        let mut b = MeshBuilder::new(16, 16, Color::white(), AlphaMode::Straight);
        b.quad(Vec2::new(x, 0.0), Vec2::new(x + 2.0, 0.0), Vec2::new(x + 2.0, 3.0), Vec2::new(x, 3.0))
            .unwrap();
        b.finish()
    }

    #[test]
    fn signed_area_of_clockwise_quad_is_positive() {
        assert!((quad_mesh(0.0).signed_area() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn byte_views_match_lengths() {
        let m = quad_mesh(0.0);
        assert_eq!(m.vertex_bytes().len(), 4 * std::mem::size_of::<Vertex>());
        assert_eq!(m.index_bytes().len(), 6 * 2);
    }
}
