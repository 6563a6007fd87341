use crate::coords::Vec2;
use crate::error::{MeshBuffer, TessError};
use crate::paint::{AlphaMode, Color};

use super::{Mesh, Vertex, SOLID_SOURCE};

/// Capacity-bounded mesh writer for one single-colored shape.
///
/// Storage is reserved up front and never grows past the configured
/// limits; pushing beyond them is a [`TessError::CapacityExceeded`] fault
/// rather than a truncated mesh.
#[derive(Debug)]
pub struct MeshBuilder {
    mesh: Mesh,
    max_vertices: usize,
    max_indices: usize,
    color: [f32; 4],
    uv: [f32; 2],
}

impl MeshBuilder {
    pub fn new(max_vertices: usize, max_indices: usize, color: Color, alpha: AlphaMode) -> Self {
        Self {
            mesh: Mesh::with_capacity(max_vertices, max_indices),
            max_vertices,
            max_indices,
            color: color.normalized(alpha),
            uv: SOLID_SOURCE.texel_center(),
        }
    }

    /// Number of vertices written so far; also the index the next vertex gets.
    #[inline]
    pub fn vertex_count(&self) -> u16 {
        self.mesh.vertices.len() as u16
    }

    /// Appends a vertex and returns its index.
    pub fn vertex(&mut self, pos: Vec2) -> Result<u16, TessError> {
        if self.mesh.vertices.len() >= self.max_vertices {
            return Err(TessError::CapacityExceeded {
                what: MeshBuffer::Vertices,
                limit: self.max_vertices,
            });
        }
        let index = self.vertex_count();
        self.mesh.vertices.push(Vertex::new(pos.to_array(), self.uv, self.color));
        Ok(index)
    }

    /// Appends one triangle. Callers pass vertices in clockwise order.
    pub fn triangle(&mut self, a: u16, b: u16, c: u16) -> Result<(), TessError> {
        if self.mesh.indices.len() + 3 > self.max_indices {
            return Err(TessError::CapacityExceeded {
                what: MeshBuffer::Indices,
                limit: self.max_indices,
            });
        }
        debug_assert!(
            [a, b, c].iter().all(|&i| i < self.vertex_count()),
            "triangle ({a}, {b}, {c}) references a vertex that was not written"
        );
        self.mesh.indices.extend_from_slice(&[a, b, c]);
        Ok(())
    }

    /// Appends a quad given its corners in clockwise order, as two triangles.
    pub fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Result<(), TessError> {
        let ia = self.vertex(a)?;
        let ib = self.vertex(b)?;
        let ic = self.vertex(c)?;
        let id = self.vertex(d)?;
        self.triangle(ia, ib, ic)?;
        self.triangle(ia, ic, id)
    }

    pub fn finish(self) -> Mesh {
        self.mesh
    }
}
