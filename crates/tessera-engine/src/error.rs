use thiserror::Error;

/// Which mesh buffer ran out of room.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MeshBuffer {
    Vertices,
    Indices,
}

impl std::fmt::Display for MeshBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshBuffer::Vertices => f.write_str("vertex"),
            MeshBuffer::Indices => f.write_str("index"),
        }
    }
}

/// Faults raised by the tessellators and the command dispatcher.
///
/// Degenerate geometry is never an error; it produces an empty mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TessError {
    #[error("mesh {what} capacity exceeded (limit {limit})")]
    CapacityExceeded { what: MeshBuffer, limit: usize },

    #[error("invalid tessellation config: {0}")]
    InvalidConfig(String),

    #[error("invalid corner index {0} (expected 0..4)")]
    InvalidCorner(usize),

    #[error("invalid edge index {0} (expected 0..4)")]
    InvalidEdge(usize),

    #[error("clip start while a clip region is already active (nested clips are not supported)")]
    NestedClip,

    #[error("clip end without a matching clip start")]
    UnbalancedClipEnd,
}
