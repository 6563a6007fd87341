use crate::error::TessError;

use super::{non_negative, Corner};

/// One of the four straight edges of a box, clockwise from the top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Corners at the start and end of this edge, walking clockwise.
    #[inline]
    pub const fn corners(self) -> (Corner, Corner) {
        match self {
            Edge::Top => (Corner::TopLeft, Corner::TopRight),
            Edge::Right => (Corner::TopRight, Corner::BottomRight),
            Edge::Bottom => (Corner::BottomLeft, Corner::BottomRight),
            Edge::Left => (Corner::TopLeft, Corner::BottomLeft),
        }
    }
}

impl TryFrom<usize> for Edge {
    type Error = TessError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Edge::ALL.get(index).copied().ok_or(TessError::InvalidEdge(index))
    }
}

/// Stroke thickness per edge (surface pixels). Zero means no stroke.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgeWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeWidths {
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(w: f32) -> Self {
        Self { top: w, right: w, bottom: w, left: w }
    }

    /// Width of `edge`; negative values and NaN read as zero.
    #[inline]
    pub fn get(&self, edge: Edge) -> f32 {
        non_negative(match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        })
    }

    /// Width used to size the inner arc of a rounded border corner.
    ///
    /// Only one adjoining edge is consulted: the top edge for the top
    /// corners, the bottom edge for the bottom corners. Left/right widths
    /// never affect corner arcs.
    #[inline]
    pub fn for_corner(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft | Corner::TopRight => self.get(Edge::Top),
            Corner::BottomRight | Corner::BottomLeft => self.get(Edge::Bottom),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        Edge::ALL.iter().all(|&e| self.get(e) == 0.0)
    }

    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.top * factor, self.right * factor, self.bottom * factor, self.left * factor)
    }
}
