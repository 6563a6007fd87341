use crate::error::TessError;
use crate::paint::AlphaMode;

/// Tessellation settings.
///
/// Segment counts grow with radius (`radius * segment_density`) so large
/// arcs stay smooth, never drop below `min_segments`, and are capped so a
/// single shape always fits in `max_vertices` / `max_indices`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TessConfig {
    pub min_segments: u32,
    pub segment_density: f32,
    pub max_vertices: usize,
    pub max_indices: usize,
    pub alpha_mode: AlphaMode,
}

impl Default for TessConfig {
    fn default() -> Self {
        Self {
            min_segments: 16,
            segment_density: 0.5,
            max_vertices: 512,
            max_indices: 512,
            alpha_mode: AlphaMode::Straight,
        }
    }
}

// Fixed cost of a fill mesh: 4 hubs + 8 edge-band vertices, 2 + 8 triangles.
const FILL_BASE_VERTICES: usize = 12;
const FILL_BASE_INDICES: usize = 30;
// Per fill segment: 2 arc vertices and 1 triangle on each of the 4 corners.
const FILL_SEGMENT_VERTICES: usize = 8;
const FILL_SEGMENT_INDICES: usize = 12;

// Corner arc: start vertex + 2 closing vertices, 2 cap triangles less the
// one inner triangle a ring does not need.
const CORNER_BASE_VERTICES: usize = 3;
const CORNER_BASE_INDICES: usize = 3;
// Per corner segment: mid + outer vertex, outer + inner triangle.
const CORNER_SEGMENT_VERTICES: usize = 2;
const CORNER_SEGMENT_INDICES: usize = 6;

impl TessConfig {
    #[inline]
    pub fn with_min_segments(mut self, min_segments: u32) -> Self {
        self.min_segments = min_segments;
        self
    }

    #[inline]
    pub fn with_segment_density(mut self, density: f32) -> Self {
        self.segment_density = density;
        self
    }

    #[inline]
    pub fn with_capacity(mut self, max_vertices: usize, max_indices: usize) -> Self {
        self.max_vertices = max_vertices;
        self.max_indices = max_indices;
        self
    }

    #[inline]
    pub fn with_alpha_mode(mut self, alpha_mode: AlphaMode) -> Self {
        self.alpha_mode = alpha_mode;
        self
    }

    /// Checks that every shape this config can produce fits its capacity.
    pub fn validate(&self) -> Result<(), TessError> {
        if self.min_segments == 0 {
            return Err(TessError::InvalidConfig("min_segments must be at least 1".into()));
        }
        if !self.segment_density.is_finite() || self.segment_density < 0.0 {
            return Err(TessError::InvalidConfig(format!(
                "segment_density must be finite and non-negative, got {}",
                self.segment_density
            )));
        }
        if self.max_vertices > u16::MAX as usize + 1 {
            return Err(TessError::InvalidConfig(format!(
                "max_vertices {} exceeds the u16 index range",
                self.max_vertices
            )));
        }
        let fill = self.fill_segment_limit();
        if fill < self.min_segments {
            return Err(TessError::InvalidConfig(format!(
                "capacity {}v/{}i fits {fill} fill segments, below min_segments {}",
                self.max_vertices, self.max_indices, self.min_segments
            )));
        }
        let corner = self.corner_segment_limit();
        if corner < self.min_segments {
            return Err(TessError::InvalidConfig(format!(
                "capacity {}v/{}i fits {corner} corner segments, below min_segments {}",
                self.max_vertices, self.max_indices, self.min_segments
            )));
        }
        Ok(())
    }

    /// Most segments per corner a rounded fill can use within capacity.
    pub fn fill_segment_limit(&self) -> u32 {
        let by_vertices =
            self.max_vertices.saturating_sub(FILL_BASE_VERTICES) / FILL_SEGMENT_VERTICES;
        let by_indices = self.max_indices.saturating_sub(FILL_BASE_INDICES) / FILL_SEGMENT_INDICES;
        by_vertices.min(by_indices).min(u32::MAX as usize) as u32
    }

    /// Most segments a border corner arc can use within capacity.
    pub fn corner_segment_limit(&self) -> u32 {
        let by_vertices =
            self.max_vertices.saturating_sub(CORNER_BASE_VERTICES) / CORNER_SEGMENT_VERTICES;
        let by_indices =
            self.max_indices.saturating_sub(CORNER_BASE_INDICES) / CORNER_SEGMENT_INDICES;
        by_vertices.min(by_indices).min(u32::MAX as usize) as u32
    }

    /// Segments per corner for a rounded fill of (clamped) `radius`.
    pub fn fill_segments(&self, radius: f32) -> u32 {
        let wanted = (radius * self.segment_density).floor();
        self.capped(wanted, self.fill_segment_limit(), "fill")
    }

    /// Segments for a border corner arc of (clamped) outer `radius`.
    pub fn corner_segments(&self, radius: f32) -> u32 {
        let wanted = (radius * self.segment_density).ceil();
        self.capped(wanted, self.corner_segment_limit(), "corner")
    }

    fn capped(&self, wanted: f32, limit: u32, kind: &str) -> u32 {
        // `as` saturates and maps NaN to 0, which min_segments then overrides.
        let segments = (wanted as u32).max(self.min_segments);
        // min_segments is a hard floor; a config whose floor does not fit
        // fails at mesh time with CapacityExceeded instead of thinning out.
        let limit = limit.max(self.min_segments);
        if segments > limit {
            log::trace!("{kind} segments capped at {limit} (wanted {segments})");
            limit
        } else {
            segments
        }
    }
}
