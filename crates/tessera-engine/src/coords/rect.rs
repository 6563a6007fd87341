use super::Vec2;

/// Axis-aligned bounding box in surface pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Box spanning `min` to `max`.
    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// True when the box has no drawable area. Non-finite boxes count as empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        !self.is_finite() || self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Largest corner radius that keeps opposite arcs from overlapping.
    #[inline]
    pub fn max_radius(self) -> f32 {
        (self.width.min(self.height) * 0.5).max(0.0)
    }

    /// Multiplies position and size by `factor`.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.width * factor, self.height * factor)
    }

    /// Closed containment with a tolerance: `[min - eps, max + eps]`.
    #[inline]
    pub fn contains_approx(self, p: Vec2, eps: f32) -> bool {
        p.x >= self.x - eps
            && p.y >= self.y - eps
            && p.x <= self.right() + eps
            && p.y <= self.bottom() + eps
    }
}
