use std::f32::consts::{FRAC_PI_2, PI};

use crate::error::TessError;

use super::{non_negative, Rect, Vec2};

/// One of the four corners of a box, clockwise from top-left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] =
        [Corner::TopLeft, Corner::TopRight, Corner::BottomRight, Corner::BottomLeft];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    /// Angle (radians) where this corner's 90° clockwise sweep begins.
    ///
    /// TL 180°→270°, TR 270°→360°, BR 0°→90°, BL 90°→180°.
    #[inline]
    pub fn start_angle(self) -> f32 {
        match self {
            Corner::TopLeft => PI,
            Corner::TopRight => 3.0 * FRAC_PI_2,
            Corner::BottomRight => 0.0,
            Corner::BottomLeft => FRAC_PI_2,
        }
    }

    /// Center of a corner arc of `radius` inside `rect`.
    #[inline]
    pub fn arc_center(self, rect: Rect, radius: f32) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::new(rect.x + radius, rect.y + radius),
            Corner::TopRight => Vec2::new(rect.right() - radius, rect.y + radius),
            Corner::BottomRight => Vec2::new(rect.right() - radius, rect.bottom() - radius),
            Corner::BottomLeft => Vec2::new(rect.x + radius, rect.bottom() - radius),
        }
    }
}

impl TryFrom<usize> for Corner {
    type Error = TessError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Corner::ALL.get(index).copied().ok_or(TessError::InvalidCorner(index))
    }
}

/// Per-corner radii for a rounded box (surface pixels).
///
/// Order follows the CSS convention: top-left, top-right, bottom-right,
/// bottom-left. Values are clamped at use time, never rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Radius of `corner` clamped to `[0, rect.max_radius()]`.
    #[inline]
    pub fn clamped(&self, corner: Corner, rect: Rect) -> f32 {
        non_negative(self.get(corner)).min(rect.max_radius())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        Corner::ALL.iter().all(|&c| non_negative(self.get(c)) == 0.0)
    }

    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.top_left * factor,
            self.top_right * factor,
            self.bottom_right * factor,
            self.bottom_left * factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_only_four_corners() {
        assert_eq!(Corner::try_from(2), Ok(Corner::BottomRight));
        assert_eq!(Corner::try_from(4), Err(TessError::InvalidCorner(4)));
    }

    #[test]
    fn index_round_trips_through_try_from() {
        for c in Corner::ALL {
            assert_eq!(Corner::try_from(c.index()), Ok(c));
        }
    }

    #[test]
    fn clamped_limits_to_half_shorter_side() {
        let radii = CornerRadius::new(100.0, 10.0, -5.0, f32::INFINITY);
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(radii.clamped(Corner::TopLeft, rect), 25.0);
        assert_eq!(radii.clamped(Corner::TopRight, rect), 10.0);
        assert_eq!(radii.clamped(Corner::BottomRight, rect), 0.0);
        assert_eq!(radii.clamped(Corner::BottomLeft, rect), 25.0);
    }

    #[test]
    fn clamped_reads_nan_and_negative_infinity_as_zero() {
        let radii = CornerRadius::new(f32::NAN, f32::NEG_INFINITY, 0.0, 0.0);
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(radii.clamped(Corner::TopLeft, rect), 0.0);
        assert_eq!(radii.clamped(Corner::TopRight, rect), 0.0);
        assert!(radii.is_zero());
    }

    #[test]
    fn arc_centers_are_inset_by_radius() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(Corner::TopLeft.arc_center(rect, 5.0), Vec2::new(15.0, 25.0));
        assert_eq!(Corner::TopRight.arc_center(rect, 5.0), Vec2::new(105.0, 25.0));
        assert_eq!(Corner::BottomRight.arc_center(rect, 5.0), Vec2::new(105.0, 65.0));
        assert_eq!(Corner::BottomLeft.arc_center(rect, 5.0), Vec2::new(15.0, 65.0));
    }

    #[test]
    fn is_zero_ignores_negative_radii() {
        assert!(CornerRadius::new(0.0, -1.0, 0.0, 0.0).is_zero());
        assert!(!CornerRadius::new(0.0, 0.0, 0.5, 0.0).is_zero());
    }
}
