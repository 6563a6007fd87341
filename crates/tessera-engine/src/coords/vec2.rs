use core::ops::{Add, Sub};

/// 2D point or offset in surface pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `radius` from `center` in direction `angle` (radians, Y-down).
    #[inline]
    pub fn on_circle(center: Vec2, radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(center.x + cos * radius, center.y + sin * radius)
    }

    /// Z component of the 2D cross product.
    #[inline]
    pub fn cross(self, rhs: Vec2) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn on_circle_follows_y_down_convention() {
        let c = Vec2::new(10.0, 10.0);
        assert!(close(Vec2::on_circle(c, 5.0, 0.0), Vec2::new(15.0, 10.0)));
        // 90° points down on screen.
        assert!(close(Vec2::on_circle(c, 5.0, FRAC_PI_2), Vec2::new(10.0, 15.0)));
        assert!(close(Vec2::on_circle(c, 5.0, PI), Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn cross_sign_is_positive_for_clockwise_turn_on_screen() {
        // right, then down: clockwise when +Y points down
        assert!(Vec2::new(1.0, 0.0).cross(Vec2::new(0.0, 1.0)) > 0.0);
        assert!(Vec2::new(0.0, 1.0).cross(Vec2::new(1.0, 0.0)) < 0.0);
    }
}
