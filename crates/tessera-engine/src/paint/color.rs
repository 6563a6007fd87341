/// RGBA color with channels in `0..=255` (straight alpha).
///
/// Channels are `f32` so layout systems can pass fractional values
/// through; they are clamped when normalized.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight-alpha bytes.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32, g as f32, b as f32, a as f32)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255.0, 255.0, 255.0, 255.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 255.0)
    }

    /// Channels scaled to `[0, 1]` in the requested alpha convention.
    ///
    /// Non-finite channels read as zero.
    #[inline]
    pub fn normalized(self, mode: AlphaMode) -> [f32; 4] {
        let unit = |v: f32| if v.is_finite() { (v / 255.0).clamp(0.0, 1.0) } else { 0.0 };
        let (r, g, b, a) = (unit(self.r), unit(self.g), unit(self.b), unit(self.a));
        match mode {
            AlphaMode::Straight => [r, g, b, a],
            AlphaMode::Premultiplied => [r * a, g * a, b * a, a],
        }
    }

    /// Straight-alpha bytes, rounded and clamped.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b, a] = self.normalized(AlphaMode::Straight);
        [r, g, b, a].map(|c| (c * 255.0).round() as u8)
    }
}

/// Alpha convention written into vertex colors.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AlphaMode {
    #[default]
    Straight,
    Premultiplied,
}

impl AlphaMode {
    /// Blend state matching this convention for `wgpu` pipelines.
    pub fn blend_state(self) -> wgpu::BlendState {
        match self {
            AlphaMode::Straight => wgpu::BlendState::ALPHA_BLENDING,
            AlphaMode::Premultiplied => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_straight_divides_by_255() {
        let c = Color::new(255.0, 127.5, 0.0, 255.0);
        assert_eq!(c.normalized(AlphaMode::Straight), [1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn normalized_premultiplied_scales_rgb_by_alpha() {
        let c = Color::new(255.0, 255.0, 0.0, 127.5);
        assert_eq!(c.normalized(AlphaMode::Premultiplied), [0.5, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn normalized_clamps_out_of_range_and_nan() {
        let c = Color::new(300.0, -4.0, f32::NAN, 255.0);
        assert_eq!(c.normalized(AlphaMode::Straight), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn blend_state_matches_alpha_mode() {
        assert_eq!(AlphaMode::Straight.blend_state(), wgpu::BlendState::ALPHA_BLENDING);
        let pre = AlphaMode::Premultiplied.blend_state();
        assert_eq!(pre, wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING);
        assert_eq!(pre.color.src_factor, wgpu::BlendFactor::One);
    }

    #[test]
    fn rgba8_round_trips() {
        assert_eq!(Color::from_rgba8(12, 34, 56, 78).to_rgba8(), [12, 34, 56, 78]);
    }
}
