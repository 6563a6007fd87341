/// Shared solid-color sampling source.
///
/// A small opaque white image; meshes sample one texel from its interior so
/// the host's filtering never reaches the image border. Vertex color then
/// carries the actual fill color. Read-only, so it can be shared freely.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolidSource {
    /// Side length of the square source image, in texels.
    pub size: u32,
    /// Top-left corner of the sampled 1×1 texel.
    pub texel: [u32; 2],
}

/// The process-wide solid source: a 3×3 white image sampled at texel (1, 1).
pub static SOLID_SOURCE: SolidSource = SolidSource { size: 3, texel: [1, 1] };

impl SolidSource {
    /// Center of the sampled texel in texel units.
    #[inline]
    pub fn texel_center(&self) -> [f32; 2] {
        [self.texel[0] as f32 + 0.5, self.texel[1] as f32 + 0.5]
    }

    /// Center of the sampled texel in normalized `[0, 1]` coordinates.
    #[inline]
    pub fn texel_center_normalized(&self) -> [f32; 2] {
        let [u, v] = self.texel_center();
        let s = self.size.max(1) as f32;
        [u / s, v / s]
    }

    /// RGBA8 pixels for uploading the source image.
    pub fn rgba8_pixels(&self) -> Vec<u8> {
        vec![0xff; (self.size * self.size * 4) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texel_center_is_inside_the_interior_texel() {
        assert_eq!(SOLID_SOURCE.texel_center(), [1.5, 1.5]);
        assert_eq!(SOLID_SOURCE.texel_center_normalized(), [0.5, 0.5]);
    }

    #[test]
    fn pixels_are_opaque_white() {
        let px = SOLID_SOURCE.rgba8_pixels();
        assert_eq!(px.len(), 36);
        assert!(px.iter().all(|&b| b == 0xff));
    }
}
