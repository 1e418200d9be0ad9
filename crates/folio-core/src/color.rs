//! Linear-light RGB colour used by the material blend.
//!
//! Colours are authored as sRGB hex (the way they appear in CSS) and decoded
//! to linear light on construction. All blending happens per channel on the
//! linear values, so a white-to-magenta fade does not dip through a muddy
//! midpoint the way a gamma-space lerp would.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub Vec3);

impl Rgb {
    pub const WHITE: Rgb = Rgb(Vec3::ONE);
    pub const BLACK: Rgb = Rgb(Vec3::ZERO);

    /// Decode a `0xRRGGBB` sRGB value into linear light.
    pub fn from_srgb_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Rgb(Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)))
    }

    /// Re-encode to gamma-space channels in [0, 1].
    pub fn to_srgb(self) -> [f32; 3] {
        let c = self.0.clamp(Vec3::ZERO, Vec3::ONE);
        [linear_to_srgb(c.x), linear_to_srgb(c.y), linear_to_srgb(c.z)]
    }

    /// Largest per-channel distance, used to decide whether a blend has settled.
    #[inline]
    pub fn max_channel_distance(self, other: Rgb) -> f32 {
        (self.0 - other.0).abs().max_element()
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_endpoints_decode_exactly() {
        assert_eq!(Rgb::from_srgb_hex(0xffffff), Rgb::WHITE);
        assert_eq!(Rgb::from_srgb_hex(0x000000), Rgb::BLACK);
    }

    #[test]
    fn srgb_round_trip_is_close() {
        let c = Rgb::from_srgb_hex(0xff00aa);
        let s = c.to_srgb();
        assert!((s[0] - 1.0).abs() < 1e-4);
        assert!(s[1].abs() < 1e-4);
        assert!((s[2] - 170.0 / 255.0).abs() < 1e-3);
    }
}
