use bytemuck::{Pod, Zeroable};

/// Straight (non-premultiplied) RGBA color, one byte per channel.
///
/// This is the exact byte layout written into every vertex: the shape pipeline
/// reads it as `Unorm8x4`, so `255` maps to `1.0` in the shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Unpacks to straight `f32` components in `[0, 1]`.
    #[inline]
    pub fn to_unit(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_to_four_bytes() {
        assert_eq!(std::mem::size_of::<Color>(), 4);
        assert_eq!(bytemuck::bytes_of(&Color::rgba(1, 2, 3, 4)), &[1, 2, 3, 4]);
    }

    #[test]
    fn to_unit_endpoints() {
        assert_eq!(Color::WHITE.to_unit(), [1.0; 4]);
        assert_eq!(Color::TRANSPARENT.to_unit(), [0.0; 4]);
    }
}
