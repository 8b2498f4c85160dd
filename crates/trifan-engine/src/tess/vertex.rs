use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Packed vertex record (12 bytes).
///
///  offset 0  pos    [f32; 2]  little-endian, logical canvas units
///  offset 8  color  [u8; 4]   straight RGBA
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: Color,
}

const _: () = assert!(std::mem::size_of::<Vertex>() == Vertex::SIZE);

// `Tessellator::flush` hands out the buffer's memory as wire bytes, so the
// in-memory layout must already be the little-endian wire format.
#[cfg(target_endian = "big")]
compile_error!("trifan's vertex wire format is little-endian; big-endian targets are unsupported");

impl Vertex {
    /// Size of one record in the frame buffer.
    pub const SIZE: usize = 12;

    #[inline]
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self { pos: [pos.x, pos.y], color }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.pos[0], self.pos[1])
    }

    /// Encodes the record in the wire format independent of host endianness.
    pub fn to_le_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.pos[0].to_le_bytes());
        out[4..8].copy_from_slice(&self.pos[1].to_le_bytes());
        out[8..12].copy_from_slice(&self.color.to_array());
        out
    }

    /// Decodes one wire-format record.
    pub fn from_le_bytes(bytes: [u8; Self::SIZE]) -> Self {
        let f = |i: usize| f32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        Self {
            pos: [f(0), f(4)],
            color: Color::rgba(bytes[8], bytes[9], bytes[10], bytes[11]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_layout_position_then_color() {
        let v = Vertex::new(Vec2::new(1.0, -2.5), Color::rgba(10, 20, 30, 40));
        let bytes = v.to_le_bytes();
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[4..8], &(-2.5f32).to_le_bytes());
        assert_eq!(&bytes[8..12], &[10, 20, 30, 40]);
        assert_eq!(Vertex::from_le_bytes(bytes), v);
    }

    #[test]
    fn pod_cast_matches_wire_format() {
        let v = Vertex::new(Vec2::new(300.0, 200.0), Color::rgb(255, 0, 0));
        assert_eq!(bytemuck::bytes_of(&v), &v.to_le_bytes());
    }
}
