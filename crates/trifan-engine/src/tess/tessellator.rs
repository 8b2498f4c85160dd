use crate::coords::Rect;

use super::buffer::VertexBuffer;
use super::{TessellatorConfig, Vertex};

/// Converts primitive draw calls into a flat triangle-list frame buffer.
///
/// One tessellator belongs to one rendering context. It exclusively owns its
/// buffer; independent scenes must each use their own instance.
///
/// Lifecycle per frame:
/// 1. [`clear`](Self::clear)
/// 2. any number of shape calls ([`circle`](Self::circle), [`capsule`](Self::capsule), ...)
/// 3. [`flush`](Self::flush) to read the packed vertices
///
/// Shape calls are atomic: a call either appends all of its triangles or
/// returns an error and leaves the buffer untouched.
#[derive(Debug)]
pub struct Tessellator {
    pub(super) config: TessellatorConfig,
    pub(super) buffer: VertexBuffer,
    /// Reused bezier parameter list; no per-frame allocation once warmed.
    pub(super) scratch: Vec<f32>,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::with_config(TessellatorConfig::default())
    }

    pub fn with_config(config: TessellatorConfig) -> Self {
        let config = config.sanitized();
        let buffer = VertexBuffer::with_capacity(config.capacity_vertices());
        log::debug!(
            "tessellator created: {} vertices ({} bytes)",
            buffer.capacity(),
            buffer.capacity() * Vertex::SIZE
        );
        Self { config, buffer, scratch: Vec::new() }
    }

    #[inline]
    pub fn config(&self) -> &TessellatorConfig {
        &self.config
    }

    /// Starts a new frame. O(1); keeps the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the vertex count and the packed bytes of the current frame.
    ///
    /// The byte slice is exactly `vertex_count * 12` long. Reading does not
    /// reset anything; call [`clear`](Self::clear) to start the next frame.
    #[inline]
    pub fn flush(&self) -> (u32, &[u8]) {
        // Capacity is capped at u32::MAX vertices by the config. Native order
        // is the little-endian wire order; vertex.rs refuses big-endian builds.
        (self.buffer.len() as u32, self.buffer.as_bytes())
    }

    /// Vertices accumulated since the last clear.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        self.buffer.vertices()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Frame buffer capacity in vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Frame buffer capacity in bytes.
    #[inline]
    pub fn capacity_bytes(&self) -> usize {
        self.buffer.capacity() * Vertex::SIZE
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.capacity() - self.buffer.len()
    }

    /// Bounds of every vertex in the current frame.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.vertices().iter().map(Vertex::position))
    }

    /// Full-circle segment count for `radius`.
    ///
    /// `ceil(radius * segments_per_unit)`, clamped to the configured range
    /// (never below 12).
    pub fn circle_segments(&self, radius: f32) -> usize {
        let scaled = (radius * self.config.segments_per_unit).ceil();
        let n = if scaled.is_finite() && scaled > 0.0 {
            // Saturating float-to-int cast.
            scaled as usize
        } else {
            0
        };
        n.clamp(self.config.min_segments, self.config.max_segments)
    }

    /// Segments in one semicircular cap of `radius`: half the full-circle
    /// count, rounded up.
    pub fn cap_segments(&self, radius: f32) -> usize {
        self.circle_segments(radius).div_ceil(2)
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn clear_then_flush_is_empty() {
        let mut t = Tessellator::new();
        t.circle(Vec2::zero(), 5.0, Color::BLACK).unwrap();
        t.clear();
        let (count, bytes) = t.flush();
        assert_eq!(count, 0);
        assert!(bytes.is_empty());
        assert!(t.bounds().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut t = Tessellator::new();
        t.clear();
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.remaining(), t.capacity());
    }

    #[test]
    fn flush_is_read_only() {
        let mut t = Tessellator::new();
        t.triangle(Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Color::WHITE).unwrap();
        let first = t.flush().1.to_vec();
        let (count, again) = t.flush();
        assert_eq!(count, 3);
        assert_eq!(first, again);
    }

    #[test]
    fn flush_bytes_are_the_wire_encoding() {
        let mut t = Tessellator::new();
        t.triangle(Vec2::new(-300.0, 200.0), Vec2::new(1.5, 0.0), Vec2::new(0.0, -0.25), Color::rgba(1, 2, 3, 4))
            .unwrap();
        let wire: Vec<u8> = t.vertices().iter().flat_map(Vertex::to_le_bytes).collect();
        assert_eq!(t.flush().1, &wire[..]);
    }

    #[test]
    fn default_capacity_matches_reference_buffer() {
        let t = Tessellator::new();
        assert_eq!(t.capacity(), 5461);
        assert_eq!(t.capacity_bytes(), 65532);
    }

    #[test]
    fn segment_policy_scales_with_radius() {
        let t = Tessellator::new();
        assert_eq!(t.circle_segments(0.0), 16);
        assert_eq!(t.circle_segments(5.0), 16);
        assert_eq!(t.circle_segments(40.2), 41);
        assert_eq!(t.circle_segments(1.0e9), 256);
    }

    #[test]
    fn segment_policy_never_below_twelve() {
        let t = Tessellator::with_config(TessellatorConfig {
            min_segments: 4,
            segments_per_unit: 0.0,
            ..Default::default()
        });
        assert_eq!(t.circle_segments(100.0), 12);
    }
}
