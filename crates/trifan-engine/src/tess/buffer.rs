use std::f32::consts::{FRAC_PI_2, PI};

use crate::coords::Vec2;
use crate::paint::Color;

use super::{ShapeKind, TessError, Vertex};

/// Fixed-capacity frame buffer of packed vertices.
///
/// Memory is allocated once at construction; `clear` only rewinds the cursor,
/// and writes never grow past `capacity`.
#[derive(Debug)]
pub(crate) struct VertexBuffer {
    vertices: Vec<Vertex>,
    capacity: usize,
}

impl VertexBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.vertices.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Reserves room for exactly `count` vertices of one shape call.
    ///
    /// Fails without touching the buffer if the call does not fit, which is
    /// what makes shape calls atomic.
    pub(crate) fn reserve(
        &mut self,
        shape: ShapeKind,
        count: usize,
        color: Color,
    ) -> Result<Emit<'_>, TessError> {
        debug_assert_eq!(count % 3, 0, "{shape} reserved a partial triangle");

        let available = self.capacity - self.vertices.len();
        if count > available {
            log::warn!(
                "frame buffer full: {shape} needs {count} vertices, {available} of {} left",
                self.capacity
            );
            return Err(TessError::CapacityExceeded {
                shape,
                requested: count,
                available,
                capacity: self.capacity,
            });
        }

        let start = self.vertices.len();
        Ok(Emit {
            out: &mut self.vertices,
            color,
            start,
            expected: count,
        })
    }
}

/// Write handle for one reserved shape call.
pub(crate) struct Emit<'a> {
    out: &'a mut Vec<Vertex>,
    color: Color,
    start: usize,
    expected: usize,
}

impl Emit<'_> {
    #[inline]
    pub(crate) fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        debug_assert!(self.written() + 3 <= self.expected, "emit overran its reservation");
        self.out.push(Vertex::new(a, self.color));
        self.out.push(Vertex::new(b, self.color));
        self.out.push(Vertex::new(c, self.color));
    }

    /// Emits `a b c d` as the triangles `a b c` and `a c d`.
    #[inline]
    pub(crate) fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2) {
        self.triangle(a, b, c);
        self.triangle(a, c, d);
    }

    /// Emits a fan of `segments` triangles around `center`, from `start_angle`
    /// sweeping `sweep` radians (negative sweeps run clockwise).
    ///
    /// A full-turn fan closes on its first rim point exactly.
    pub(crate) fn fan(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep: f32,
        segments: usize,
    ) {
        let closed = sweep.abs() >= std::f32::consts::TAU;
        let rim = |i: usize| {
            let i = if closed && i == segments { 0 } else { i };
            let a = start_angle + sweep * (i as f32 / segments as f32);
            center + Vec2::from_angle(a) * radius
        };

        let mut prev = rim(0);
        for i in 1..=segments {
            let next = rim(i);
            if sweep >= 0.0 {
                self.triangle(center, prev, next);
            } else {
                self.triangle(center, next, prev);
            }
            prev = next;
        }
    }

    /// Semicircular caps closing a stroke of half-width `radius`: one behind
    /// `start`, one ahead of `end`. Headings are directions of travel in
    /// radians. Writes `2 * segments` triangles.
    pub(crate) fn round_caps(
        &mut self,
        (start, start_heading): (Vec2, f32),
        (end, end_heading): (Vec2, f32),
        radius: f32,
        segments: usize,
    ) {
        self.fan(end, radius, end_heading - FRAC_PI_2, PI, segments);
        self.fan(start, radius, start_heading + FRAC_PI_2, PI, segments);
    }

    #[inline]
    fn written(&self) -> usize {
        self.out.len() - self.start
    }

    /// Returns the number of vertices written for this call.
    #[inline]
    pub(crate) fn finish(self) -> usize {
        let written = self.written();
        debug_assert_eq!(written, self.expected, "emit count differs from reservation");
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn reserve_over_capacity_leaves_buffer_untouched() {
        let mut buf = VertexBuffer::with_capacity(6);
        let mut e = buf.reserve(ShapeKind::Triangle, 3, Color::WHITE).unwrap();
        e.triangle(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0));
        assert_eq!(e.finish(), 3);

        let err = buf.reserve(ShapeKind::Rectangle, 6, Color::WHITE).err().unwrap();
        assert_eq!(
            err,
            TessError::CapacityExceeded {
                shape: ShapeKind::Rectangle,
                requested: 6,
                available: 3,
                capacity: 6,
            }
        );
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut buf = VertexBuffer::with_capacity(30);
        let mut e = buf.reserve(ShapeKind::Triangle, 3, Color::BLACK).unwrap();
        e.triangle(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0));
        e.finish();

        let before = buf.vertices.capacity();
        buf.clear();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.vertices.capacity(), before);
    }

    #[test]
    fn full_fan_closes_on_first_rim_point() {
        let mut buf = VertexBuffer::with_capacity(48);
        let mut e = buf.reserve(ShapeKind::Circle, 48, Color::BLACK).unwrap();
        e.fan(v(0.0, 0.0), 2.0, 0.0, std::f32::consts::TAU, 16);
        e.finish();

        let verts = buf.vertices();
        assert_eq!(verts[1], verts[verts.len() - 1]);
    }

    #[test]
    fn negative_sweep_fan_keeps_ccw_winding() {
        let mut buf = VertexBuffer::with_capacity(12);
        let mut e = buf.reserve(ShapeKind::Arc, 12, Color::BLACK).unwrap();
        e.fan(v(0.0, 0.0), 1.0, 0.0, -std::f32::consts::FRAC_PI_2, 4);
        e.finish();

        for tri in buf.vertices().chunks(3) {
            let (a, b, c) = (tri[0].position(), tri[1].position(), tri[2].position());
            assert!((b - a).cross(c - a) > 0.0);
        }
    }

    #[test]
    fn round_caps_face_away_from_the_stroke() {
        let mut buf = VertexBuffer::with_capacity(48);
        let mut e = buf.reserve(ShapeKind::Bezier, 48, Color::BLACK).unwrap();
        e.round_caps((v(0.0, 0.0), 0.0), (v(10.0, 0.0), 0.0), 2.0, 8);
        e.finish();

        let (end_cap, start_cap) = buf.vertices().split_at(24);
        assert!(end_cap.iter().all(|p| p.position().x >= 10.0 - 1e-4));
        assert!(start_cap.iter().all(|p| p.position().x <= 1e-4));
        let max_x = end_cap.iter().map(|p| p.position().x).fold(f32::MIN, f32::max);
        let min_x = start_cap.iter().map(|p| p.position().x).fold(f32::MAX, f32::min);
        assert!((max_x - 12.0).abs() < 1e-4);
        assert!((min_x + 2.0).abs() < 1e-4);
    }
}
