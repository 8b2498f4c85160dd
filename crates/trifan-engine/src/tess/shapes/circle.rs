use std::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::error::ensure_finite;
use crate::tess::{ShapeKind, TessError, Tessellator};

impl Tessellator {
    /// Filled disc as a triangle fan around `center`.
    ///
    /// Uses [`circle_segments`](Tessellator::circle_segments) triangles. A zero
    /// (or negative) radius yields a point-sized fan with every vertex at
    /// `center`.
    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<usize, TessError> {
        self.disc(ShapeKind::Circle, center, radius, color)
    }

    /// Shared by `circle` and the degenerate capsule so both produce identical
    /// vertices.
    pub(super) fn disc(
        &mut self,
        shape: ShapeKind,
        center: Vec2,
        radius: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        ensure_finite(shape, &[center.x, center.y, radius])?;

        let radius = radius.max(0.0);
        let segments = self.circle_segments(radius);

        let mut emit = self.buffer.reserve(shape, segments * 3, color)?;
        emit.fan(center, radius, 0.0, TAU, segments);
        Ok(emit.finish())
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::tess::{ShapeKind, TessError, Tessellator, Vertex};

    const EPS: f32 = 1e-4;

    fn ccw(tri: &[Vertex]) -> f32 {
        let (a, b, c) = (tri[0].position(), tri[1].position(), tri[2].position());
        (b - a).cross(c - a)
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn small_circle_uses_minimum_fan() {
        let mut t = Tessellator::new();
        assert_eq!(t.circle(Vec2::new(10.0, -20.0), 5.0, Color::BLACK).unwrap(), 48);
        let (count, bytes) = t.flush();
        assert_eq!(count, 48);
        assert_eq!(bytes.len(), 48 * 12);
    }

    #[test]
    fn vertices_stay_within_radius() {
        let mut t = Tessellator::new();
        let center = Vec2::new(-120.0, 35.0);
        for r in [0.5, 6.0, 12.5, 110.0, 199.0] {
            t.clear();
            t.circle(center, r, Color::WHITE).unwrap();
            let bounds = Rect::from_center_half_extent(center, Vec2::new(r, r));
            for v in t.vertices() {
                assert!(bounds.contains_within(v.position(), EPS));
                assert!(v.position().distance(center) <= r + EPS);
            }
            assert!(t.len() >= 36);
            assert_eq!(t.len() % 3, 0);
        }
    }

    #[test]
    fn fan_shares_center_and_winds_ccw() {
        let mut t = Tessellator::new();
        let center = Vec2::new(3.0, 4.0);
        t.circle(center, 20.0, Color::WHITE).unwrap();
        for tri in t.vertices().chunks(3) {
            assert_eq!(tri[0].position(), center);
            assert!(ccw(tri) > 0.0);
        }
    }

    #[test]
    fn every_vertex_carries_the_call_color() {
        let mut t = Tessellator::new();
        let c = Color::rgba(204, 204, 0, 255);
        t.circle(Vec2::zero(), 12.5, c).unwrap();
        assert!(t.vertices().iter().all(|v| v.color == c));
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn zero_radius_is_point_sized() {
        let mut t = Tessellator::new();
        let p = Vec2::new(7.0, 8.0);
        assert_eq!(t.circle(p, 0.0, Color::BLACK).unwrap(), 48);
        assert!(t.vertices().iter().all(|v| v.position() == p));
    }

    #[test]
    fn negative_radius_clamps_to_point() {
        let mut t = Tessellator::new();
        t.circle(Vec2::zero(), -3.0, Color::BLACK).unwrap();
        assert!(t.vertices().iter().all(|v| v.position() == Vec2::zero()));
    }

    #[test]
    fn nan_radius_is_rejected_without_emission() {
        let mut t = Tessellator::new();
        let err = t.circle(Vec2::zero(), f32::NAN, Color::BLACK).unwrap_err();
        assert_eq!(err, TessError::NonFiniteInput { shape: ShapeKind::Circle });
        assert!(t.is_empty());
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn circle_114_overflows_reference_buffer() {
        let mut t = Tessellator::new();
        for _ in 0..113 {
            t.circle(Vec2::zero(), 1.0, Color::BLACK).unwrap();
        }
        let before = t.flush().1.to_vec();
        assert_eq!(before.len(), 113 * 576);

        let err = t.circle(Vec2::zero(), 1.0, Color::BLACK).unwrap_err();
        assert_eq!(
            err,
            TessError::CapacityExceeded {
                shape: ShapeKind::Circle,
                requested: 48,
                available: 5461 - 113 * 48,
                capacity: 5461,
            }
        );

        let (count, after) = t.flush();
        assert_eq!(count as usize, 113 * 48);
        assert_eq!(after, &before[..]);
    }

    #[test]
    fn smaller_shape_still_fits_after_overflow() {
        let mut t = Tessellator::new();
        for _ in 0..113 {
            t.circle(Vec2::zero(), 1.0, Color::BLACK).unwrap();
        }
        assert!(t.circle(Vec2::zero(), 1.0, Color::BLACK).is_err());
        // 37 vertices remain: a triangle still fits.
        assert_eq!(t.remaining(), 37);
        t.triangle(Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Color::BLACK).unwrap();
    }
}
