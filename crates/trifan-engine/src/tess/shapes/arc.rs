use std::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::config::MIN_CURVE_SEGMENTS;
use crate::tess::error::ensure_finite;
use crate::tess::{ShapeKind, TessError, Tessellator};

impl Tessellator {
    /// Ring segment between two angles, as a strip of quads closed by a
    /// semicircular cap of radius `thickness` at each end.
    ///
    /// The sweep is the signed difference `end_angle - start_angle`: positive
    /// sweeps run counter-clockwise, negative ones clockwise, and the
    /// magnitude is clamped to one full turn. Angles are not wrapped.
    ///
    /// `thickness` is the half-width: the ring spans `radius ± thickness`
    /// (inner edge clamped at zero). A zero sweep or non-positive thickness
    /// emits nothing.
    pub fn arc(
        &mut self,
        center: Vec2,
        start_angle: f32,
        end_angle: f32,
        radius: f32,
        thickness: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        ensure_finite(
            ShapeKind::Arc,
            &[center.x, center.y, start_angle, end_angle, radius, thickness],
        )?;

        let sweep = (end_angle - start_angle).clamp(-TAU, TAU);
        if sweep == 0.0 || thickness <= 0.0 {
            return Ok(0);
        }

        let radius = radius.max(0.0);
        let outer = radius + thickness;
        let inner = (radius - thickness).max(0.0);

        let full = self.circle_segments(outer);
        let segments = ((full as f32 * sweep.abs() / TAU).ceil() as usize).max(MIN_CURVE_SEGMENTS);
        let cap_segments = self.cap_segments(thickness);

        let mut emit = self
            .buffer
            .reserve(ShapeKind::Arc, segments * 6 + cap_segments * 6, color)?;

        let closed = sweep.abs() >= TAU;
        let dir = |i: usize| {
            let i = if closed && i == segments { 0 } else { i };
            Vec2::from_angle(start_angle + sweep * (i as f32 / segments as f32))
        };

        let mut d0 = dir(0);
        for i in 1..=segments {
            let d1 = dir(i);
            let (i0, o0) = (center + d0 * inner, center + d0 * outer);
            let (i1, o1) = (center + d1 * inner, center + d1 * outer);
            if sweep > 0.0 {
                emit.quad(i0, o0, o1, i1);
            } else {
                emit.quad(o0, i0, i1, o1);
            }
            d0 = d1;
        }

        // Travel is a quarter turn ahead of the radius for CCW sweeps and
        // behind it for CW ones.
        let turn = FRAC_PI_2.copysign(sweep);
        let end = start_angle + sweep;
        emit.round_caps(
            (center + Vec2::from_angle(start_angle) * radius, start_angle + turn),
            (center + Vec2::from_angle(end) * radius, end + turn),
            thickness,
            cap_segments,
        );

        Ok(emit.finish())
    }
}
