use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::error::ensure_finite;
use crate::tess::flatten::CubicBez;
use crate::tess::{ShapeKind, TessError, Tessellator};

impl Tessellator {
    /// Cubic Bezier stroke of uniform half-width `thickness`.
    ///
    /// `p0`/`p1` are the endpoints, `c0` the control point leaving `p0` and
    /// `c1` the control point entering `p1`. The curve is flattened until it
    /// deviates from its polyline by at most `flatness_tolerance`; each piece
    /// becomes one quad. Neighbouring quads share their edge vertices, which
    /// sit on the curve normal at the shared parameter, so joins are seamless.
    /// Both ends get a semicircular cap of radius `thickness`.
    ///
    /// A curve whose four points coincide, or a non-positive thickness, emits
    /// nothing.
    pub fn bezier(
        &mut self,
        p0: Vec2,
        c0: Vec2,
        p1: Vec2,
        c1: Vec2,
        thickness: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        let curve = CubicBez::new(p0, c0, c1, p1);
        ensure_finite(ShapeKind::Bezier, &[thickness])?;
        if !curve.is_finite() {
            return Err(TessError::NonFiniteInput { shape: ShapeKind::Bezier });
        }
        if thickness <= 0.0 || curve.is_point() {
            return Ok(0);
        }

        let cap_segments = self.cap_segments(thickness);
        let Self { config, buffer, scratch } = self;

        scratch.clear();
        curve.flatten_into(config.flatness_tolerance, config.max_subdivision_depth, scratch);
        let ts: &[f32] = scratch;
        let last = ts.len() - 1;

        let mut emit = buffer.reserve(ShapeKind::Bezier, last * 6 + cap_segments * 6, color)?;

        let edge = |i: usize| {
            let p = curve.eval(ts[i]);
            let n = stroke_direction(&curve, ts, i).perp() * thickness;
            (p - n, p + n)
        };
        let heading = |i: usize| {
            let d = stroke_direction(&curve, ts, i);
            d.y.atan2(d.x)
        };

        let (mut right0, mut left0) = edge(0);
        for i in 1..ts.len() {
            let (right1, left1) = edge(i);
            emit.quad(right0, right1, left1, left0);
            right0 = right1;
            left0 = left1;
        }

        emit.round_caps((curve.p0, heading(0)), (curve.p3, heading(last)), thickness, cap_segments);

        Ok(emit.finish())
    }

    /// Bezier given by endpoint tangents: the control points are
    /// `start + start_direction` and `end - end_direction`.
    pub fn bezier_directed(
        &mut self,
        start: Vec2,
        start_direction: Vec2,
        end: Vec2,
        end_direction: Vec2,
        thickness: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        self.bezier(start, start + start_direction, end, end - end_direction, thickness, color)
    }
}

/// Unit direction of travel at boundary `i`.
///
/// The analytic tangent vanishes where a control point coincides with its
/// endpoint; fall back to the adjacent piece's chord, then to the overall
/// chord, then to the inner control segment.
fn stroke_direction(curve: &CubicBez, ts: &[f32], i: usize) -> Vec2 {
    curve
        .tangent(ts[i])
        .try_normalize()
        .or_else(|| {
            let (a, b) = if i + 1 < ts.len() { (ts[i], ts[i + 1]) } else { (ts[i - 1], ts[i]) };
            (curve.eval(b) - curve.eval(a)).try_normalize()
        })
        .or_else(|| (curve.p3 - curve.p0).try_normalize())
        .or_else(|| (curve.p2 - curve.p1).try_normalize())
        .unwrap_or(Vec2::new(1.0, 0.0))
}
