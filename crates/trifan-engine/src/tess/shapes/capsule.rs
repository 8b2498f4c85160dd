use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::error::ensure_finite;
use crate::tess::{ShapeKind, TessError, Tessellator};

impl Tessellator {
    /// Stadium shape: a `2 * radius` wide band from `p0` to `p1` with
    /// semicircular caps.
    ///
    /// Each cap is a half fan using half the full-circle segment count for
    /// `radius`, rounded up. When `p0 == p1` the output is exactly
    /// `circle(p0, radius, color)`.
    pub fn capsule(
        &mut self,
        p0: Vec2,
        p1: Vec2,
        radius: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        ensure_finite(ShapeKind::Capsule, &[p0.x, p0.y, p1.x, p1.y, radius])?;

        let Some(dir) = (p1 - p0).try_normalize() else {
            return self.disc(ShapeKind::Capsule, p0, radius, color);
        };

        let radius = radius.max(0.0);
        let cap_segments = self.cap_segments(radius);
        let count = 6 + 2 * cap_segments * 3;

        let mut emit = self.buffer.reserve(ShapeKind::Capsule, count, color)?;

        let n = dir.perp() * radius;
        emit.quad(p0 - n, p1 - n, p1 + n, p0 + n);

        let heading = dir.y.atan2(dir.x);
        emit.round_caps((p0, heading), (p1, heading), radius, cap_segments);

        Ok(emit.finish())
    }
}
