//! Adaptive flattening of cubic Bezier curves.
//!
//! The curve is bisected (de Casteljau at t = 0.5) until each piece's control
//! polygon lies within the tolerance of its chord. Because the bisection tree
//! is fixed, a larger tolerance can only prune it, so coarser settings never
//! produce more pieces.

use crate::coords::Vec2;

/// Cubic Bezier with absolute control points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicBez {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBez {
    #[inline]
    pub const fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// True when all four points coincide.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.p0 == self.p1 && self.p0 == self.p2 && self.p0 == self.p3
    }

    pub fn eval(&self, t: f32) -> Vec2 {
        let a = self.p0.lerp(self.p1, t);
        let b = self.p1.lerp(self.p2, t);
        let c = self.p2.lerp(self.p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        d.lerp(e, t)
    }

    /// First derivative, scaled by 1/3.
    ///
    /// Only the direction is used for stroke normals, so the constant factor
    /// is dropped.
    pub fn tangent(&self, t: f32) -> Vec2 {
        let a = self.p1 - self.p0;
        let b = self.p2 - self.p1;
        let c = self.p3 - self.p2;
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        d.lerp(e, t)
    }

    /// Splits at t = 0.5.
    pub fn split_half(&self) -> (CubicBez, CubicBez) {
        let ab = self.p0.lerp(self.p1, 0.5);
        let bc = self.p1.lerp(self.p2, 0.5);
        let cd = self.p2.lerp(self.p3, 0.5);
        let abc = ab.lerp(bc, 0.5);
        let bcd = bc.lerp(cd, 0.5);
        let mid = abc.lerp(bcd, 0.5);
        (
            CubicBez::new(self.p0, ab, abc, mid),
            CubicBez::new(mid, bcd, cd, self.p3),
        )
    }

    /// Upper bound on the distance between the curve and its chord.
    ///
    /// The curve stays inside the convex hull of its control points, so the
    /// larger control-point distance from the chord bounds the error.
    pub fn flatness(&self) -> f32 {
        let chord = self.p3 - self.p0;
        match chord.try_normalize() {
            Some(dir) => {
                let d1 = dir.cross(self.p1 - self.p0).abs();
                let d2 = dir.cross(self.p2 - self.p0).abs();
                d1.max(d2)
            }
            // Closed chord: measure from the shared endpoint instead.
            None => self.p0.distance(self.p1).max(self.p0.distance(self.p2)),
        }
    }

    /// Appends the parameter of each piece boundary to `out`, starting with
    /// `0.0` and ending with `1.0`.
    pub fn flatten_into(&self, tolerance: f32, max_depth: u32, out: &mut Vec<f32>) {
        out.push(0.0);
        self.subdivide(0.0, 1.0, tolerance, max_depth, out);
    }

    fn subdivide(&self, t0: f32, t1: f32, tolerance: f32, depth: u32, out: &mut Vec<f32>) {
        if depth == 0 || self.flatness() <= tolerance {
            out.push(t1);
            return;
        }
        let tm = (t0 + t1) * 0.5;
        let (left, right) = self.split_half();
        left.subdivide(t0, tm, tolerance, depth - 1, out);
        right.subdivide(tm, t1, tolerance, depth - 1, out);
    }
}
