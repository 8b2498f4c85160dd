use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::error::ensure_finite;
use crate::tess::{ShapeKind, TessError, Tessellator};

impl Tessellator {
    /// Oriented rectangle as two triangles.
    ///
    /// `rotation` is counter-clockwise radians about `center`. Negative sizes
    /// are treated by magnitude.
    pub fn rectangle(
        &mut self,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        ensure_finite(ShapeKind::Rectangle, &[center.x, center.y, size.x, size.y, rotation])?;

        let hx = size.x.abs() * 0.5;
        let hy = size.y.abs() * 0.5;
        let corner = |sx: f32, sy: f32| center + Vec2::new(sx * hx, sy * hy).rotate(rotation);

        let mut emit = self.buffer.reserve(ShapeKind::Rectangle, 6, color)?;
        emit.quad(corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0));
        Ok(emit.finish())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::tess::Tessellator;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn red_square_end_to_end() {
        let red = Color::rgba(255, 0, 0, 255);
        let mut t = Tessellator::new();
        t.clear();
        t.rectangle(v(0.0, 0.0), v(10.0, 10.0), 0.0, red).unwrap();
        let (count, bytes) = t.flush();

        assert_eq!(count, 6);
        assert_eq!(bytes.len(), 72);
        for rec in bytes.chunks_exact(12) {
            assert_eq!(&rec[8..12], &[255, 0, 0, 255]);
        }

        let positions: Vec<Vec2> = t.vertices().iter().map(|v| v.position()).collect();
        for corner in [v(5.0, 5.0), v(-5.0, 5.0), v(5.0, -5.0), v(-5.0, -5.0)] {
            assert!(positions.contains(&corner), "missing corner {corner:?}");
        }
    }

    #[test]
    fn axis_aligned_bounds_are_exact() {
        let mut t = Tessellator::new();
        let (center, size) = (v(-95.0, 12.25), v(50.0, 30.0));
        t.rectangle(center, size, 0.0, Color::BLACK).unwrap();
        assert_eq!(
            t.bounds().unwrap(),
            Rect::from_center_half_extent(center, v(25.0, 15.0))
        );
    }

    #[test]
    fn quarter_turn_swaps_extent() {
        let mut t = Tessellator::new();
        t.rectangle(v(0.0, 0.0), v(40.0, 20.0), FRAC_PI_2, Color::BLACK).unwrap();
        let b = t.bounds().unwrap();
        assert!((b.width() - 20.0).abs() < 1e-4);
        assert!((b.height() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn two_ccw_triangles() {
        let mut t = Tessellator::new();
        t.rectangle(v(3.0, 3.0), v(135.0, 12.5), 0.7, Color::BLACK).unwrap();
        assert_eq!(t.len(), 6);
        for tri in t.vertices().chunks(3) {
            let (a, b, c) = (tri[0].position(), tri[1].position(), tri[2].position());
            assert!((b - a).cross(c - a) > 0.0);
        }
    }

    #[test]
    fn negative_size_keeps_winding() {
        let mut t = Tessellator::new();
        t.rectangle(v(0.0, 0.0), v(-4.0, -2.0), 0.0, Color::BLACK).unwrap();
        assert_eq!(t.bounds().unwrap(), Rect::new(v(-2.0, -1.0), v(2.0, 1.0)));
    }
}
