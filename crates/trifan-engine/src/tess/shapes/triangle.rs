use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::error::ensure_finite;
use crate::tess::{ShapeKind, TessError, Tessellator};

impl Tessellator {
    /// Emits `a`, `b`, `c` verbatim; winding is not corrected.
    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) -> Result<usize, TessError> {
        ensure_finite(ShapeKind::Triangle, &[a.x, a.y, b.x, b.y, c.x, c.y])?;

        let mut emit = self.buffer.reserve(ShapeKind::Triangle, 3, color)?;
        emit.triangle(a, b, c);
        Ok(emit.finish())
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::tess::Tessellator;

    #[test]
    fn clockwise_input_is_preserved() {
        let (a, b, c) = (Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
        let mut t = Tessellator::new();
        t.triangle(a, b, c, Color::BLACK).unwrap();
        let got: Vec<Vec2> = t.vertices().iter().map(|v| v.position()).collect();
        assert_eq!(got, vec![a, b, c]);
    }

    #[test]
    fn collinear_points_are_accepted() {
        let mut t = Tessellator::new();
        let p = Vec2::new(2.0, 2.0);
        assert_eq!(t.triangle(p, p, p, Color::BLACK).unwrap(), 3);
    }
}
