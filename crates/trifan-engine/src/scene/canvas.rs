use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::{TessError, Tessellator};

use super::ShapeCmd;

/// Drawing surface handed to a scene's draw routine for one frame.
///
/// Exposes the shape operations of the frame's [`Tessellator`] and nothing
/// else: the frame driver owns `clear` and `flush`.
pub struct Canvas<'a> {
    tess: &'a mut Tessellator,
}

impl<'a> Canvas<'a> {
    pub fn new(tess: &'a mut Tessellator) -> Self {
        Self { tess }
    }

    #[inline]
    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<usize, TessError> {
        self.tess.circle(center, radius, color)
    }

    #[inline]
    pub fn capsule(&mut self, p0: Vec2, p1: Vec2, radius: f32, color: Color) -> Result<usize, TessError> {
        self.tess.capsule(p0, p1, radius, color)
    }

    #[inline]
    pub fn rectangle(
        &mut self,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        self.tess.rectangle(center, size, rotation, color)
    }

    #[inline]
    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) -> Result<usize, TessError> {
        self.tess.triangle(a, b, c, color)
    }

    #[inline]
    pub fn arc(
        &mut self,
        center: Vec2,
        start_angle: f32,
        end_angle: f32,
        radius: f32,
        thickness: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        self.tess.arc(center, start_angle, end_angle, radius, thickness, color)
    }

    #[inline]
    pub fn bezier(
        &mut self,
        p0: Vec2,
        c0: Vec2,
        p1: Vec2,
        c1: Vec2,
        thickness: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        self.tess.bezier(p0, c0, p1, c1, thickness, color)
    }

    #[inline]
    pub fn bezier_directed(
        &mut self,
        start: Vec2,
        start_direction: Vec2,
        end: Vec2,
        end_direction: Vec2,
        thickness: f32,
        color: Color,
    ) -> Result<usize, TessError> {
        self.tess.bezier_directed(start, start_direction, end, end_direction, thickness, color)
    }

    #[inline]
    pub fn draw(&mut self, cmd: &ShapeCmd) -> Result<usize, TessError> {
        self.tess.draw(cmd)
    }

    /// Vertices emitted so far this frame.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.tess.len()
    }

    /// Vertices that still fit in the frame buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tess.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_appends_to_the_borrowed_tessellator() {
        let mut t = Tessellator::new();
        {
            let mut canvas = Canvas::new(&mut t);
            canvas.rectangle(Vec2::zero(), Vec2::new(2.0, 2.0), 0.0, Color::WHITE).unwrap();
            canvas.circle(Vec2::zero(), 1.0, Color::WHITE).unwrap();
            assert_eq!(canvas.vertex_count(), 6 + 48);
            assert_eq!(canvas.remaining(), 5461 - 54);
        }
        assert_eq!(t.len(), 54);
    }
}
