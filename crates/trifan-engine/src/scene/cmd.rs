use crate::coords::Vec2;
use crate::paint::Color;
use crate::tess::{ShapeKind, TessError, Tessellator};

/// One primitive draw request.
///
/// Mirrors the typed shape methods one to one; useful when draw lists are
/// built ahead of the frame or replayed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeCmd {
    Circle { center: Vec2, radius: f32, color: Color },
    Capsule { p0: Vec2, p1: Vec2, radius: f32, color: Color },
    Rectangle { center: Vec2, size: Vec2, rotation: f32, color: Color },
    Triangle { a: Vec2, b: Vec2, c: Vec2, color: Color },
    Arc { center: Vec2, start_angle: f32, end_angle: f32, radius: f32, thickness: f32, color: Color },
    Bezier { p0: Vec2, c0: Vec2, p1: Vec2, c1: Vec2, thickness: f32, color: Color },
}

impl ShapeCmd {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeCmd::Circle { .. } => ShapeKind::Circle,
            ShapeCmd::Capsule { .. } => ShapeKind::Capsule,
            ShapeCmd::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeCmd::Triangle { .. } => ShapeKind::Triangle,
            ShapeCmd::Arc { .. } => ShapeKind::Arc,
            ShapeCmd::Bezier { .. } => ShapeKind::Bezier,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            ShapeCmd::Circle { color, .. }
            | ShapeCmd::Capsule { color, .. }
            | ShapeCmd::Rectangle { color, .. }
            | ShapeCmd::Triangle { color, .. }
            | ShapeCmd::Arc { color, .. }
            | ShapeCmd::Bezier { color, .. } => color,
        }
    }
}

impl Tessellator {
    /// Dispatches a [`ShapeCmd`] to the matching shape method.
    pub fn draw(&mut self, cmd: &ShapeCmd) -> Result<usize, TessError> {
        match *cmd {
            ShapeCmd::Circle { center, radius, color } => self.circle(center, radius, color),
            ShapeCmd::Capsule { p0, p1, radius, color } => self.capsule(p0, p1, radius, color),
            ShapeCmd::Rectangle { center, size, rotation, color } => {
                self.rectangle(center, size, rotation, color)
            }
            ShapeCmd::Triangle { a, b, c, color } => self.triangle(a, b, c, color),
            ShapeCmd::Arc { center, start_angle, end_angle, radius, thickness, color } => {
                self.arc(center, start_angle, end_angle, radius, thickness, color)
            }
            ShapeCmd::Bezier { p0, c0, p1, c1, thickness, color } => {
                self.bezier(p0, c0, p1, c1, thickness, color)
            }
        }
    }

    /// Draws every command in order, stopping at the first failure.
    ///
    /// Commands before the failing one stay in the buffer.
    pub fn draw_all<'a>(
        &mut self,
        cmds: impl IntoIterator<Item = &'a ShapeCmd>,
    ) -> Result<usize, TessError> {
        cmds.into_iter().try_fold(0, |total, cmd| Ok(total + self.draw(cmd)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn dispatch_matches_direct_calls() {
        let grey = Color::rgb(128, 128, 128);
        let cmds = [
            ShapeCmd::Circle { center: v(1.0, 2.0), radius: 8.5, color: grey },
            ShapeCmd::Capsule { p0: v(0.0, 0.0), p1: v(0.0, 110.0), radius: 12.5, color: grey },
            ShapeCmd::Rectangle { center: v(0.0, -100.0), size: v(50.0, 30.0), rotation: 0.3, color: grey },
            ShapeCmd::Triangle { a: v(0.0, 0.0), b: v(1.0, 0.0), c: v(0.0, 1.0), color: grey },
            ShapeCmd::Arc { center: v(0.0, 0.0), start_angle: 0.0, end_angle: 2.0, radius: 20.0, thickness: 1.0, color: grey },
            ShapeCmd::Bezier { p0: v(0.0, 0.0), c0: v(0.0, 50.0), p1: v(90.0, 0.0), c1: v(90.0, 50.0), thickness: 1.0, color: grey },
        ];

        let mut via_cmd = Tessellator::new();
        let total = via_cmd.draw_all(&cmds).unwrap();

        let mut direct = Tessellator::new();
        direct.circle(v(1.0, 2.0), 8.5, grey).unwrap();
        direct.capsule(v(0.0, 0.0), v(0.0, 110.0), 12.5, grey).unwrap();
        direct.rectangle(v(0.0, -100.0), v(50.0, 30.0), 0.3, grey).unwrap();
        direct.triangle(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), grey).unwrap();
        direct.arc(v(0.0, 0.0), 0.0, 2.0, 20.0, 1.0, grey).unwrap();
        direct.bezier(v(0.0, 0.0), v(0.0, 50.0), v(90.0, 0.0), v(90.0, 50.0), 1.0, grey).unwrap();

        assert_eq!(total, direct.len());
        assert_eq!(via_cmd.vertices(), direct.vertices());
    }

    #[test]
    fn draw_all_stops_at_first_error() {
        let cmds = [
            ShapeCmd::Triangle { a: v(0.0, 0.0), b: v(1.0, 0.0), c: v(0.0, 1.0), color: Color::BLACK },
            ShapeCmd::Circle { center: v(f32::NAN, 0.0), radius: 1.0, color: Color::BLACK },
            ShapeCmd::Triangle { a: v(0.0, 0.0), b: v(1.0, 0.0), c: v(0.0, 1.0), color: Color::BLACK },
        ];
        let mut t = Tessellator::new();
        let err = t.draw_all(&cmds).unwrap_err();
        assert_eq!(err.shape(), ShapeKind::Circle);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn kind_and_color_accessors() {
        let cmd = ShapeCmd::Arc {
            center: Vec2::zero(),
            start_angle: 0.0,
            end_angle: 1.0,
            radius: 1.0,
            thickness: 1.0,
            color: Color::WHITE,
        };
        assert_eq!(cmd.kind(), ShapeKind::Arc);
        assert_eq!(cmd.color(), Color::WHITE);
    }
}
