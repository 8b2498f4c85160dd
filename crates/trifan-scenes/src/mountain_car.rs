//! Car in a valley between two hills.
//!
//! State: `[position, velocity]` with position in `[-1.2, 0.6]`; the goal
//! flag stands at 0.5.

use std::f64::consts::PI;

use trifan_engine::{Canvas, TessError};

use crate::SceneState;
use crate::palette::{FLAG, GREY, INK};
use crate::v;

const GOAL: f64 = 0.5;

fn height(x: f64) -> f64 {
    (x * 3.0).sin() * 0.45 + 0.55
}

fn slope(x: f64) -> f64 {
    (x * 3.0).cos() * 0.45 * 3.0
}

/// Environment x to logical x.
fn fx(x: f64) -> f64 {
    (x + 1.2) / 1.8 * 600.0 - 300.0
}

/// Environment height to logical y.
fn fy(y: f64) -> f64 {
    y / 1.8 * 600.0 - 200.0
}

pub fn draw(state: &SceneState, canvas: &mut Canvas<'_>) -> Result<(), TessError> {
    terrain(canvas)?;

    let x = state.get(0);
    let y = height(x);
    let (nx, ny) = {
        let (nx, ny) = (1.0, slope(x));
        let len = (nx * nx + ny * ny).sqrt();
        (nx / len, ny / len)
    };
    let a = ny.atan2(nx);
    let (cx, cy) = (fx(x) - ny * 18.0, fy(y) + nx * 18.0);
    let (sin, cos) = a.sin_cos();

    canvas.rectangle(v(cx, cy), v(40.0, 20.0), a as f32, INK)?;
    canvas.circle(v(cx - cos * 10.0 + sin * 10.0, cy - sin * 10.0 - cos * 10.0), 8.5, GREY)?;
    canvas.circle(v(cx + cos * 10.0 + sin * 10.0, cy + sin * 10.0 - cos * 10.0), 8.5, GREY)?;

    let base = fy(height(GOAL));
    canvas.rectangle(v(fx(GOAL) + 10.0, base + 30.0), v(20.0, 12.0), 0.0, FLAG)?;
    canvas.rectangle(v(fx(GOAL), base + 20.0), v(1.5, 40.0), 0.0, INK)?;
    Ok(())
}

/// The hills as three sine-shaped bezier segments between the extrema of
/// `height`, each tangent-matched to its neighbours.
fn terrain(canvas: &mut Canvas<'_>) -> Result<(), TessError> {
    let d = fx(PI / 3.0) - fx(0.0);
    let rise = v(d * 0.4, d * 0.45 / 0.78);
    let fall = v(d * 0.4, -d * 0.45 / 0.78);
    let knot = |x: f64| v(fx(x), fy(0.55));

    canvas.bezier_directed(knot(-PI * 2.0 / 3.0), rise, knot(-PI / 3.0), fall, 1.0, INK)?;
    canvas.bezier_directed(knot(-PI / 3.0), fall, knot(0.0), rise, 1.0, INK)?;
    canvas.bezier_directed(knot(0.0), rise, knot(PI / 3.0), fall, 1.0, INK)?;
    Ok(())
}
