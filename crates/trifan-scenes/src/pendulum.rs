//! Torque-driven pendulum.
//!
//! State: `[theta, theta_dot]`, `theta = 0` upright. When the last action is a
//! nonzero torque, an arrow arc around the pivot shows its direction and
//! magnitude.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use trifan_engine::{Canvas, TessError, Vec2};

use crate::SceneState;
use crate::palette::{INK, RED};
use crate::v;

const ROD: f64 = 110.0;

pub fn draw(state: &SceneState, canvas: &mut Canvas<'_>) -> Result<(), TessError> {
    let a = state.get(0) + FRAC_PI_2;

    canvas.capsule(Vec2::zero(), v(a.cos() * ROD, a.sin() * ROD), 12.0, RED)?;
    canvas.circle(Vec2::zero(), 6.0, INK)?;

    match state.last_action {
        Some(u) if u != 0.0 => torque_arrow(u, canvas),
        _ => Ok(()),
    }
}

fn torque_arrow(u: f64, canvas: &mut Canvas<'_>) -> Result<(), TessError> {
    let r = u.abs() * 25.0;
    let t = u.abs();
    let (start, end, ax) = if u > 0.0 { (FRAC_PI_2, TAU, r) } else { (-PI, FRAC_PI_2, -r) };

    canvas.arc(Vec2::zero(), start as f32, end as f32, r as f32, t as f32, INK)?;
    canvas.triangle(v(ax - 0.2 * r, -0.2 * r), v(ax, 0.25 * r), v(ax, -0.1 * r), INK)?;
    canvas.triangle(v(ax + 0.2 * r, -0.2 * r), v(ax, 0.25 * r), v(ax, -0.1 * r), INK)?;
    Ok(())
}
