//! Cart on a track balancing a pole.
//!
//! State: `[x, x_dot, theta, theta_dot]`; `theta = 0` is upright and positive
//! angles lean right.

use std::f64::consts::FRAC_PI_2;

use trifan_engine::{Canvas, TessError};

use crate::SceneState;
use crate::palette::{AXLE, INK, WOOD};
use crate::v;

/// Logical units per environment meter.
const SCALE: f64 = 125.0;
const POLE_HALF: f64 = 62.5;

pub fn draw(state: &SceneState, canvas: &mut Canvas<'_>) -> Result<(), TessError> {
    let x = state.get(0) * SCALE;
    let a = -state.get(2) + FRAC_PI_2;

    canvas.capsule(v(-300.0, -100.0), v(300.0, -100.0), 1.0, INK)?;
    canvas.rectangle(v(x, -100.0), v(50.0, 30.0), 0.0, INK)?;
    canvas.rectangle(
        v(x + a.cos() * POLE_HALF, -95.0 + a.sin() * POLE_HALF),
        v(135.0, 12.5),
        a as f32,
        WOOD,
    )?;
    canvas.circle(v(x, -95.0), 5.0, AXLE)?;
    Ok(())
}
