//! Two-link pendulum hanging from a rail.
//!
//! State: `[theta1, theta2, dtheta1, dtheta2]`; both angles are zero when the
//! links hang straight down, `theta2` is relative to the first link.

use std::f64::consts::FRAC_PI_2;

use trifan_engine::{Canvas, TessError, Vec2};

use crate::SceneState;
use crate::palette::{CYAN, INK, OCHRE};
use crate::v;

const LINK: f64 = 110.0;
const LINK_RADIUS: f32 = 12.5;

pub fn draw(state: &SceneState, canvas: &mut Canvas<'_>) -> Result<(), TessError> {
    let a = state.get(0) - FRAC_PI_2;
    let b = a + state.get(1);

    let elbow = v(a.cos() * LINK, a.sin() * LINK);
    let tip = elbow + v(b.cos() * LINK, b.sin() * LINK);

    canvas.capsule(v(-300.0, 100.0), v(300.0, 100.0), 1.0, INK)?;
    canvas.capsule(Vec2::zero(), elbow, LINK_RADIUS, CYAN)?;
    canvas.circle(Vec2::zero(), LINK_RADIUS, OCHRE)?;
    canvas.capsule(elbow, tip, LINK_RADIUS, CYAN)?;
    canvas.circle(elbow, LINK_RADIUS, OCHRE)?;
    Ok(())
}
