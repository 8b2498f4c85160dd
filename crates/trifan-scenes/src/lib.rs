//! Classic-control scenes drawn with trifan primitives.
//!
//! Each scene is a plain function from a [`SceneState`] to shape calls on a
//! [`Canvas`](trifan_engine::Canvas). Geometry is in the 600×400 logical
//! canvas, origin at the center, +Y up.

pub mod acrobot;
pub mod cart_pole;
pub mod mountain_car;
pub mod pendulum;

mod kind;
pub mod palette;
mod state;

pub use kind::{SceneKind, UnknownScene};
pub use state::{SceneState, Simulation, StepOutcome};

use trifan_engine::Vec2;

#[inline]
pub(crate) fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}
