//! Frame timing.
//!
//! - one [`FrameClock`] per window, ticked once per presented frame
//! - one [`FixedStep`] per simulation, fed the clock's delta

mod fixed_step;
mod frame_clock;

pub use fixed_step::FixedStep;
pub use frame_clock::{FrameClock, FrameTime};
