//! Per-frame orchestration: clear, draw, flush, upload, one draw call, present.
//!
//! The GPU is reached only through [`FrameBackend`], so the protocol runs
//! unchanged against a real surface or a recording stub.

mod backend;
mod driver;

pub use backend::{FrameBackend, FrameStart};
pub use driver::{FrameDriver, FrameOutcome, FrameStats};
