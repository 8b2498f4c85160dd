//! GPU side of the frame: the shape pipeline and the surface-backed
//! [`FrameBackend`](crate::frame::FrameBackend).
//!
//! Convention:
//! - vertices arrive in logical canvas units (center origin, +Y up)
//! - the vertex shader divides by half the canvas size to reach NDC

mod backend;
mod pipeline;

pub use backend::GpuFrameBackend;
pub use pipeline::ShapePipeline;
