//! Window and runtime loop.
//!
//! Owns the `winit` EventLoop and one Window per scene, each with its own
//! GPU context and shape pipeline.

mod runtime;

pub use runtime::{DEFAULT_VERTEX_BUFFER_BYTES, Runtime, RuntimeConfig};
