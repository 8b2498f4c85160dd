//! trifan engine crate.
//!
//! Tessellates 2D primitives into one triangle list per frame and renders it
//! with a single draw call, one window per scene.

pub mod tess;
pub mod frame;
pub mod scene;

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;

pub use coords::{LogicalCanvas, Vec2};
pub use frame::{FrameBackend, FrameDriver, FrameOutcome, FrameStart, FrameStats};
pub use paint::Color;
pub use scene::{Canvas, ShapeCmd};
pub use tess::{ShapeKind, TessError, Tessellator, TessellatorConfig, Vertex};
