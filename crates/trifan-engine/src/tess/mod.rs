//! Shape tessellation into a fixed-capacity triangle list.
//!
//! A [`Tessellator`] turns shape calls into packed [`Vertex`] records in
//! logical canvas units. Every shape call is atomic: it either appends all of
//! its triangles or fails with [`TessError`] and appends nothing.

mod buffer;
pub mod config;
pub mod error;
pub mod flatten;
mod shapes;
mod tessellator;
mod vertex;

pub use config::{MIN_CURVE_SEGMENTS, TessellatorConfig};
pub use error::{ShapeKind, TessError};
pub use flatten::CubicBez;
pub use tessellator::Tessellator;
pub use vertex::Vertex;
