//! Coordinate and geometry types shared by the tessellator, scenes and renderer.
//!
//! Canonical CPU space:
//! - Logical canvas units (600×400 by default)
//! - Origin at the canvas center
//! - +X right, +Y up
//!
//! The shape shader converts to NDC by dividing by half the canvas size.

mod canvas;
mod rect;
mod vec2;

pub use canvas::LogicalCanvas;
pub use rect::Rect;
pub use vec2::Vec2;
