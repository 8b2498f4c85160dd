//! What draw routines see: a per-frame [`Canvas`] and the [`ShapeCmd`] form of
//! every primitive.

mod canvas;
mod cmd;

pub use canvas::Canvas;
pub use cmd::ShapeCmd;
