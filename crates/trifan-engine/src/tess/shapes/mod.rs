//! Shape entry points.
//!
//! Each file adds one family of methods to [`Tessellator`](super::Tessellator).
//! Every method validates its input, reserves the exact vertex count it is
//! about to write, then emits whole triangles.

mod arc;
mod bezier;
mod capsule;
mod circle;
mod rect;
mod triangle;
