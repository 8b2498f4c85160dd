//! Paint model.
//!
//! Every shape is filled with one flat [`Color`]; there are no gradients or
//! textures because the pipeline carries nothing but per-vertex color.

pub mod color;

pub use color::Color;
