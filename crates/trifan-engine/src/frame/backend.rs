use anyhow::Result;

/// Result of asking the backend for a new frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStart {
    /// A target is acquired; the driver must finish with `end_frame` or
    /// `abort_frame`.
    Ready,
    /// No target this tick (surface lost, timeout, minimized). Nothing else
    /// is called for the frame.
    Skip,
}

/// The GPU side of one frame, reduced to what the driver needs.
///
/// Call order for a rendered frame is always
/// `begin_frame → upload → draw → end_frame`, with exactly one `draw`.
/// A frame that fails between `begin_frame` and `end_frame` is closed with
/// `abort_frame` instead.
pub trait FrameBackend {
    /// Size of the GPU vertex buffer in bytes.
    fn capacity_bytes(&self) -> usize;

    fn begin_frame(&mut self) -> Result<FrameStart>;

    /// Writes `bytes` at offset 0 of the vertex buffer.
    fn upload(&mut self, bytes: &[u8]) -> Result<()>;

    /// Issues one non-indexed triangle-list draw over `vertex_count` vertices.
    fn draw(&mut self, vertex_count: u32) -> Result<()>;

    /// Submits and presents.
    fn end_frame(&mut self) -> Result<()>;

    /// Drops the in-flight frame without presenting it.
    fn abort_frame(&mut self) {}
}
