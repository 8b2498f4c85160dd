use anyhow::Result;
use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::frame::{FrameDriver, FrameOutcome};
use crate::paint::Color;
use crate::render::{GpuFrameBackend, ShapePipeline};
use crate::scene::Canvas;
use crate::tess::TessError;
use crate::time::FrameTime;

pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// `'a` is the callback invocation; `'w` is the window borrow carried by
/// `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub pipeline: &'a mut ShapePipeline,
    pub time: FrameTime,
}

impl FrameCtx<'_, '_> {
    /// Renders one frame of `driver` into this window.
    ///
    /// The surface is cleared to `clear`, `draw` fills the canvas, and the
    /// result goes out in a single draw call.
    pub fn render<F>(&mut self, driver: &mut FrameDriver, clear: Color, draw: F) -> Result<FrameOutcome>
    where
        F: FnOnce(&mut Canvas<'_>) -> Result<(), TessError>,
    {
        let mut backend = GpuFrameBackend::new(self.gpu, self.window.window, self.pipeline, clear);
        driver.render(&mut backend, draw)
    }
}
