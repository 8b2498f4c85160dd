use anyhow::{Context, Result};
use winit::window::Window;

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::frame::{FrameBackend, FrameStart};
use crate::paint::Color;

use super::ShapePipeline;

/// [`FrameBackend`] over a window surface and its [`ShapePipeline`].
///
/// Holds the acquired frame between `begin_frame` and `end_frame`; the
/// surface texture is released by `end_frame` (presented) or `abort_frame`
/// (dropped).
pub struct GpuFrameBackend<'a, 'w> {
    gpu: &'a mut Gpu<'w>,
    window: &'a Window,
    pipeline: &'a mut ShapePipeline,
    clear: Color,
    frame: Option<GpuFrame>,
}

impl<'a, 'w> GpuFrameBackend<'a, 'w> {
    pub fn new(
        gpu: &'a mut Gpu<'w>,
        window: &'a Window,
        pipeline: &'a mut ShapePipeline,
        clear: Color,
    ) -> Self {
        Self { gpu, window, pipeline, clear, frame: None }
    }
}

impl FrameBackend for GpuFrameBackend<'_, '_> {
    fn capacity_bytes(&self) -> usize {
        self.pipeline.capacity_bytes()
    }

    fn begin_frame(&mut self) -> Result<FrameStart> {
        anyhow::ensure!(self.frame.is_none(), "previous frame was never finished");

        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return Ok(FrameStart::Skip);
        }

        let frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("surface error: {err}");
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(anyhow::anyhow!("surface out of memory")),
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        Ok(FrameStart::Skip)
                    }
                };
            }
        };

        self.pipeline
            .prepare(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());
        self.frame = Some(frame);
        Ok(FrameStart::Ready)
    }

    fn upload(&mut self, bytes: &[u8]) -> Result<()> {
        self.pipeline.write_vertices(self.gpu.queue(), bytes)
    }

    fn draw(&mut self, vertex_count: u32) -> Result<()> {
        let clear = self.clear;
        let frame = self.frame.as_mut().context("no frame in flight")?;
        self.pipeline.record(&mut frame.encoder, &frame.view, clear, vertex_count)
    }

    fn end_frame(&mut self) -> Result<()> {
        let frame = self.frame.take().context("no frame in flight")?;
        self.window.pre_present_notify();
        self.gpu.present(frame);
        Ok(())
    }

    fn abort_frame(&mut self) {
        self.frame = None;
    }
}
