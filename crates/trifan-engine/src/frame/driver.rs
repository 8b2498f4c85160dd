use anyhow::{Context, Result};

use crate::scene::Canvas;
use crate::tess::{TessError, Tessellator, TessellatorConfig};

use super::{FrameBackend, FrameStart};

/// What one rendered frame produced.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameStats {
    /// Index among rendered frames, starting at 0.
    pub frame_index: u64,
    pub vertex_count: u32,
    /// Bytes uploaded; always `vertex_count * 12`.
    pub bytes: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Rendered(FrameStats),
    /// The backend had no target this tick; the draw routine was not run.
    Skipped,
}

/// Runs the per-frame protocol for one scene.
///
/// Owns the scene's [`Tessellator`]; a driver is never shared between scenes.
#[derive(Debug)]
pub struct FrameDriver {
    tess: Tessellator,
    frame_index: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_config(TessellatorConfig::default())
    }

    pub fn with_config(config: TessellatorConfig) -> Self {
        Self {
            tess: Tessellator::with_config(config),
            frame_index: 0,
        }
    }

    pub fn tessellator(&self) -> &Tessellator {
        &self.tess
    }

    /// Number of frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frame_index
    }

    /// Renders one frame.
    ///
    /// 1. begin frame (a skipped frame returns [`FrameOutcome::Skipped`])
    /// 2. clear the tessellator
    /// 3. run `draw`
    /// 4. flush and upload at offset 0
    /// 5. one draw call over the flushed vertex count
    /// 6. end frame
    ///
    /// If `draw` fails the frame is aborted before upload and the error is
    /// returned; it downcasts to [`TessError`].
    pub fn render<B, F>(&mut self, backend: &mut B, draw: F) -> Result<FrameOutcome>
    where
        B: FrameBackend + ?Sized,
        F: FnOnce(&mut Canvas<'_>) -> Result<(), TessError>,
    {
        let needed = self.tess.capacity_bytes();
        let available = backend.capacity_bytes();
        anyhow::ensure!(
            available >= needed,
            "vertex buffer holds {available} bytes, tessellator needs {needed}"
        );

        if backend.begin_frame()? == FrameStart::Skip {
            log::debug!("frame {} skipped by backend", self.frame_index);
            return Ok(FrameOutcome::Skipped);
        }

        match self.record(backend, draw) {
            Ok(stats) => {
                self.frame_index += 1;
                Ok(FrameOutcome::Rendered(stats))
            }
            Err(e) => {
                backend.abort_frame();
                log::warn!("frame {} aborted: {e:#}", self.frame_index);
                Err(e)
            }
        }
    }

    fn record<B, F>(&mut self, backend: &mut B, draw: F) -> Result<FrameStats>
    where
        B: FrameBackend + ?Sized,
        F: FnOnce(&mut Canvas<'_>) -> Result<(), TessError>,
    {
        let frame_index = self.frame_index;

        self.tess.clear();
        draw(&mut Canvas::new(&mut self.tess))
            .with_context(|| format!("draw routine failed in frame {frame_index}"))?;

        let (vertex_count, bytes) = self.tess.flush();
        backend.upload(bytes).context("vertex upload failed")?;
        backend.draw(vertex_count).context("draw call failed")?;
        backend.end_frame().context("present failed")?;

        Ok(FrameStats {
            frame_index,
            vertex_count,
            bytes: bytes.len(),
        })
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
