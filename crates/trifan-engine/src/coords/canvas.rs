use super::Vec2;

/// Fixed logical drawing surface.
///
/// Geometry is authored in this space independent of the physical window size:
/// origin at the center, +X right, +Y up. The vertex shader maps it to NDC by
/// dividing by [`half_extent`](Self::half_extent).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LogicalCanvas {
    pub width: f32,
    pub height: f32,
}

impl LogicalCanvas {
    pub const DEFAULT_WIDTH: f32 = 600.0;
    pub const DEFAULT_HEIGHT: f32 = 400.0;

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Half the canvas size; the divisor used for the NDC mapping.
    #[inline]
    pub fn half_extent(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Maps a logical position to normalized device coordinates.
    ///
    /// Mirrors the vertex shader so CPU-side checks agree with the GPU.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        let h = self.half_extent();
        Vec2::new(p.x / h.x, p.y / h.y)
    }
}

impl Default for LogicalCanvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}
