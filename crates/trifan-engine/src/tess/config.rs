use super::Vertex;

/// No curve is ever tessellated with fewer segments than this.
pub const MIN_CURVE_SEGMENTS: usize = 12;

/// Tessellation parameters for one [`Tessellator`](super::Tessellator).
///
/// Segment constants are tuning knobs, not compatibility requirements; the
/// defaults keep curvature error well under a logical unit for the radii the
/// scenes use.
#[derive(Debug, Clone, PartialEq)]
pub struct TessellatorConfig {
    /// Frame buffer size in bytes. Rounded down to whole vertices.
    pub capacity_bytes: usize,

    /// Circle segments per logical unit of radius.
    pub segments_per_unit: f32,

    /// Lower bound on full-circle segments. Values below
    /// [`MIN_CURVE_SEGMENTS`] are raised to it.
    pub min_segments: usize,

    /// Upper bound on full-circle segments, so huge radii cannot exhaust the
    /// frame buffer on their own.
    pub max_segments: usize,

    /// Maximum distance (logical units) between a bezier and its flattened
    /// polyline.
    pub flatness_tolerance: f32,

    /// Maximum bisection depth when flattening a bezier (at most
    /// `2^depth` pieces).
    pub max_subdivision_depth: u32,
}

impl TessellatorConfig {
    pub const DEFAULT_CAPACITY_BYTES: usize = 65536;

    /// Returns a copy with every field forced into its valid range.
    pub fn sanitized(&self) -> Self {
        let min_segments = self.min_segments.max(MIN_CURVE_SEGMENTS);
        let max_capacity = Vertex::SIZE.saturating_mul(u32::MAX as usize);

        Self {
            capacity_bytes: self.capacity_bytes.min(max_capacity),
            segments_per_unit: if self.segments_per_unit.is_finite() {
                self.segments_per_unit.max(0.0)
            } else {
                0.0
            },
            min_segments,
            max_segments: self.max_segments.max(min_segments),
            flatness_tolerance: if self.flatness_tolerance.is_finite()
                && self.flatness_tolerance > 0.0
            {
                self.flatness_tolerance
            } else {
                Self::default().flatness_tolerance
            },
            max_subdivision_depth: self.max_subdivision_depth.min(16),
        }
    }

    /// Frame buffer capacity in whole vertices.
    #[inline]
    pub fn capacity_vertices(&self) -> usize {
        self.capacity_bytes / Vertex::SIZE
    }
}

impl Default for TessellatorConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: Self::DEFAULT_CAPACITY_BYTES,
            segments_per_unit: 1.0,
            min_segments: 16,
            max_segments: 256,
            flatness_tolerance: 1.0,
            max_subdivision_depth: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_5461_vertices() {
        assert_eq!(TessellatorConfig::default().capacity_vertices(), 5461);
    }

    #[test]
    fn sanitized_raises_min_segments_to_floor() {
        let cfg = TessellatorConfig { min_segments: 3, max_segments: 4, ..Default::default() };
        let s = cfg.sanitized();
        assert_eq!(s.min_segments, MIN_CURVE_SEGMENTS);
        assert_eq!(s.max_segments, MIN_CURVE_SEGMENTS);
    }

    #[test]
    fn sanitized_replaces_bad_tolerance() {
        for tol in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let cfg = TessellatorConfig { flatness_tolerance: tol, ..Default::default() };
            assert_eq!(cfg.sanitized().flatness_tolerance, 1.0);
        }
    }

    #[test]
    fn sanitized_keeps_valid_config() {
        let cfg = TessellatorConfig::default();
        assert_eq!(cfg.sanitized(), cfg);
    }
}
