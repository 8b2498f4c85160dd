/// GPU settings applied to every scene window.
///
/// Each window creates its own device from a clone of this struct.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format if one exists.
    ///
    /// Off by default: vertex colors are display-referred bytes and should
    /// reach the screen unconverted.
    pub prefer_srgb: bool,

    /// Adapter preference. Scenes are a few hundred triangles each, so the
    /// integrated GPU is enough.
    pub power_preference: wgpu::PowerPreference,

    /// FIFO is supported everywhere and paces each window to the display.
    pub present_mode: wgpu::PresentMode,

    /// Surface compositing. Frames are cleared to an opaque color, so
    /// `Opaque` is asked for; an unsupported request falls back to the first
    /// mode the surface offers.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Device limits. One vertex buffer and one small uniform fit within the
    /// WebGL2 downlevel set.
    pub required_limits: wgpu::Limits,

    /// Frames queued ahead of the display; a hint the backend may ignore.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            power_preference: wgpu::PowerPreference::LowPower,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_vertex_colors_unconverted() {
        let init = GpuInit::default();
        assert!(!init.prefer_srgb);
        assert_eq!(init.alpha_mode, Some(wgpu::CompositeAlphaMode::Opaque));
    }

    #[test]
    fn default_limits_cover_the_vertex_buffer() {
        let limits = GpuInit::default().required_limits;
        assert!(limits.max_buffer_size >= crate::window::DEFAULT_VERTEX_BUFFER_BYTES as u64);
        assert!(limits.max_vertex_buffers >= 1);
        assert!(limits.max_uniform_buffer_binding_size >= 16);
    }
}
