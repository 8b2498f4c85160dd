/// An acquired surface texture plus the encoder recording into it.
///
/// Finish with [`Gpu::present`](super::Gpu::present) or drop it; holding it
/// blocks acquisition of the next frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
