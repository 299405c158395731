use crate::{
    data_structures::{
        instance::InstanceRaw,
        model::{ModelVertex, Vertex},
        texture::Texture,
    },
    pipelines::basic::{mk_pipeline_layout, mk_render_pipeline, volume_shader},
};

/**
 * Pipeline for translucent volumes.
 *
 * Same shader as the opaque pipeline. The instance opacity ends up in the
 * fragment alpha, which is blended over whatever was drawn before. Depth is
 * tested but not written, so translucent volumes never hide each other and
 * must be drawn after all opaque ones.
 */
pub fn mk_transparent_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    light_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout =
        mk_pipeline_layout(device, camera_bind_group_layout, light_bind_group_layout);
    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        Some(Texture::DEPTH_FORMAT),
        false,
        &[ModelVertex::desc(), InstanceRaw::desc()],
        volume_shader(),
    )
}
