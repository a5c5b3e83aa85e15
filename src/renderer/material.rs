//! Hover distortion material
//!
//! Pipeline plus the three shader inputs: the text texture, `u_mouse` and
//! `u_prevMouse`. The texture lives in its own bind group so swapping it
//! leaves the uniform untouched.

use crate::context::WgpuContext;
use crate::core::buffer::UniformBuffer;
use crate::core::pipeline::PipelineBuilder;
use crate::core::render_states::CullState;
use crate::core::texture::Texture2D;
use crate::core::vertex::VertexPU;
use crate::distortion::DistortionParams;
use glam::{Mat4, Vec2};

/// Uniform block shared by both shader stages.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HoverUniform {
    /// Projection x model-view.
    pub view_proj: [[f32; 4]; 4],
    /// xy: `u_mouse`, zw: `u_prevMouse`.
    pub mouse: [f32; 4],
    /// Packed [`DistortionParams`].
    pub params: [f32; 4],
}

impl HoverUniform {
    pub fn new(view_proj: Mat4, mouse: Vec2, prev_mouse: Vec2, params: &DistortionParams) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            mouse: [mouse.x, mouse.y, prev_mouse.x, prev_mouse.y],
            params: params.to_uniform(),
        }
    }
}

/// The quad's shader material.
pub struct HoverMaterial {
    pipeline: wgpu::RenderPipeline,
    uniform: UniformBuffer<HoverUniform>,
    texture_layout: wgpu::BindGroupLayout,
    texture_bind_group: wgpu::BindGroup,
    texture: Texture2D,
}

impl HoverMaterial {
    /// Create the material around an initial texture.
    pub fn new(
        ctx: &WgpuContext,
        format: wgpu::TextureFormat,
        sample_count: u32,
        initial: HoverUniform,
        texture: Texture2D,
    ) -> anyhow::Result<Self> {
        let shader = include_str!("../shaders/hover.wgsl");

        let uniform = UniformBuffer::new(ctx, &initial, Some("hover uniform"));

        let texture_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("hover texture layout"),
                    entries: &[
                        // u_texture
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        // sampler
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline = PipelineBuilder::new(ctx)
            .label("hover pipeline")
            .shader(shader)
            .vertex_layout(VertexPU::layout())
            .bind_group_layout(uniform.bind_group_layout())
            .bind_group_layout(&texture_layout)
            .color_format(format)
            .cull(CullState::None)
            .sample_count(sample_count)
            .build()?;

        let texture_bind_group = Self::create_texture_bind_group(ctx, &texture_layout, &texture);

        Ok(Self {
            pipeline,
            uniform,
            texture_layout,
            texture_bind_group,
            texture,
        })
    }

    fn create_texture_bind_group(
        ctx: &WgpuContext,
        layout: &wgpu::BindGroupLayout,
        texture: &Texture2D,
    ) -> wgpu::BindGroup {
        ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("hover texture bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(texture.sampler()),
                },
            ],
        })
    }

    /// Replace the texture. The old one is dropped.
    pub fn set_texture(&mut self, ctx: &WgpuContext, texture: Texture2D) {
        self.texture_bind_group = Self::create_texture_bind_group(ctx, &self.texture_layout, &texture);
        self.texture = texture;
    }

    /// Get the current texture.
    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    /// Write new uniform values for the next draw.
    pub fn update(&self, ctx: &WgpuContext, uniform: &HoverUniform) {
        self.uniform.update(ctx, uniform);
    }

    /// Bind pipeline and resources on `render_pass`.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, self.uniform.bind_group(), &[]);
        render_pass.set_bind_group(1, &self.texture_bind_group, &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<HoverUniform>(), 96);
    }

    #[test]
    fn test_uniform_packing() {
        let uniform = HoverUniform::new(
            Mat4::IDENTITY,
            Vec2::new(0.1, 0.2),
            Vec2::new(0.3, 0.4),
            &DistortionParams::default(),
        );
        assert_eq!(uniform.mouse, [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(uniform.params, [40.0, 0.3, 0.3, 0.0]);
        assert_eq!(uniform.view_proj[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
