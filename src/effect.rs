//! The hover text effect
//!
//! [`HoverScene`] holds the CPU side of the effect: configuration, viewport,
//! camera and pointer tracker. [`HoverTextEffect`] wraps it with the GPU
//! resources (text texture, quad, material, MSAA target). Hosts feed events,
//! call [`update`](HoverTextEffect::update) once per frame and then
//! [`render`](HoverTextEffect::render).

use crate::config::EffectConfig;
use crate::context::WgpuContext;
use crate::core::render_states::ClearState;
use crate::core::texture::{MultisampleTexture, Texture2D};
use crate::error::HoverError;
use crate::input::{ContainerRect, InputTracker};
use crate::renderer::{HoverMaterial, HoverUniform, OrthographicCamera, PlaneGeometry, Viewport};
use crate::text::{Rgb, TextTextureGenerator};
use glam::Vec2;

#[cfg(feature = "window")]
use crate::window::Event;

/// GPU work requested by a [`HoverScene`] change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneChange {
    /// The viewport changed size; size-dependent attachments must follow.
    pub resized: bool,
    /// The text texture must be rasterized again.
    pub reload_texture: bool,
}

impl SceneChange {
    const RELOAD: Self = Self {
        resized: false,
        reload_texture: true,
    };
}

/// Event and viewport bookkeeping for the effect.
#[derive(Debug, Clone)]
pub struct HoverScene {
    config: EffectConfig,
    tracker: InputTracker,
    camera: OrthographicCamera,
    viewport: Viewport,
    scale_factor: f64,
}

impl HoverScene {
    /// Set up a scene for a `viewport` in physical pixels.
    ///
    /// Fails with [`HoverError::EmptyContainer`] when the viewport has no area.
    pub fn new(viewport: Viewport, scale_factor: f64, config: EffectConfig) -> Result<Self, HoverError> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(HoverError::EmptyContainer {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            tracker: InputTracker::new(config.ease, config.wiring),
            camera: OrthographicCamera::for_aspect(viewport.aspect()),
            config,
            viewport,
            scale_factor,
        })
    }

    /// Get the pointer tracker.
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// Get the camera.
    pub fn camera(&self) -> &OrthographicCamera {
        &self.camera
    }

    /// Get the configuration.
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Get the current viewport in physical pixels.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Bounding box of the render container in physical pixels.
    pub fn container(&self) -> ContainerRect {
        ContainerRect::from_size(self.viewport.width as f32, self.viewport.height as f32)
    }

    /// Viewport size in logical pixels, the unit text is laid out in.
    pub fn logical_size(&self) -> (f32, f32) {
        logical_size(self.viewport, self.scale_factor)
    }

    /// React to a host event.
    #[cfg(feature = "window")]
    pub fn handle_event(&mut self, event: &Event) -> SceneChange {
        let to_vec = |p: (f32, f32)| Vec2::new(p.0, p.1);

        match event {
            Event::PointerMove { position } => self.pointer_move(to_vec(*position)),
            Event::PointerEnter { position } => self.pointer_enter(position.map(to_vec)),
            Event::PointerLeave { position } => self.pointer_leave(position.map(to_vec)),
            Event::Resize { width, height } => {
                return self.resize(Viewport {
                    x: 0,
                    y: 0,
                    width: *width,
                    height: *height,
                });
            }
            Event::ScaleFactorChanged { scale_factor } => {
                return self.set_scale_factor(*scale_factor);
            }
            Event::KeyPress { .. } => {}
        }
        SceneChange::default()
    }

    /// Pointer moved to `position` (physical pixels).
    pub fn pointer_move(&mut self, position: Vec2) {
        let rect = self.container();
        self.tracker.pointer_move(&rect, position);
    }

    /// Pointer entered the container.
    pub fn pointer_enter(&mut self, position: Option<Vec2>) {
        let rect = self.container();
        self.tracker.pointer_enter(&rect, position);
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self, position: Option<Vec2>) {
        let rect = self.container();
        self.tracker.pointer_leave(&rect, position);
    }

    /// Track a new window size. Zero-sized windows (minimized) are ignored.
    ///
    /// The camera keeps its original bounds; the texture is only rebuilt
    /// when `regenerate_on_resize` is set.
    pub fn resize(&mut self, viewport: Viewport) -> SceneChange {
        if viewport.width == 0 || viewport.height == 0 || viewport == self.viewport {
            return SceneChange::default();
        }

        self.viewport = viewport;
        SceneChange {
            resized: true,
            reload_texture: self.config.regenerate_on_resize,
        }
    }

    /// Track a new display scale factor.
    pub fn set_scale_factor(&mut self, scale_factor: f64) -> SceneChange {
        if scale_factor == self.scale_factor {
            return SceneChange::default();
        }

        self.scale_factor = scale_factor;
        SceneChange {
            resized: false,
            reload_texture: self.config.regenerate_on_resize,
        }
    }

    /// Replace the displayed string.
    pub fn set_text(&mut self, text: impl Into<String>) -> SceneChange {
        self.config.style.text = text.into();
        SceneChange::RELOAD
    }

    /// Replace the background colour behind the text.
    pub fn set_fill_color(&mut self, color: Rgb) -> SceneChange {
        self.config.style.fill_color = color;
        SceneChange::RELOAD
    }

    /// Advance smoothing one step.
    pub fn tick(&mut self) {
        self.tracker.tick();
    }

    /// Uniform values for the current state.
    pub fn uniform(&self) -> HoverUniform {
        HoverUniform::new(
            self.camera.view_projection_matrix(),
            self.tracker.mouse_uniform(),
            self.tracker.prev_mouse_uniform(),
            &self.config.distortion,
        )
    }
}

/// Mouse-reactive distortion over a text texture.
pub struct HoverTextEffect {
    scene: HoverScene,
    generator: TextTextureGenerator,
    plane: PlaneGeometry,
    material: HoverMaterial,
    msaa: Option<MultisampleTexture>,
}

impl HoverTextEffect {
    /// Build the scene for a `viewport` in physical pixels.
    ///
    /// Fails with [`HoverError::EmptyContainer`] when the viewport has no area.
    pub fn new(
        ctx: &WgpuContext,
        format: wgpu::TextureFormat,
        viewport: Viewport,
        scale_factor: f64,
        config: EffectConfig,
    ) -> anyhow::Result<Self> {
        let scene = HoverScene::new(viewport, scale_factor, config)?;
        let config = scene.config();

        let mut generator = TextTextureGenerator::new(ctx.max_texture_dimension());
        let image = generator.generate(&config.style, scene.logical_size())?;
        let texture = Texture2D::from_text_image(ctx, &image);

        let plane = PlaneGeometry::new(ctx, 2.0, 2.0);
        let material =
            HoverMaterial::new(ctx, format, config.sample_count, scene.uniform(), texture)?;

        let msaa = (config.sample_count > 1).then(|| {
            MultisampleTexture::new(
                ctx,
                viewport.width,
                viewport.height,
                format,
                config.sample_count,
            )
        });

        tracing::info!(
            text = %config.style.text,
            width = viewport.width,
            height = viewport.height,
            texture = ?(image.width, image.height),
            samples = config.sample_count,
            "hover effect initialized"
        );

        Ok(Self {
            scene,
            generator,
            plane,
            material,
            msaa,
        })
    }

    /// Get the CPU-side state.
    pub fn scene(&self) -> &HoverScene {
        &self.scene
    }

    /// Get the configuration.
    pub fn config(&self) -> &EffectConfig {
        self.scene.config()
    }

    /// React to a host event.
    #[cfg(feature = "window")]
    pub fn handle_event(&mut self, ctx: &WgpuContext, event: &Event) -> anyhow::Result<()> {
        let change = self.scene.handle_event(event);
        self.apply(ctx, change)
    }

    /// Pointer moved to `position` (physical pixels).
    pub fn pointer_move(&mut self, position: Vec2) {
        self.scene.pointer_move(position);
    }

    /// Pointer entered the container.
    pub fn pointer_enter(&mut self, position: Option<Vec2>) {
        self.scene.pointer_enter(position);
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self, position: Option<Vec2>) {
        self.scene.pointer_leave(position);
    }

    /// Track a new window size. See [`HoverScene::resize`].
    pub fn resize(&mut self, ctx: &WgpuContext, viewport: Viewport) -> anyhow::Result<()> {
        let change = self.scene.resize(viewport);
        self.apply(ctx, change)
    }

    /// Rasterize `text` with the current style and swap it in.
    pub fn regenerate_text(&mut self, ctx: &WgpuContext, text: impl Into<String>) -> anyhow::Result<()> {
        let change = self.scene.set_text(text);
        self.apply(ctx, change)
    }

    /// Change the background colour behind the text and swap the texture.
    pub fn set_fill_color(&mut self, ctx: &WgpuContext, color: Rgb) -> anyhow::Result<()> {
        let change = self.scene.set_fill_color(color);
        self.apply(ctx, change)
    }

    fn apply(&mut self, ctx: &WgpuContext, change: SceneChange) -> anyhow::Result<()> {
        if change.resized {
            let viewport = self.scene.viewport();
            if let Some(msaa) = &mut self.msaa {
                msaa.resize(ctx, viewport.width, viewport.height);
            }
            tracing::debug!(width = viewport.width, height = viewport.height, "resized");
        }
        if change.reload_texture {
            self.reload_texture(ctx)?;
        }
        Ok(())
    }

    fn reload_texture(&mut self, ctx: &WgpuContext) -> anyhow::Result<()> {
        let style = &self.scene.config().style;
        let image = self.generator.generate(style, self.scene.logical_size())?;
        self.material
            .set_texture(ctx, Texture2D::from_text_image(ctx, &image));
        tracing::debug!(
            text = %style.text,
            texture = ?(image.width, image.height),
            "text texture regenerated"
        );
        Ok(())
    }

    /// Advance smoothing one step and upload the uniforms.
    pub fn update(&mut self, ctx: &WgpuContext) {
        self.scene.tick();
        self.material.update(ctx, &self.scene.uniform());
    }

    /// Draw the quad into `target`.
    pub fn render(&self, ctx: &WgpuContext, target: &wgpu::TextureView) {
        let clear = ClearState::color(self.scene.config().clear_color.to_wgpu());
        let (view, resolve_target) = match &self.msaa {
            Some(msaa) => (msaa.view(), Some(target)),
            None => (target, None),
        };

        let mut encoder = ctx.create_encoder(Some("hover encoder"));
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hover pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: clear.color_load_op(),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.material.bind(&mut pass);
            self.plane.draw(&mut pass);
        }
        ctx.submit([encoder.finish()]);
    }

    /// One animation tick: update then render.
    pub fn frame(&mut self, ctx: &WgpuContext, target: &wgpu::TextureView) {
        self.update(ctx);
        self.render(ctx, target);
    }
}

/// Logical size of a physical viewport.
fn logical_size(viewport: Viewport, scale_factor: f64) -> (f32, f32) {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    (
        (viewport.width as f64 / scale) as f32,
        (viewport.height as f64 / scale) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationLoop;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    fn scene() -> HoverScene {
        HoverScene::new(viewport(800, 600), 1.0, EffectConfig::new().text("ARTIEL")).unwrap()
    }

    fn mouse(uniform: &HoverUniform) -> Vec2 {
        Vec2::new(uniform.mouse[0], uniform.mouse[1])
    }

    #[test]
    fn test_logical_size() {
        let viewport = viewport(2560, 1440);
        assert_eq!(logical_size(viewport, 2.0), (1280.0, 720.0));
        assert_eq!(logical_size(viewport, 0.0), (2560.0, 1440.0));
    }

    #[test]
    fn test_empty_viewport_is_rejected() {
        let err = HoverScene::new(viewport(0, 600), 1.0, EffectConfig::new()).unwrap_err();
        assert!(matches!(err, HoverError::EmptyContainer { width: 0, height: 600 }));
    }

    #[test]
    fn test_update_flips_y_into_uniform() {
        let mut scene = scene();
        scene.pointer_move(Vec2::new(200.0, 150.0));
        for _ in 0..2000 {
            scene.tick();
        }

        let uniform = scene.uniform();
        assert!((mouse(&uniform) - Vec2::new(0.25, 0.75)).length() < 1e-4);
        // u_prevMouse is the starting centre.
        assert_eq!([uniform.mouse[2], uniform.mouse[3]], [0.5, 0.5]);
        assert_eq!(uniform.params, scene.config().distortion.to_uniform());
    }

    #[test]
    fn test_centre_pointer_converges() {
        let mut scene = scene();
        scene.pointer_move(Vec2::new(400.0, 300.0));
        assert_eq!(scene.tracker().target, Vec2::splat(0.5));

        let mut animation = AnimationLoop::new();
        let stop = animation.stop_handle();
        animation.run(|frame| {
            scene.tick();
            if frame == 999 {
                stop.stop();
            }
        });

        assert_eq!(animation.frame(), 1000);
        assert!((mouse(&scene.uniform()) - Vec2::splat(0.5)).length() < 1e-4);
    }

    #[test]
    fn test_resize_tracks_container() {
        let mut scene = scene();
        let change = scene.resize(viewport(1600, 900));
        assert_eq!(
            change,
            SceneChange {
                resized: true,
                reload_texture: false
            }
        );
        assert_eq!(scene.container(), ContainerRect::from_size(1600.0, 900.0));

        // Pointer positions now normalize against the new size.
        scene.pointer_move(Vec2::new(800.0, 450.0));
        assert_eq!(scene.tracker().target, Vec2::splat(0.5));

        // Minimized and unchanged sizes are no-ops.
        assert_eq!(scene.resize(viewport(0, 0)), SceneChange::default());
        assert_eq!(scene.resize(viewport(1600, 900)), SceneChange::default());
        assert_eq!(scene.viewport(), viewport(1600, 900));
    }

    #[test]
    fn test_resize_requests_reload_when_enabled() {
        let config = EffectConfig::new().regenerate_on_resize(true);
        let mut scene = HoverScene::new(viewport(800, 600), 1.0, config).unwrap();
        assert!(scene.resize(viewport(400, 300)).reload_texture);
        assert!(scene.set_scale_factor(2.0).reload_texture);
        assert_eq!(scene.logical_size(), (200.0, 150.0));
        assert_eq!(scene.set_scale_factor(2.0), SceneChange::default());
    }

    #[test]
    fn test_text_and_colour_changes_reload() {
        let mut scene = scene();
        assert_eq!(scene.set_text("HELLO"), SceneChange::RELOAD);
        assert_eq!(scene.config().style.text, "HELLO");
        assert_eq!(scene.set_fill_color(Rgb::WHITE), SceneChange::RELOAD);
        assert_eq!(scene.config().style.fill_color, Rgb::WHITE);
    }

    #[cfg(feature = "window")]
    #[test]
    fn test_events_route_to_tracker() {
        let mut scene = scene();
        let change = scene.handle_event(&Event::PointerMove {
            position: (200.0, 150.0),
        });
        assert_eq!(change, SceneChange::default());
        assert_eq!(scene.tracker().target, Vec2::new(0.25, 0.25));

        scene.handle_event(&Event::PointerMove {
            position: (600.0, 450.0),
        });
        scene.handle_event(&Event::PointerLeave {
            position: Some((600.0, 450.0)),
        });
        assert_eq!(scene.tracker().target, Vec2::new(0.25, 0.25));

        let change = scene.handle_event(&Event::Resize {
            width: 400,
            height: 300,
        });
        assert!(change.resized);
        assert_eq!(scene.container(), ContainerRect::from_size(400.0, 300.0));

        let change = scene.handle_event(&Event::ScaleFactorChanged { scale_factor: 2.0 });
        assert!(!change.reload_texture);
        assert_eq!(scene.logical_size(), (200.0, 150.0));
    }

    #[cfg(feature = "window")]
    #[test]
    fn test_reentry_snaps_to_entry_point() {
        let mut scene = scene();
        scene.handle_event(&Event::PointerMove {
            position: (40.0, 30.0),
        });
        scene.handle_event(&Event::PointerLeave {
            position: Some((40.0, 30.0)),
        });
        scene.handle_event(&Event::PointerEnter { position: None });
        scene.handle_event(&Event::PointerMove {
            position: (760.0, 570.0),
        });
        scene.tick();

        assert!((scene.tracker().current - Vec2::splat(0.95)).length() < 1e-6);
        assert!((mouse(&scene.uniform()) - Vec2::new(0.95, 0.05)).length() < 1e-6);
    }
}
