//! Window management module
//!
//! Hosts the effect in a winit window: owns the surface, turns winit events
//! into [`Event`]s and calls the frame callback once per redraw.

pub mod event;
pub mod frame_io;
pub mod settings;

pub use event::{Event, Key};
pub use frame_io::{FrameInput, FrameOutput, Viewport};
pub use settings::WindowSettings;

use crate::animation::{AnimationLoop, StopHandle};
use crate::context::WgpuContext;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// A window with GPU rendering context.
pub struct Window {
    settings: WindowSettings,
    animation: AnimationLoop,
}

impl Window {
    /// Create a new window with the given settings.
    pub fn new(settings: WindowSettings) -> anyhow::Result<Self> {
        Ok(Self {
            settings,
            animation: AnimationLoop::new(),
        })
    }

    /// Handle that ends the render loop after the current frame.
    pub fn stop_handle(&self) -> StopHandle {
        self.animation.stop_handle()
    }

    /// Run the render loop with a callback.
    ///
    /// The callback receives a `FrameInput` and should return a `FrameOutput`.
    /// Returns once the window closes, the callback asks to exit, or the
    /// stop handle fires.
    pub fn render_loop<F, S>(self, state_init: S, callback: F) -> anyhow::Result<()>
    where
        F: FnMut(&mut S, FrameInput<'_>) -> FrameOutput + 'static,
        S: 'static,
    {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            settings: self.settings,
            animation: self.animation,
            state: state_init,
            callback,
            graphics: None,
            error: None,
            events: Vec::new(),
            cursor: None,
        };

        event_loop.run_app(&mut app)?;

        match app.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct Graphics {
    window: Arc<winit::window::Window>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    ctx: WgpuContext,
    scale_factor: f64,
}

impl Graphics {
    fn create(settings: &WindowSettings, event_loop: &ActiveEventLoop) -> anyhow::Result<Self> {
        let window_attrs = winit::window::WindowAttributes::default()
            .with_title(&settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                settings.size.0,
                settings.size.1,
            ))
            .with_resizable(settings.resizable);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let (ctx, adapter) = WgpuContext::new_blocking(&instance, Some(&surface))?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if settings.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&ctx.device, &config);

        tracing::info!(
            width = config.width,
            height = config.height,
            format = ?config.format,
            scale_factor = window.scale_factor(),
            "window surface ready"
        );

        Ok(Self {
            scale_factor: window.scale_factor(),
            window,
            surface,
            config,
            ctx,
        })
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            x: 0,
            y: 0,
            width: self.config.width,
            height: self.config.height,
        }
    }
}

struct App<S, F> {
    settings: WindowSettings,
    animation: AnimationLoop,
    state: S,
    callback: F,
    graphics: Option<Graphics>,
    error: Option<anyhow::Error>,
    events: Vec<Event>,
    cursor: Option<(f32, f32)>,
}

impl<S, F> ApplicationHandler for App<S, F>
where
    F: FnMut(&mut S, FrameInput<'_>) -> FrameOutput + 'static,
    S: 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match Graphics::create(&self.settings, event_loop) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(err) => {
                tracing::error!("failed to initialize window: {:#}", err);
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(graphics) = &mut self.graphics else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.animation.stop_handle().stop();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    graphics.config.width = size.width;
                    graphics.config.height = size.height;
                    graphics
                        .surface
                        .configure(&graphics.ctx.device, &graphics.config);
                }
                self.events.push(Event::Resize {
                    width: size.width,
                    height: size.height,
                });
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                graphics.scale_factor = scale_factor;
                self.events.push(Event::ScaleFactorChanged { scale_factor });
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = (position.x as f32, position.y as f32);
                self.cursor = Some(position);
                self.events.push(Event::PointerMove { position });
            }
            WindowEvent::CursorEntered { .. } => {
                // The entry point arrives with the next CursorMoved.
                self.events.push(Event::PointerEnter { position: None });
            }
            WindowEvent::CursorLeft { .. } => {
                self.events.push(Event::PointerLeave {
                    position: self.cursor.take(),
                });
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state == winit::event::ElementState::Pressed {
                    if let Some(key) = Key::from_winit(&key_event.logical_key) {
                        self.events.push(Event::KeyPress { key });
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if !self.animation.is_running() {
                    event_loop.exit();
                    return;
                }

                let surface_texture = match graphics.surface.get_current_texture() {
                    Ok(texture) => texture,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        graphics
                            .surface
                            .configure(&graphics.ctx.device, &graphics.config);
                        return;
                    }
                    Err(e) => {
                        tracing::error!("Surface error: {:?}", e);
                        return;
                    }
                };

                let view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let events = std::mem::take(&mut self.events);
                let state = &mut self.state;
                let callback = &mut self.callback;
                let mut output = FrameOutput::new();

                self.animation.tick(|frame| {
                    let frame_input = FrameInput {
                        frame,
                        events,
                        viewport: graphics.viewport(),
                        scale_factor: graphics.scale_factor,
                        ctx: &graphics.ctx,
                        surface_view: &view,
                        surface_format: graphics.config.format,
                    };
                    output = callback(state, frame_input);
                });

                graphics.window.pre_present_notify();
                surface_texture.present();

                if output.exit {
                    self.animation.stop_handle().stop();
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}
